// Blog
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Test utilities for the HTML front end.

use crate::client::MockPostsApi;
use crate::model::Post;
use crate::rest::app;
use axum::Router;
use std::sync::Arc;

pub(crate) struct TestContext {
    api: MockPostsApi,
    app: Router,
}

impl TestContext {
    pub(crate) fn setup() -> Self {
        let api = MockPostsApi::default();
        let app = app(Arc::new(api.clone()));
        Self { api, app }
    }

    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    pub(crate) fn into_app(self) -> Router {
        self.app
    }

    pub(crate) async fn add_post(&self, title: &str, content: &str, author: &str) -> Post {
        self.api.add(title, content, author).await
    }

    pub(crate) async fn posts(&self) -> Vec<Post> {
        self.api.posts().await
    }

    /// Makes the backing API fail all requests.
    pub(crate) async fn break_api(&self) {
        self.api.set_unavailable(true).await;
    }
}
