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

//! Test utilities for the REST API.

use crate::Variant;
use crate::db::{PostStore, seed_posts};
use crate::driver::Driver;
use crate::driver::testutils::NOW;
use crate::model::*;
use crate::rest::app;
use axum::Router;
use blog_core::clocks::testutils::SettableClock;
use blog_core::db::MemoryDb;
use std::sync::Arc;
use time::Date;
use time::macros::date;

pub(crate) struct TestContext {
    db: MemoryDb<PostStore>,
    app: Router,
}

impl TestContext {
    /// Sets up a standalone deployment with an empty store.
    pub(crate) fn setup() -> Self {
        Self::setup_with(Variant::Standalone, PostStore::default())
    }

    /// Sets up a serverless deployment with the sample posts.
    pub(crate) fn setup_serverless() -> Self {
        Self::setup_with(Variant::Serverless, PostStore::with_seed(seed_posts()).unwrap())
    }

    pub(crate) fn setup_with(variant: Variant, store: PostStore) -> Self {
        let db = MemoryDb::new(store);
        let clock = Arc::new(SettableClock::new(NOW));
        let driver = Driver::new(db.clone(), clock);
        let app = app(driver, variant);
        Self { db, app }
    }

    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    pub(crate) fn into_app(self) -> Router {
        self.app
    }

    /// Returns the date that the app stamps on new and updated posts.
    pub(crate) fn today(&self) -> Date {
        NOW.date()
    }

    pub(crate) async fn posts(&self) -> Vec<Post> {
        self.db.ex().await.all_posts().to_vec()
    }

    pub(crate) async fn insert(&self, title: &str, content: &str, author: &str) -> Post {
        let mut store = self.db.ex().await;
        let post = Post::new(
            store.next_id().unwrap(),
            Some(title.to_owned()),
            Some(content.to_owned()),
            Some(author.to_owned()),
            date!(2001-02-03),
        );
        store.insert(post.clone()).unwrap();
        post
    }
}
