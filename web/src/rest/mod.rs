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

//! Entry point to the HTML front end.

use crate::client::{ClientError, PostsApi};
use axum::Router;
use blog_core::rest::RestError;
use log::warn;
use std::sync::Arc;

mod edit_get;
mod index_get;
mod new_get;
mod post_delete_get;
mod post_get;
mod post_post;
mod posts_post;
#[cfg(test)]
mod testutils;

/// Shared handle to the posts API used by all handlers.
pub(crate) type ApiHandle = Arc<dyn PostsApi + Send + Sync>;

/// Converts a failure talking to the posts API into the error shown to the user.
///
/// Missing posts are only reported as such when the request referred to a post `id`.  All other
/// failures are logged and hidden behind the generic `message`.
fn upstream_error(e: ClientError, id: Option<&str>, message: &str) -> RestError {
    match (e, id) {
        (ClientError::NotFound(_), Some(id)) => {
            RestError::NotFound(format!("Post with ID: {} could not be found", id))
        }
        (e, _) => {
            warn!("{}: {}", message, e);
            RestError::UpstreamUnavailable(message.to_owned())
        }
    }
}

/// Creates the router for the front end, backed by the posts `api`.
pub(crate) fn app(api: ApiHandle) -> Router {
    use axum::routing::get;
    Router::new()
        .route("/", get(index_get::handler))
        .route("/new", get(new_get::handler))
        .route("/edit/:id", get(edit_get::handler))
        .route("/posts", axum::routing::post(posts_post::handler))
        .route("/posts/:id", get(post_get::handler).post(post_post::handler))
        .route("/posts/delete/:id", get(post_delete_get::handler))
        .with_state(api)
}
