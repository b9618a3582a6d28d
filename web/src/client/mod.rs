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

//! Clients to talk to the posts API.

use crate::model::{Post, PostForm};
use async_trait::async_trait;

mod http;
pub(crate) use http::HttpPostsApi;
#[cfg(test)]
mod mock;
#[cfg(test)]
pub(crate) use mock::MockPostsApi;

/// Errors returned by the posts API clients.
#[derive(Debug, PartialEq, thiserror::Error)]
pub(crate) enum ClientError {
    /// The API reported that the requested post does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The API could not be reached or returned an unexpected response.
    #[error("{0}")]
    Unavailable(String),
}

/// Result type for this module.
pub(crate) type ClientResult<T> = Result<T, ClientError>;

/// Interface to the operations exposed by the posts API.
///
/// Post identifiers are passed through as provided by the user because the API is in charge of
/// validating them.
#[async_trait]
pub(crate) trait PostsApi {
    /// Gets all posts.
    async fn list_posts(&self) -> ClientResult<Vec<Post>>;

    /// Gets the post identified by `id`.
    async fn get_post(&self, id: &str) -> ClientResult<Post>;

    /// Creates a new post from the values in `form`.
    async fn create_post(&self, form: &PostForm) -> ClientResult<Post>;

    /// Updates the post identified by `id` with the values in `form`.
    async fn update_post(&self, id: &str, form: &PostForm) -> ClientResult<Post>;

    /// Deletes the post identified by `id`.
    async fn delete_post(&self, id: &str) -> ClientResult<()>;
}
