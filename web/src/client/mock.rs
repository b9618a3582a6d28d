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

//! Posts API client backed by an in-memory list for testing purposes.

use crate::client::{ClientError, ClientResult, PostsApi};
use crate::model::{Post, PostForm};
use async_trait::async_trait;
use futures::lock::Mutex;
use std::sync::Arc;

/// Date stamped on all posts created or modified through the mock.
const MOCK_DATE: &str = "2023-10-17";

/// Mutable state of the mock.
#[derive(Default)]
struct MockState {
    /// All posts in creation order.
    posts: Vec<Post>,

    /// Identifier of the last post created.
    last_id: u64,

    /// Whether all calls should fail as if the API could not be reached.
    unavailable: bool,
}

impl MockState {
    /// Finds the index of the post identified by the raw `id`.
    fn find(&self, id: &str) -> ClientResult<usize> {
        id.parse::<u64>()
            .ok()
            .and_then(|id| self.posts.iter().position(|post| post.id == id))
            .ok_or_else(|| ClientError::NotFound(format!("Post {} not found", id)))
    }

    /// Fails if the mock has been configured to be unavailable.
    fn check_available(&self) -> ClientResult<()> {
        if self.unavailable {
            return Err(ClientError::Unavailable("Mock API is down".to_owned()));
        }
        Ok(())
    }
}

/// Picks the new value of a field the same way the real API does.
fn merge(current: &Option<String>, update: &Option<String>) -> Option<String> {
    match update {
        Some(value) if !value.is_empty() => Some(value.clone()),
        _ => current.clone(),
    }
}

/// Posts API that keeps posts in memory.
#[derive(Clone, Default)]
pub(crate) struct MockPostsApi {
    /// State shared by all clones of the mock.
    state: Arc<Mutex<MockState>>,
}

impl MockPostsApi {
    /// Adds a post directly to the mock, bypassing the API operations.
    pub(crate) async fn add(&self, title: &str, content: &str, author: &str) -> Post {
        let mut state = self.state.lock().await;
        state.last_id += 1;
        let post = Post {
            id: state.last_id,
            title: Some(title.to_owned()),
            content: Some(content.to_owned()),
            author: Some(author.to_owned()),
            date: "2001-02-03".to_owned(),
        };
        state.posts.push(post.clone());
        post
    }

    /// Returns a copy of all posts held by the mock.
    pub(crate) async fn posts(&self) -> Vec<Post> {
        self.state.lock().await.posts.clone()
    }

    /// Makes all future calls fail (or succeed again) as if the API could not be reached.
    pub(crate) async fn set_unavailable(&self, unavailable: bool) {
        self.state.lock().await.unavailable = unavailable;
    }
}

#[async_trait]
impl PostsApi for MockPostsApi {
    async fn list_posts(&self) -> ClientResult<Vec<Post>> {
        let state = self.state.lock().await;
        state.check_available()?;
        Ok(state.posts.clone())
    }

    async fn get_post(&self, id: &str) -> ClientResult<Post> {
        let state = self.state.lock().await;
        state.check_available()?;
        let index = state.find(id)?;
        Ok(state.posts[index].clone())
    }

    async fn create_post(&self, form: &PostForm) -> ClientResult<Post> {
        let mut state = self.state.lock().await;
        state.check_available()?;
        state.last_id += 1;
        let post = Post {
            id: state.last_id,
            title: form.title.clone(),
            content: form.content.clone(),
            author: form.author.clone(),
            date: MOCK_DATE.to_owned(),
        };
        state.posts.push(post.clone());
        Ok(post)
    }

    async fn update_post(&self, id: &str, form: &PostForm) -> ClientResult<Post> {
        let mut state = self.state.lock().await;
        state.check_available()?;
        let index = state.find(id)?;
        let post = &mut state.posts[index];
        post.title = merge(&post.title, &form.title);
        post.content = merge(&post.content, &form.content);
        post.author = merge(&post.author, &form.author);
        post.date = MOCK_DATE.to_owned();
        Ok(post.clone())
    }

    async fn delete_post(&self, id: &str) -> ClientResult<()> {
        let mut state = self.state.lock().await;
        state.check_available()?;
        let index = state.find(id)?;
        state.posts.remove(index);
        Ok(())
    }
}
