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

//! In-memory storage of posts in terms of the operations needed by the server.

use crate::model::*;
use blog_core::db::{DbError, DbResult};

mod seed;
pub(crate) use seed::seed_posts;

/// The canonical collection of posts and the identifier counter.
///
/// The store is the only owner of this state.  It lives inside a `MemoryDb` for the lifetime of
/// the process and is never persisted.
#[derive(Clone, Default)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub(crate) struct PostStore {
    /// All posts in insertion order.
    posts: Vec<Post>,

    /// The largest identifier ever handed out or seeded, if any.
    last_id: Option<PostId>,
}

impl PostStore {
    /// Creates a store pre-populated with `posts`.
    ///
    /// The identifier counter starts past the largest seeded identifier so that new posts never
    /// collide with the seed.
    pub(crate) fn with_seed(posts: Vec<Post>) -> DbResult<Self> {
        let mut store = Self::default();
        for post in posts {
            store.insert(post)?;
        }
        Ok(store)
    }

    /// Gets all posts in insertion order.
    pub(crate) fn all_posts(&self) -> &[Post] {
        &self.posts
    }

    /// Allocates a new identifier that is strictly greater than any other identifier issued or
    /// seeded before.
    pub(crate) fn next_id(&mut self) -> DbResult<PostId> {
        let id = match self.last_id {
            None => PostId::new(1),
            Some(last_id) => last_id.next().ok_or_else(|| {
                DbError::DataIntegrityError("Ran out of post identifiers".to_owned())
            })?,
        };
        self.last_id = Some(id);
        Ok(id)
    }

    /// Finds the position of the post identified by `id`, if it exists.
    pub(crate) fn find_index_by_id(&self, id: PostId) -> Option<usize> {
        self.posts.iter().position(|post| *post.id() == id)
    }

    /// Gets the post at `index`, which must have been obtained from `find_index_by_id`.
    pub(crate) fn post_at(&self, index: usize) -> &Post {
        &self.posts[index]
    }

    /// Appends a new `post` to the collection.
    ///
    /// Fails if a post with the same identifier already exists.
    pub(crate) fn insert(&mut self, post: Post) -> DbResult<()> {
        let id = *post.id();
        if self.find_index_by_id(id).is_some() {
            return Err(DbError::AlreadyExists);
        }
        if self.last_id.is_none_or(|last_id| last_id < id) {
            self.last_id = Some(id);
        }
        self.posts.push(post);
        Ok(())
    }

    /// Replaces the post at `index` with `post`.  The identifier must not change.
    pub(crate) fn replace_at(&mut self, index: usize, post: Post) -> DbResult<()> {
        if self.posts[index].id() != post.id() {
            return Err(DbError::DataIntegrityError(format!(
                "Cannot replace post {} with post {}",
                self.posts[index].id(),
                post.id()
            )));
        }
        self.posts[index] = post;
        Ok(())
    }

    /// Removes the post at `index` from the collection and returns it.
    pub(crate) fn remove_at(&mut self, index: usize) -> Post {
        self.posts.remove(index)
    }
}
