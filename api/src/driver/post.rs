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

//! Operations on a single post.

use crate::driver::Driver;
use crate::model::*;
use blog_core::driver::{DriverError, DriverResult};
use log::debug;

/// Builds the error returned when the post `id` does not exist.
fn not_found(id: PostId) -> DriverError {
    DriverError::NotFound(format!("Post {} not found", id))
}

/// Computes the new value of a field given its `current` value and the `update` provided by the
/// client.  Absent and empty updates leave the current value untouched.
fn merge_field(current: &Option<String>, update: Option<String>) -> Option<String> {
    match update {
        Some(value) if !value.is_empty() => Some(value),
        _ => current.clone(),
    }
}

impl Driver {
    /// Gets the post identified by `id`.
    pub(crate) async fn get_post(self, id: PostId) -> DriverResult<Post> {
        let store = self.db.ex().await;
        match store.find_index_by_id(id) {
            Some(index) => Ok(store.post_at(index).clone()),
            None => Err(not_found(id)),
        }
    }

    /// Updates the post identified by `id` with the non-empty values in `fields`.
    ///
    /// The date of the post is always refreshed to today, even if no field changes.
    pub(crate) async fn update_post(self, id: PostId, fields: PostFields) -> DriverResult<Post> {
        let mut tx = self.db.begin().await;
        let index = tx.find_index_by_id(id).ok_or_else(|| not_found(id))?;

        let current = tx.post_at(index);
        let post = Post::new(
            id,
            merge_field(current.title(), fields.title),
            merge_field(current.content(), fields.content),
            merge_field(current.author(), fields.author),
            self.clock.today_utc(),
        );
        tx.replace_at(index, post.clone())?;
        tx.commit();
        debug!("Updated post {}", id);
        Ok(post)
    }

    /// Deletes the post identified by `id`.
    pub(crate) async fn delete_post(self, id: PostId) -> DriverResult<()> {
        let mut tx = self.db.begin().await;
        let index = tx.find_index_by_id(id).ok_or_else(|| not_found(id))?;
        tx.remove_at(index);
        tx.commit();
        debug!("Deleted post {}", id);
        Ok(())
    }
}
