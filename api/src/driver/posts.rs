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

//! Operations on the collection of posts.

use crate::driver::Driver;
use crate::model::*;
use blog_core::driver::DriverResult;
use log::debug;

impl Driver {
    /// Gets all existing posts in the order in which they were created.
    pub(crate) async fn get_posts(self) -> DriverResult<Vec<Post>> {
        let store = self.db.ex().await;
        Ok(store.all_posts().to_vec())
    }

    /// Creates a new post with the given `fields`, stamped with today's date.
    ///
    /// All fields are stored verbatim, including empty ones.
    pub(crate) async fn create_post(self, fields: PostFields) -> DriverResult<Post> {
        let mut tx = self.db.begin().await;
        let id = tx.next_id()?;
        let post =
            Post::new(id, fields.title, fields.content, fields.author, self.clock.today_utc());
        tx.insert(post.clone())?;
        tx.commit();
        debug!("Created post {}", id);
        Ok(post)
    }
}
