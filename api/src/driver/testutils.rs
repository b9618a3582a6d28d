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

//! Test utilities for the business layer.

use crate::db::PostStore;
use crate::driver::Driver;
use crate::model::*;
use blog_core::clocks::Clock;
use blog_core::clocks::testutils::SettableClock;
use blog_core::db::MemoryDb;
use std::sync::Arc;
use time::macros::{date, datetime};
use time::{Date, OffsetDateTime};

/// Initial time of the clock used in tests.
pub(crate) const NOW: OffsetDateTime = datetime!(2023-10-17 09:30:00 UTC);

pub(crate) struct TestContext {
    db: MemoryDb<PostStore>,
    clock: Arc<SettableClock>,
    driver: Driver,
}

impl TestContext {
    pub(crate) fn setup() -> Self {
        Self::setup_with(PostStore::default())
    }

    pub(crate) fn setup_with(store: PostStore) -> Self {
        let db = MemoryDb::new(store);
        let clock = Arc::new(SettableClock::new(NOW));
        let driver = Driver::new(db.clone(), clock.clone());
        Self { db, clock, driver }
    }

    pub(crate) fn clock(&self) -> &SettableClock {
        &self.clock
    }

    pub(crate) fn driver(&self) -> Driver {
        self.driver.clone()
    }

    pub(crate) fn today(&self) -> Date {
        self.clock.today_utc()
    }

    /// Returns a copy of all posts currently in the store.
    pub(crate) async fn posts(&self) -> Vec<Post> {
        self.db.ex().await.all_posts().to_vec()
    }

    /// Inserts a post directly into the store, bypassing the driver.
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
