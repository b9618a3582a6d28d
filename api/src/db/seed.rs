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

//! Initial contents of the store for deployments that start with sample posts.

use crate::model::{Post, PostId};
use time::macros::date;

/// Returns the sample posts that a serverless deployment starts with.
pub(crate) fn seed_posts() -> Vec<Post> {
    vec![
        Post::new(
            PostId::new(1),
            Some("Autumn Leaves Photography".to_owned()),
            Some(
                "Golden foliage creates stunning natural landscapes during fall seasons.".to_owned(),
            ),
            Some("River".to_owned()),
            date!(2019-11-08),
        ),
        Post::new(
            PostId::new(2),
            Some("Beginner's Guide to Stargazing".to_owned()),
            Some(
                "Identifying constellations requires minimal equipment but offers cosmic wonders."
                    .to_owned(),
            ),
            Some("Skye".to_owned()),
            date!(2022-03-17),
        ),
        Post::new(
            PostId::new(3),
            Some("Urban Gardening Techniques".to_owned()),
            Some(
                "Small-space container gardening can yield fresh herbs even in apartments."
                    .to_owned(),
            ),
            Some("Brook".to_owned()),
            date!(2020-06-24),
        ),
    ]
}
