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

//! Page with the form to create a new post.

use crate::views;
use axum::response::Html;
use blog_core::rest::{EmptyBody, RestError};

/// GET handler for this page.
pub(crate) async fn handler(_: EmptyBody) -> Result<Html<String>, RestError> {
    Ok(Html(views::render_new()))
}
