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

//! Page that shows a single post.

use crate::rest::{ApiHandle, upstream_error};
use crate::views;
use axum::extract::{Path, State};
use axum::response::Html;
use blog_core::rest::{EmptyBody, RestError};

/// GET handler for this page.
pub(crate) async fn handler(
    State(api): State<ApiHandle>,
    Path(id): Path<String>,
    _: EmptyBody,
) -> Result<Html<String>, RestError> {
    let post = api
        .get_post(&id)
        .await
        .map_err(|e| upstream_error(e, Some(id.as_str()), "Error fetching post"))?;

    Ok(Html(views::render_index(&[post])))
}
