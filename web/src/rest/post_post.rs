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

//! Form submission to update an existing post.

use crate::model::PostForm;
use crate::rest::{ApiHandle, upstream_error};
use axum::Form;
use axum::extract::{Path, State};
use axum::response::Redirect;
use blog_core::rest::RestError;

/// POST handler for this form.
pub(crate) async fn handler(
    State(api): State<ApiHandle>,
    Path(id): Path<String>,
    Form(form): Form<PostForm>,
) -> Result<Redirect, RestError> {
    api.update_post(&id, &form)
        .await
        .map_err(|e| upstream_error(e, Some(id.as_str()), "Error updating post"))?;

    Ok(Redirect::to("/"))
}
