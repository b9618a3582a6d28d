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

//! Page with the form to edit an existing post.

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

    Ok(Html(views::render_edit(&post)))
}

#[cfg(test)]
mod tests {
    use crate::rest::testutils::*;
    use axum::http;
    use blog_core::rest::testutils::*;

    fn route(id: &str) -> (http::Method, String) {
        (http::Method::GET, format!("/edit/{}", id))
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup();

        context.add_post("Tom & Jerry", "the body", "Brook").await;

        let body = OneShotBuilder::new(context.app(), route("1"))
            .send_empty()
            .await
            .take_body_as_text()
            .await;
        assert!(body.contains("Edit Post"));
        assert!(body.contains("Update Post"));
        assert!(body.contains(r#"action="/posts/1""#));
        assert!(body.contains(r#"value="Tom &amp; Jerry""#));
        assert!(body.contains(">the body</textarea>"));
    }

    #[tokio::test]
    async fn test_missing() {
        let context = TestContext::setup();

        OneShotBuilder::new(context.app(), route("3"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error("^Post with ID: 3 could not be found$")
            .await;
    }

    #[tokio::test]
    async fn test_api_unavailable() {
        let context = TestContext::setup();

        context.break_api().await;

        OneShotBuilder::new(context.app(), route("1"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::INTERNAL_SERVER_ERROR)
            .expect_error("^Error fetching post$")
            .await;
    }

    test_payload_must_be_empty!(TestContext::setup().into_app(), route("1"));
}
