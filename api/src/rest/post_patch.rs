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

//! API to update an existing post.

use crate::driver::Driver;
use crate::model::PostFields;
use crate::rest::parse_post_id;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::{Json, http};
use blog_core::rest::{OptionalJson, RestError};

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<String>,
    OptionalJson(fields): OptionalJson<PostFields>,
) -> Result<impl IntoResponse, RestError> {
    let id = parse_post_id(&id)?;
    let post = driver.update_post(id, fields.unwrap_or_default()).await?;

    Ok((http::StatusCode::CREATED, Json(post)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;
    use crate::rest::testutils::*;
    use blog_core::rest::testutils::*;
    use serde_json::json;

    fn route(id: &str) -> (http::Method, String) {
        (http::Method::PATCH, format!("/posts/{}", id))
    }

    #[tokio::test]
    async fn test_partial_update() {
        let context = TestContext::setup();

        let post = context.insert("A", "B", "C").await;

        let response = OneShotBuilder::new(context.app(), route("1"))
            .send_json(json!({"content": "D"}))
            .await
            .expect_status(http::StatusCode::CREATED)
            .expect_json::<Post>()
            .await;
        let exp_post = Post::new(
            *post.id(),
            Some("A".to_owned()),
            Some("D".to_owned()),
            Some("C".to_owned()),
            context.today(),
        );
        assert_eq!(exp_post, response);

        assert_eq!(vec![exp_post], context.posts().await);
    }

    #[tokio::test]
    async fn test_empty_and_null_values_are_ignored() {
        let context = TestContext::setup();

        let post = context.insert("A", "B", "C").await;

        let response = OneShotBuilder::new(context.app(), route("1"))
            .send_json(json!({"title": "", "content": null}))
            .await
            .expect_status(http::StatusCode::CREATED)
            .expect_json::<Post>()
            .await;
        assert_eq!(post.title(), response.title());
        assert_eq!(post.content(), response.content());
        assert_eq!(post.author(), response.author());
        assert_eq!(context.today(), *response.date());
    }

    #[tokio::test]
    async fn test_missing() {
        let context = TestContext::setup();

        let post = context.insert("A", "B", "C").await;

        OneShotBuilder::new(context.app(), route("9"))
            .send_json(json!({"title": "X"}))
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error("^Post 9 not found$")
            .await;

        assert_eq!(vec![post], context.posts().await);
    }

    #[tokio::test]
    async fn test_malformed_id() {
        let context = TestContext::setup();

        OneShotBuilder::new(context.app(), route("x1"))
            .send_json(json!({"title": "X"}))
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error("^Post x1 not found$")
            .await;
    }

    #[tokio::test]
    async fn test_no_body_refreshes_date() {
        let context = TestContext::setup();

        let post = context.insert("A", "B", "C").await;

        let response = OneShotBuilder::new(context.app(), route("1"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::CREATED)
            .expect_json::<Post>()
            .await;
        let exp_post = Post::new(
            *post.id(),
            Some("A".to_owned()),
            Some("B".to_owned()),
            Some("C".to_owned()),
            context.today(),
        );
        assert_eq!(exp_post, response);
    }

    #[tokio::test]
    async fn test_malformed_id_without_body() {
        let context = TestContext::setup();

        OneShotBuilder::new(context.app(), route("abc"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error("^Post abc not found$")
            .await;
    }

    test_payload_must_be_json!(TestContext::setup().into_app(), route("1"));
}
