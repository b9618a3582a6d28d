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

//! Entry point to the REST server.

use crate::Variant;
use crate::driver::Driver;
use crate::model::PostId;
use axum::Router;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use blog_core::rest::{RestError, RestResult};
use log::{debug, info};
use tower_http::cors::CorsLayer;

mod post_delete;
mod post_get;
mod post_patch;
mod posts_get;
mod posts_post;
#[cfg(test)]
mod testutils;

/// Parses the post identifier `raw` as found in a request path.
///
/// Identifiers that cannot possibly exist are reported as missing posts, not as bad requests.
fn parse_post_id(raw: &str) -> RestResult<PostId> {
    PostId::parse(raw).map_err(|e| {
        debug!("{}", e);
        RestError::NotFound(format!("Post {} not found", raw))
    })
}

/// Logs every incoming request before handing it to the rest of the stack.
async fn log_request(request: Request, next: Next) -> Response {
    info!("{} {}", request.method(), request.uri().path());
    next.run(request).await
}

/// Creates the router for the application as exposed by the deployment `variant`.
pub(crate) fn app(driver: Driver, variant: Variant) -> Router {
    use axum::routing::get;
    let posts = Router::new()
        .route(
            "/posts/:id",
            get(post_get::handler).patch(post_patch::handler).delete(post_delete::handler),
        )
        .route("/posts", get(posts_get::handler).post(posts_post::handler));

    let router = match variant {
        Variant::Standalone => posts,
        Variant::Serverless => Router::new().nest("/api", posts),
    };

    router
        .layer(middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
        .with_state(driver)
}
