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

//! HTML front end that renders blog posts served by the posts API.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use blog_core::env::{get_optional_var, get_required_var};
use derivative::Derivative;
use log::info;
use std::error::Error;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tokio::net::TcpListener;
use url::Url;

mod client;
use client::HttpPostsApi;
mod model;
mod rest;
use rest::app;
mod views;

/// Default port to listen on when none is configured.
const DEFAULT_PORT: u16 = 3001;

/// Configuration options for the front end.
#[derive(Derivative)]
#[derivative(Debug)]
#[cfg_attr(test, derivative(PartialEq))]
pub struct WebOptions {
    /// Base URL of the posts API, including the deployment prefix if any.
    pub api_url: Url,

    /// Port to listen on, always on the loopback interface.
    pub port: u16,
}

impl WebOptions {
    /// Initializes a set of options from environment variables whose name is prefixed with the
    /// given `prefix`.
    ///
    /// This will use variables such as `<prefix>_API_URL` and `<prefix>_PORT`.
    pub fn from_env(prefix: &str) -> Result<Self, String> {
        let api_url = get_required_var::<Url>(prefix, "API_URL")?;
        if api_url.cannot_be_a_base() {
            return Err(format!("Invalid API URL {}: must be an absolute URL", api_url));
        }
        Ok(Self { api_url, port: get_optional_var::<u16>(prefix, "PORT")?.unwrap_or(DEFAULT_PORT) })
    }
}

/// Serves the front end on an already-bound `listener`, fetching posts from `api_url`.
pub async fn serve_on(
    listener: TcpListener,
    api_url: Url,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("Serving front end on {} backed by {}", listener.local_addr()?, api_url);
    let app = app(Arc::new(HttpPostsApi::new(api_url)));
    axum::serve(listener, app).await?;
    Ok(())
}

/// Instantiates all resources to serve the front end as configured by `opts`.
pub async fn serve(opts: WebOptions) -> Result<(), Box<dyn Error + Send + Sync>> {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, opts.port)).await?;
    serve_on(listener, opts.api_url).await
}
