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

//! REST service to create, read, update and delete blog posts.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use blog_core::clocks::SystemClock;
use blog_core::db::MemoryDb;
use blog_core::env::{get_optional_var, get_var};
use derivative::Derivative;
use log::info;
use std::error::Error;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::Arc;
use tokio::net::TcpListener;

mod db;
use db::{PostStore, seed_posts};
mod driver;
use driver::Driver;
mod model;
mod rest;
use rest::app;

/// Default port to listen on when none is configured.
const DEFAULT_PORT: u16 = 3000;

/// Name of the variable that serverless hosts use to tell custom handlers which port to use.
const CUSTOM_HANDLER_PORT_VAR: &str = "FUNCTIONS_CUSTOMHANDLER_PORT";

/// Deployment shape of the service.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Variant {
    /// Long-running server with an initially-empty store and routes at the root.
    Standalone,

    /// Function-style handler with a seeded store and routes under `/api`.
    Serverless,
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standalone" => Ok(Variant::Standalone),
            "serverless" => Ok(Variant::Serverless),
            _ => Err(format!("Unknown variant '{}'; must be standalone or serverless", s)),
        }
    }
}

/// Configuration options for the service.
#[derive(Derivative)]
#[derivative(Debug)]
#[cfg_attr(test, derivative(PartialEq))]
pub struct ApiOptions {
    /// Deployment shape to serve.
    pub variant: Variant,

    /// Port to listen on, always on the loopback interface.
    pub port: u16,
}

impl ApiOptions {
    /// Initializes a set of options from environment variables whose name is prefixed with the
    /// given `prefix`.
    ///
    /// This will use variables such as `<prefix>_VARIANT` and `<prefix>_PORT`.  The port can be
    /// overridden by `FUNCTIONS_CUSTOMHANDLER_PORT` when running under a serverless host.
    pub fn from_env(prefix: &str) -> Result<Self, String> {
        let variant =
            get_optional_var::<Variant>(prefix, "VARIANT")?.unwrap_or(Variant::Standalone);
        let port = match get_var::<u16>(CUSTOM_HANDLER_PORT_VAR)? {
            Some(port) => port,
            None => get_optional_var::<u16>(prefix, "PORT")?.unwrap_or(DEFAULT_PORT),
        };
        Ok(Self { variant, port })
    }
}

/// Serves the `variant` of the application on an already-bound `listener`.
pub async fn serve_on(
    listener: TcpListener,
    variant: Variant,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let store = match variant {
        Variant::Standalone => PostStore::default(),
        Variant::Serverless => PostStore::with_seed(seed_posts())?,
    };
    let db = MemoryDb::new(store);
    let driver = Driver::new(db, Arc::new(SystemClock::default()));
    let app = app(driver, variant);

    info!("Serving {:?} API on {}", variant, listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Instantiates all resources to serve the application as configured by `opts`.
///
/// While it'd be nice to push this responsibility to `main`, doing so would force us to expose many
/// crate-internal types to the public, which in turn would make dead code detection harder.
pub async fn serve(opts: ApiOptions) -> Result<(), Box<dyn Error + Send + Sync>> {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, opts.port)).await?;
    serve_on(listener, opts.variant).await
}
