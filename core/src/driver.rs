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

//! Generic business logic for any service.
//!
//! Every service should implement its own `Driver` type that holds a handle to its `MemoryDb`
//! plus any other injected dependencies, such as a clock:
//!
//! ```rust
//! use blog_core::clocks::Clock;
//! use blog_core::db::MemoryDb;
//! use std::sync::Arc;
//!
//! #[derive(Clone)]
//! struct State {}
//!
//! #[derive(Clone)]
//! pub(crate) struct Driver {
//!     /// The database that the driver uses to hold state.
//!     db: MemoryDb<State>,
//!
//!     /// The clock used to timestamp changes.
//!     clock: Arc<dyn Clock + Send + Sync>,
//! }
//! ```
//!
//! Every operation implemented in the `Driver` should consume `self` because this is the layer
//! that coordinates multiple operations against the database inside a single transaction.
//! Consuming `self` prevents the caller from easily issuing multiple operations against the driver,
//! as this would require a clone and highlight an undesirable pattern.

use crate::db::DbError;

/// Business logic errors.  These errors encompass backend and logical errors.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum DriverError {
    /// Indicates that a request to create an entry failed because it already exists.
    #[error("{0}")]
    AlreadyExists(String),

    /// Catch-all error type for unexpected database errors.
    #[error("{0}")]
    BackendError(String),

    /// Indicates that a requested entry does not exist.
    #[error("{0}")]
    NotFound(String),
}

impl From<DbError> for DriverError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::AlreadyExists => DriverError::AlreadyExists(e.to_string()),
            DbError::DataIntegrityError(_) => DriverError::BackendError(e.to_string()),
        }
    }
}

/// Result type for this module.
pub type DriverResult<T> = Result<T, DriverError>;
