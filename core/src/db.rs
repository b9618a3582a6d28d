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

//! Process-local database abstraction.
//!
//! Services keep all of their state in memory, scoped to the lifetime of the process.  The
//! `MemoryDb` type wraps the service-specific state type and hands out either direct access to it
//! or a transaction that only becomes visible to others once committed.
//!
//! A `MemoryDb` is meant to be constructed once when the service starts and then passed around by
//! handle (cloning it is cheap).  Independent instances never share state, which makes it easy to
//! run many of them side by side in tests.

use derivative::Derivative;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Database errors.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DbError {
    /// Indicates that a request to create an entry failed because it already exists.
    #[error("Already exists")]
    AlreadyExists,

    /// Indicates a failure processing the data that already exists in the database.
    #[error("Data integrity error: {0}")]
    DataIntegrityError(String),
}

/// Result type for this module.
pub type DbResult<T> = Result<T, DbError>;

/// Handle to the in-memory state `S` of a service.
///
/// All accesses are serialized: whoever holds an executor or a transaction has exclusive access to
/// the state until it is dropped.
#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct MemoryDb<S> {
    /// The state shared by all clones of this handle.
    state: Arc<Mutex<S>>,
}

impl<S> MemoryDb<S>
where
    S: Clone + Send + 'static,
{
    /// Creates a new database holding `state` as its initial contents.
    pub fn new(state: S) -> Self {
        Self { state: Arc::from(Mutex::from(state)) }
    }

    /// Obtains direct access to the state.
    ///
    /// Modifications done through the returned guard are visible immediately and cannot be rolled
    /// back.  This would be better called `executor` but this method is used so frequently that it
    /// makes call sites too verbose.
    pub async fn ex(&self) -> OwnedMutexGuard<S> {
        self.state.clone().lock_owned().await
    }

    /// Begins a transaction.
    ///
    /// It is the responsibility of the caller to call `commit` on the returned transaction.
    /// Otherwise the changes made through it are discarded on drop.
    pub async fn begin(&self) -> MemoryTx<S> {
        let guard = self.state.clone().lock_owned().await;
        let working = guard.clone();
        MemoryTx { guard, working }
    }
}

/// An open transaction against a `MemoryDb`.
///
/// The transaction operates on a private copy of the state and holds the database lock until it
/// is committed or dropped.
pub struct MemoryTx<S> {
    /// Exclusive access to the published state.
    guard: OwnedMutexGuard<S>,

    /// Copy of the state that receives all modifications until commit.
    working: S,
}

impl<S> MemoryTx<S> {
    /// Commits the transaction, publishing all modifications done so far.
    pub fn commit(self) {
        let Self { mut guard, working } = self;
        *guard = working;
    }
}

impl<S> Deref for MemoryTx<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.working
    }
}

impl<S> DerefMut for MemoryTx<S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut self.working
    }
}
