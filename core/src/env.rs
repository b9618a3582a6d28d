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

//! Utilities to deal with environment variables.
//!
//! Services are configured exclusively via environment variables.  Every group of settings should
//! be represented by an options type with a `from_env(prefix: &str)` constructor built on top of
//! the functions in this module, so that all variables of a group share a common prefix.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Result type for environment errors.
type Result<T> = std::result::Result<T, String>;

/// Gets the raw value of the environment variable `name`, returning `None` if it is not set.
fn get_raw_var(name: &str) -> Result<Option<String>> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            Err(format!("Invalid value in environment variable {}", name))
        }
    }
}

/// Gets the environment variable `name` and converts it to the target type `T`, returning `None`
/// if it is not set.
pub fn get_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    match get_raw_var(name)? {
        Some(value) => match value.parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(e) => Err(format!("Invalid type in environment variable {}: {}", name, e)),
        },
        None => Ok(None),
    }
}

/// Gets an optional environment variable whose name is `<prefix>_<suffix>` with a conversion to
/// a target type `T`.
pub fn get_optional_var<T>(prefix: &str, suffix: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    get_var(&format!("{}_{}", prefix, suffix))
}

/// Gets a required environment variable whose name is `<prefix>_<suffix>` with a conversion to
/// a target type `T`.
pub fn get_required_var<T>(prefix: &str, suffix: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let name = format!("{}_{}", prefix, suffix);
    match get_var(&name)? {
        Some(value) => Ok(value),
        None => Err(format!("Required environment variable {} not present", name)),
    }
}
