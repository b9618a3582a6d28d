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

//! Data types exchanged with the posts API and rendered by the front end.

use serde::{Deserialize, Serialize};

/// A blog post as returned by the posts API.
///
/// The front end only renders posts, so fields are kept in their wire representation.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub(crate) struct Post {
    /// Identifier of the post.
    pub(crate) id: u64,

    /// Title of the post, if any.
    #[serde(default)]
    pub(crate) title: Option<String>,

    /// Body of the post, if any.
    #[serde(default)]
    pub(crate) content: Option<String>,

    /// Name of the author of the post, if any.
    #[serde(default)]
    pub(crate) author: Option<String>,

    /// Date of the last modification of the post as `YYYY-MM-DD`.
    pub(crate) date: String,
}

/// Contents of the form used to create and edit posts.  Also used as the payload sent to the API.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub(crate) struct PostForm {
    /// Title entered by the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) title: Option<String>,

    /// Body entered by the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) content: Option<String>,

    /// Author entered by the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) author: Option<String>,
}
