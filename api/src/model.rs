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

//! High-level data types.

use blog_core::model::{ModelError, ModelResult};
use derive_getters::Getters;
use derive_more::{Constructor, Display};
use serde::{Deserialize, Serialize};
use time::Date;

/// Identifier of a post.  Identifiers are assigned by the store and are never reused.
#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub(crate) struct PostId(u64);

impl PostId {
    /// Creates a new identifier from its numeric representation.
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Parses an identifier from its textual representation, as found in a request path.
    pub(crate) fn parse(raw: &str) -> ModelResult<Self> {
        match raw.parse::<u64>() {
            Ok(id) => Ok(Self(id)),
            Err(e) => Err(ModelError(format!("Invalid post identifier '{}': {}", raw, e))),
        }
    }

    /// Returns the identifier that follows this one, if it can be represented.
    pub(crate) fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// Returns the numeric representation of the identifier.
    #[cfg(test)]
    pub(crate) fn as_u64(self) -> u64 {
        self.0
    }
}

/// Serialization of calendar dates in the `YYYY-MM-DD` format.
mod date_format {
    use serde::{Deserializer, Serializer};
    use time::Date;
    use time::format_description::BorrowedFormatItem;
    use time::macros::format_description;

    /// Format of dates in the wire representation of a post.
    const FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

    /// Serializes `date` as a `YYYY-MM-DD` string.
    pub(super) fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let formatted = date.format(FORMAT).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }

    /// Deserializes a `YYYY-MM-DD` string into a date.
    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: String = serde::Deserialize::deserialize(deserializer)?;
        Date::parse(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// A blog post as stored and as returned by the API.
#[derive(Clone, Constructor, Debug, Deserialize, Getters, PartialEq, Serialize)]
pub(crate) struct Post {
    /// Identifier of the post, assigned at creation time.
    id: PostId,

    /// Title of the post, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,

    /// Body of the post, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,

    /// Name of the author of the post, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    author: Option<String>,

    /// Date of the last modification of the post.
    #[serde(with = "date_format")]
    date: Date,
}

/// Client-provided fields of a post, used both to create and to update posts.
#[derive(Default, Deserialize)]
#[cfg_attr(test, derive(Debug, Serialize))]
pub(crate) struct PostFields {
    /// New title of the post, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) title: Option<String>,

    /// New body of the post, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) content: Option<String>,

    /// New author of the post, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) author: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{Token, assert_tokens};
    use time::macros::date;

    #[test]
    fn test_post_id_parse_ok() {
        assert_eq!(PostId::new(0), PostId::parse("0").unwrap());
        assert_eq!(PostId::new(1234), PostId::parse("1234").unwrap());
    }

    #[test]
    fn test_post_id_parse_error() {
        for raw in ["", "abc", "-1", "12abc", "1.5", " 1"] {
            let err = PostId::parse(raw).unwrap_err();
            assert!(err.0.starts_with(&format!("Invalid post identifier '{}'", raw)));
        }
    }

    #[test]
    fn test_post_id_next() {
        assert_eq!(Some(PostId::new(2)), PostId::new(1).next());
        assert_eq!(None, PostId::new(u64::MAX).next());
    }

    #[test]
    fn test_post_id_display() {
        assert_eq!("42", PostId::new(42).to_string());
    }

    #[test]
    fn test_post_ser_de_all_fields() {
        let post = Post::new(
            PostId::new(7),
            Some("A".to_owned()),
            Some("B".to_owned()),
            Some("C".to_owned()),
            date!(2023-01-05),
        );
        assert_tokens(
            &post,
            &[
                Token::Struct { name: "Post", len: 5 },
                Token::Str("id"),
                Token::U64(7),
                Token::Str("title"),
                Token::Some,
                Token::Str("A"),
                Token::Str("content"),
                Token::Some,
                Token::Str("B"),
                Token::Str("author"),
                Token::Some,
                Token::Str("C"),
                Token::Str("date"),
                Token::Str("2023-01-05"),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_post_json_omits_missing_fields() {
        let content = Some("only content".to_owned());
        let post = Post::new(PostId::new(1), None, content, None, date!(2020-06-24));
        let json = r#"{"id":1,"content":"only content","date":"2020-06-24"}"#;
        assert_eq!(json, serde_json::to_string(&post).unwrap());
        assert_eq!(post, serde_json::from_str::<Post>(json).unwrap());
    }

    #[test]
    fn test_post_fields_de() {
        let fields: PostFields =
            serde_json::from_str(r#"{"title": "T", "author": null, "extra": 3}"#).unwrap();
        assert_eq!(Some("T"), fields.title.as_deref());
        assert_eq!(None, fields.content);
        assert_eq!(None, fields.author);

        serde_json::from_str::<PostFields>(r#"{"title": 5}"#).unwrap_err();
    }
}
