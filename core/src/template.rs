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

//! Trivial templating engine.

/// Performs various named string replacements in `input` based on `replacements`.
///
/// The `input` string can have `%key%` strings in it where `key` must appear in `replacements` and
/// which will be replaced by its corresponding value.  Raw `%` characters can be escaped via `%%`
/// and nested expansions are not supported.
///
/// Templates are expected to be compiled into the binary, so malformed templates and missing
/// replacements are programming errors and cause a panic.
pub fn apply(input: &'static str, replacements: &[(&'static str, &str)]) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chunks = input.split('%');

    // The first chunk is always literal text.  After that, chunks alternate between keys and
    // literal text because every key is delimited by a pair of `%` characters.
    if let Some(text) = chunks.next() {
        output.push_str(text);
    }
    while let Some(key) = chunks.next() {
        let text = chunks.next().unwrap_or_else(|| panic!("Unterminated key {} in template", key));

        if key.is_empty() {
            output.push('%');
        } else {
            let mut values = replacements.iter().filter(|(k, _)| *k == key).map(|(_, v)| v);
            let value = values.next().unwrap_or_else(|| {
                panic!("No replacement for {} but it must have been defined", key)
            });
            assert!(values.next().is_none(), "Found two values for replacement {}", key);
            output.push_str(value);
        }

        output.push_str(text);
    }

    output
}

/// Escapes `text` so that it can be safely embedded in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#39;"),
            ch => output.push(ch),
        }
    }
    output
}
