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

//! HTML rendering of the pages served by the front end.

use crate::model::Post;
use blog_core::template;
use blog_core::template::escape_html;

/// Template for the page that lists posts.
const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// Template for the page with the form to create or edit a post.
const MODIFY_TEMPLATE: &str = include_str!("../templates/modify.html");

/// Template for a single post within the index page.
const POST_TEMPLATE: &str = r#"<article id="post-%id%">
<h2>%title%</h2>
<p><small>%date% by %author%</small></p>
<p>%content%</p>
<a href="/edit/%id%">Edit</a>
<a href="/posts/delete/%id%">Delete</a>
</article>
"#;

/// Escapes an optional post field for rendering, treating missing values as empty.
fn escape_field(field: &Option<String>) -> String {
    escape_html(field.as_deref().unwrap_or(""))
}

/// Renders a single `post` as a fragment of the index page.
fn render_post(post: &Post) -> String {
    let id = post.id.to_string();
    let title = escape_field(&post.title);
    let date = escape_html(&post.date);
    let author = escape_field(&post.author);
    let content = escape_field(&post.content);
    template::apply(
        POST_TEMPLATE,
        &[
            ("id", id.as_str()),
            ("title", title.as_str()),
            ("date", date.as_str()),
            ("author", author.as_str()),
            ("content", content.as_str()),
        ],
    )
}

/// Renders the index page showing all `posts` in the given order.
pub(crate) fn render_index(posts: &[Post]) -> String {
    let fragments = posts.iter().map(render_post).collect::<Vec<String>>().concat();
    template::apply(INDEX_TEMPLATE, &[("posts", fragments.as_str())])
}

/// Renders the page to create a new post.
pub(crate) fn render_new() -> String {
    template::apply(
        MODIFY_TEMPLATE,
        &[
            ("heading", "New Post"),
            ("action", "/posts"),
            ("title", ""),
            ("content", ""),
            ("author", ""),
            ("submit", "Create Post"),
        ],
    )
}

/// Renders the page to edit an existing `post`, with the form pre-filled with its values.
pub(crate) fn render_edit(post: &Post) -> String {
    let action = format!("/posts/{}", post.id);
    let title = escape_field(&post.title);
    let content = escape_field(&post.content);
    let author = escape_field(&post.author);
    template::apply(
        MODIFY_TEMPLATE,
        &[
            ("heading", "Edit Post"),
            ("action", action.as_str()),
            ("title", title.as_str()),
            ("content", content.as_str()),
            ("author", author.as_str()),
            ("submit", "Update Post"),
        ],
    )
}
