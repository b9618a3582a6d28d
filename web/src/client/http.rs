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

//! Posts API client that talks to a remote server over HTTP.

use crate::client::{ClientError, ClientResult, PostsApi};
use crate::model::{Post, PostForm};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

/// Converts a `reqwest::Error` to a `ClientError`.
fn reqwest_error_to_client_error(e: reqwest::Error) -> ClientError {
    ClientError::Unavailable(format!("{}", e))
}

/// Converts a `reqwest::Response` to a `ClientError`.  The response should have a non-OK status.
async fn http_response_to_client_error(response: Response) -> ClientError {
    let status = response.status();

    let message = match response.text().await {
        Ok(text) => format!("HTTP request returned status {} with text '{}'", status, text),
        Err(e) => {
            format!("HTTP request returned status {} and failed to get text due to {}", status, e)
        }
    };

    match status {
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        _ => ClientError::Unavailable(message),
    }
}

/// Checks that `response` was successful and returns it, or converts it to an error otherwise.
async fn check_status(response: Response) -> ClientResult<Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(http_response_to_client_error(response).await)
    }
}

/// Checks that `response` was successful and parses its JSON body as `T`.
async fn parse_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    check_status(response).await?.json::<T>().await.map_err(reqwest_error_to_client_error)
}

/// Posts API client backed by a remote server.
#[derive(Clone)]
pub(crate) struct HttpPostsApi {
    /// Base URL of the API, including any deployment prefix such as `/api`.
    base_url: Url,

    /// Asynchronous HTTP client with which to issue the service requests.
    client: Client,
}

impl HttpPostsApi {
    /// Creates a new client for the API rooted at `base_url`.
    pub(crate) fn new(base_url: Url) -> Self {
        Self { base_url, client: Client::default() }
    }

    /// Computes the URL of the resource at `segments` under the base URL.  Every segment is
    /// percent-encoded so user-provided identifiers cannot escape the resource path.
    fn url(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        match url.path_segments_mut() {
            Ok(mut path) => {
                path.pop_if_empty().extend(segments);
            }
            Err(()) => {
                return Err(ClientError::Unavailable(format!(
                    "Cannot use {} as the base URL of the API",
                    self.base_url
                )));
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl PostsApi for HttpPostsApi {
    async fn list_posts(&self) -> ClientResult<Vec<Post>> {
        let response = self
            .client
            .get(self.url(&["posts"])?)
            .send()
            .await
            .map_err(reqwest_error_to_client_error)?;
        parse_json(response).await
    }

    async fn get_post(&self, id: &str) -> ClientResult<Post> {
        let response = self
            .client
            .get(self.url(&["posts", id])?)
            .send()
            .await
            .map_err(reqwest_error_to_client_error)?;
        parse_json(response).await
    }

    async fn create_post(&self, form: &PostForm) -> ClientResult<Post> {
        let response = self
            .client
            .post(self.url(&["posts"])?)
            .json(form)
            .send()
            .await
            .map_err(reqwest_error_to_client_error)?;
        parse_json(response).await
    }

    async fn update_post(&self, id: &str, form: &PostForm) -> ClientResult<Post> {
        let response = self
            .client
            .patch(self.url(&["posts", id])?)
            .json(form)
            .send()
            .await
            .map_err(reqwest_error_to_client_error)?;
        parse_json(response).await
    }

    async fn delete_post(&self, id: &str) -> ClientResult<()> {
        let response = self
            .client
            .delete(self.url(&["posts", id])?)
            .send()
            .await
            .map_err(reqwest_error_to_client_error)?;
        check_status(response).await?;
        Ok(())
    }
}
