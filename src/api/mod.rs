pub mod auth;
pub mod questions;

use std::time::Duration;

use reqwest::{
    Client,
    RequestBuilder,
    Response,
};
use serde::Deserialize;

use crate::core::PrepwiseError;

/// Thin wrapper over `reqwest::Client` that knows the backend base URL and
/// carries the bearer token of the signed-in user. Cheap to clone, so each
/// background task gets its own copy.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, PrepwiseError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_string(), token })
    }

    pub fn with_token(&self, token: String) -> Self {
        Self { client: self.client.clone(), base_url: self.base_url.clone(), token: Some(token) }
    }

    pub fn without_token(&self) -> Self {
        Self { client: self.client.clone(), base_url: self.base_url.clone(), token: None }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(self.url(path))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(self.url(path))
    }

    fn authed(&self, builder: RequestBuilder) -> Result<RequestBuilder, PrepwiseError> {
        let token = self.token.as_deref().ok_or(PrepwiseError::NotSignedIn)?;
        Ok(builder.bearer_auth(token))
    }
}

#[derive(Deserialize)]
struct ApiMessage {
    message: String,
}

/// Map a non-success response to an error, preferring the backend's own
/// `{"message": ...}` body when it sends one.
async fn ensure_success(resp: Response) -> Result<Response, PrepwiseError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let url = resp.url().to_string();
    match resp.json::<ApiMessage>().await {
        Ok(body) => Err(PrepwiseError::Api { status: status.as_u16(), message: body.message }),
        Err(_) => Err(PrepwiseError::HttpStatus { status: status.as_u16(), url }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let api = ApiClient::new("https://example.com/", None).unwrap();
        assert_eq!(api.url("/api/auth/login"), "https://example.com/api/auth/login");
    }

    #[test]
    fn authed_requires_a_token() {
        let api = ApiClient::new("https://example.com", None).unwrap();
        let builder = api.get("/api/auth/profile");
        assert!(matches!(api.authed(builder), Err(PrepwiseError::NotSignedIn)));
    }
}
