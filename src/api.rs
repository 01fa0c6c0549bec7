//! HTTP client for the Career Assistant API
//!
//! Thin wrapper over `reqwest::Client` that owns the resolved API root and
//! the explicit request timeout. Test cases go through these helpers so
//! that every request carries the same timeout and URL-joining rules.

use std::time::Duration;

use reqwest::{Response, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::common::{Error, Result};

/// Client bound to one API root for the duration of a run
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    api_root: String,
}

/// A response body read eagerly, with enough context to classify it
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
    pub url: String,
}

impl RawResponse {
    async fn read(response: Response) -> Result<Self> {
        let status = response.status();
        let url = response.url().to_string();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());
        let body = response.bytes().await?.to_vec();
        Ok(Self {
            status,
            content_type,
            body,
            url,
        })
    }

    /// Body as UTF-8, lossy (error bodies are only ever displayed)
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parse the body as JSON
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Require a 2xx status, then parse the body as JSON
    pub fn success_json(&self) -> Result<Value> {
        if !self.status.is_success() {
            return Err(Error::unexpected_status(
                &self.url,
                self.status.as_u16(),
                &self.body_text(),
            ));
        }
        self.json()
    }
}

impl ApiClient {
    /// Build a client for the given API root with an explicit per-request
    /// timeout (the harness never relies on reqwest's implicit default).
    pub fn new(api_root: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_root: api_root.trim_end_matches('/').to_string(),
        })
    }

    /// The resolved API root this client is bound to
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Join a path onto the API root
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_root, path.trim_start_matches('/'))
    }

    /// GET a path and read the full response
    pub async fn get(&self, path: &str) -> Result<RawResponse> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.http.get(&url).send().await?;
        RawResponse::read(response).await
    }

    /// POST a JSON body to a path and read the full response
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<RawResponse> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self.http.post(&url).json(body).send().await?;
        RawResponse::read(response).await
    }
}
