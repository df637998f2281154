//! Shared HTTP transport bound to one server base URL.

use super::types::ApiError;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Thin wrapper around `reqwest::Client` with URL joining and
/// uniform error mapping.
#[derive(Debug, Clone)]
pub struct ApiTransport {
    base_url: String,
    http: Client,
}

impl ApiTransport {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            base_url: base_url.into(),
            http: builder.build().unwrap_or_default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build URL from the base URL and a server path
    pub fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// POST a JSON body and decode a JSON response
    pub async fn post_json<Req, Res>(&self, path: &str, body: &Req) -> Result<Res, ApiError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let url = self.build_url(path);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::network(path, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::status(path, status));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::invalid_response(path, e))
    }

    /// POST one file as multipart form content and decode a JSON response
    pub async fn post_file<Res>(
        &self,
        path: &str,
        field: &str,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<Res, ApiError>
    where
        Res: DeserializeOwned,
    {
        let url = self.build_url(path);
        let part = Part::bytes(bytes).file_name(file_name);
        let form = Form::new().part(field.to_string(), part);

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::network(path, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::status(path, status));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::invalid_response(path, e))
    }
}
