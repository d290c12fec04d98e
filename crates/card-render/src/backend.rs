//! Rendering backends
//!
//! A backend takes the assembled markup plus production options and returns
//! PDF bytes. Failures are reported with the backend's own diagnostic and are
//! never retried: a rejected document would be rejected again.

use crate::options::RenderOptions;
use crate::{RenderError, Result};
use async_trait::async_trait;
use serde::Serialize;

/// Markup and options for one conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub document_content: String,
    pub options: RenderOptions,
}

#[async_trait]
pub trait RenderBackend: Send + Sync {
    async fn render(&self, request: &RenderRequest) -> Result<Vec<u8>>;
}

/// DocRaptor document-conversion API client
pub struct DocRaptorClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl DocRaptorClient {
    pub const DEFAULT_ENDPOINT: &'static str = "https://api.docraptor.com/docs";

    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(RenderError::MissingApiKey);
        }
        Ok(Self {
            http: reqwest::Client::new(),
            api_key,
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
        })
    }

    /// Point the client at a different API endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Serialize)]
struct CreateDoc<'a> {
    doc: DocParams<'a>,
}

#[derive(Serialize)]
struct DocParams<'a> {
    #[serde(flatten)]
    options: &'a RenderOptions,
    document_content: &'a str,
}

#[async_trait]
impl RenderBackend for DocRaptorClient {
    async fn render(&self, request: &RenderRequest) -> Result<Vec<u8>> {
        let body = CreateDoc {
            doc: DocParams {
                options: &request.options,
                document_content: &request.document_content,
            },
        };

        log::debug!(
            "Submitting {} ({} bytes of markup, test={})",
            request.options.name,
            request.document_content.len(),
            request.options.test
        );

        let response = self
            .http
            .post(&self.endpoint)
            .basic_auth(&self.api_key, None::<&str>)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RenderError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
