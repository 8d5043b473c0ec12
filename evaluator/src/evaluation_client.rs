
use std::sync::Arc;

use anyhow::Result;
use cores::evaluation::EvaluationRequest;
use reqwest::{self, Client};
use serde_json::Value;
use tracing::info;
use url::Url;

use crate::config::EvaluatorConfig;
use crate::error::EvaluateError;
use crate::file_source::FileSource;
use crate::images::FileEncoder;

pub struct EvaluationClient {
    client: Client,
    encoder: FileEncoder,
    config: EvaluatorConfig,
    evaluate_url: Url,
}

impl EvaluationClient {
    pub fn new(config: EvaluatorConfig) -> Result<Arc<Self>> {
        let client = reqwest::Client::new();
        let evaluate_url = config.evaluate_url()?;
        let this = Self {
            client,
            encoder: FileEncoder::new(),
            config,
            evaluate_url,
        };
        let this = Arc::new(this);
        Ok(this)
    }

    /// Encodes `file`, posts it to the evaluate endpoint and returns the
    /// response body untouched. The first failure ends the call.
    pub async fn evaluate<F: FileSource>(&self, file: F) -> Result<Value, EvaluateError> {
        let name = file.name().to_owned();
        let mime_type = file.mime_type().map(str::to_owned);
        info!("encoding {}...", name);
        let base64 = self.encoder.encode(file).await?;
        let request = self.request_for(name, mime_type.as_deref(), base64);
        self.submit(&request).await
    }

    pub fn request_for(&self, name: String, mime_type: Option<&str>, base64: String) -> EvaluationRequest {
        let mime_type = mime_type
            .filter(|v| !v.is_empty())
            .unwrap_or(self.config.default_mime_type());
        EvaluationRequest::new(name, base64, mime_type)
    }

    pub async fn submit(&self, request: &EvaluationRequest) -> Result<Value, EvaluateError> {
        let image = &request.image;
        info!("evaluate request {} ({}, {} base64 chars)", image.name, image.mime_type, image.base64.len());
        let mut builder = self.client.post(self.evaluate_url.clone())
            .header("Content-type", "application/json; charset=utf-8");
        if let Some(api_key) = self.config.api_key() {
            builder = builder.header("Authorization", ["Bearer", api_key].join(" "));
        }
        let response = builder
            .json(request)
            .send()
            .await?;
        info!("evaluate response status {}", response.status());
        let response = response.error_for_status()?;
        let value: Value = response.json().await?;
        Ok(value)
    }
}
