
use std::env;

use anyhow::{Context, Result};
use cores::evaluation::{DEFAULT_MIME_TYPE, EVALUATE_ENDPOINT};
use url::Url;

pub const BASE_URL_VAR: &str = "EVALUATOR_BASE_URL";
pub const API_KEY_VAR: &str = "EVALUATOR_API_KEY";
pub const DEFAULT_MIME_TYPE_VAR: &str = "EVALUATOR_DEFAULT_MIME_TYPE";

fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok()
}

#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    base_url: Url,
    api_key: Option<String>,
    default_mime_type: String,
}

impl EvaluatorConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("invalid evaluation service url {base_url:?}"))?;
        let this = Self {
            base_url,
            api_key: None,
            default_mime_type: DEFAULT_MIME_TYPE.into(),
        };
        Ok(this)
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env_lookup)
    }

    /// Like `from_env`, reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup(BASE_URL_VAR)
            .with_context(|| format!("{BASE_URL_VAR} is not set"))?;
        let this = Self::new(&base_url)?.with_overrides_from(lookup);
        Ok(this)
    }

    /// Applies `EVALUATOR_API_KEY` and `EVALUATOR_DEFAULT_MIME_TYPE` when set.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(env_lookup)
    }

    fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(api_key) = lookup(API_KEY_VAR) {
            self = self.with_api_key(api_key);
        }
        if let Some(mime_type) = lookup(DEFAULT_MIME_TYPE_VAR) {
            self = self.with_default_mime_type(mime_type);
        }
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        self.api_key = (!api_key.is_empty()).then_some(api_key);
        self
    }

    // empty values keep the current default
    pub fn with_default_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        let mime_type = mime_type.into();
        if !mime_type.is_empty() {
            self.default_mime_type = mime_type;
        }
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn default_mime_type(&self) -> &str {
        &self.default_mime_type
    }

    /// `{base_url}/evaluate`, keeping any path prefix on the base url.
    pub fn evaluate_url(&self) -> Result<Url> {
        let mut base_url = self.base_url.clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let url = base_url.join(EVALUATE_ENDPOINT)?;
        Ok(url)
    }
}
