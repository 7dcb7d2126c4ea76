//! OpenAI adapter: model string resolution plus request preparation for the
//! official API or any OpenAI-compatible proxy (CLIProxyAPI and friends).

use super::{ModelSupport, Provider, ProviderError};
use crate::config::ReviewConfig;
use crate::endpoint::EndpointConfig;
use crate::mapper::ModelIdentifier;
use crate::models::is_known_openai_model;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;

pub const OPENAI_ADAPTER: &str = "openai";

/// Whether a model string without an adapter prefix (`gpt-4o`) is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BareModelPolicy {
    /// Only `openai:<model>` is accepted.
    #[default]
    Reject,
    /// Bare names are treated as if prefixed with `openai:`.
    Accept,
}

pub struct OpenAiProvider {
    endpoint: EndpointConfig,
    api_key: Option<String>,
    bare_models: BareModelPolicy,
}

impl OpenAiProvider {
    pub fn new(api_key: Option<&str>, base_url: Option<&str>) -> Self {
        Self {
            endpoint: EndpointConfig::openai(base_url),
            api_key: api_key.map(String::from),
            bare_models: BareModelPolicy::default(),
        }
    }

    /// Build from explicit configuration.
    ///
    /// The official endpoint requires a key. A proxy may run without one, in
    /// which case requests are sent without an `Authorization` header.
    pub fn from_config(config: &ReviewConfig) -> Result<Self, ProviderError> {
        let provider = Self::new(config.api_key.as_deref(), config.base_url.as_deref());
        if provider.api_key.is_none() {
            if !provider.endpoint.is_custom() {
                return Err(ProviderError::AuthRequired(
                    "OpenAI API key is not configured".into(),
                ));
            }
            tracing::warn!(endpoint = provider.endpoint.url(), "no API key for custom endpoint");
        }
        Ok(provider)
    }

    pub fn with_bare_model_policy(mut self, policy: BareModelPolicy) -> Self {
        self.bare_models = policy;
        self
    }

    pub fn endpoint_config(&self) -> &EndpointConfig {
        &self.endpoint
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Decide whether `input` names a model this adapter serves.
    ///
    /// A foreign adapter tag is always rejected. With a custom endpoint any
    /// non-empty model name is accepted, since the proxy validates upstream
    /// model names itself. Against the official endpoint only models from
    /// the static registry are accepted.
    pub fn resolve(&self, input: &str) -> ModelSupport {
        let id = ModelIdentifier::parse(input);
        match id.adapter {
            Some(tag) if tag != OPENAI_ADAPTER => {
                tracing::debug!(input, tag, "model belongs to another adapter");
                return ModelSupport::unsupported();
            }
            None if self.bare_models == BareModelPolicy::Reject => {
                tracing::debug!(input, "bare model name rejected");
                return ModelSupport::unsupported();
            }
            _ => {}
        }

        if id.model.is_empty() {
            return ModelSupport::unsupported();
        }

        if self.endpoint.is_custom() {
            tracing::debug!(model = id.model, endpoint = self.endpoint.url(), "routing model through proxy");
            return ModelSupport::supported(OPENAI_ADAPTER, id.model);
        }

        if is_known_openai_model(id.model) {
            ModelSupport::supported(OPENAI_ADAPTER, id.model)
        } else {
            tracing::debug!(model = id.model, "unknown model for official endpoint");
            ModelSupport::unsupported()
        }
    }

    /// Resolve `model` and build the request body around the bare model name.
    pub fn chat_request(&self, model: &str, messages: Vec<ChatMessage>) -> Result<ChatRequest, ProviderError> {
        let support = self.resolve(model);
        let model_name = match support.model_name {
            Some(name) if support.is_correct => name,
            _ => return Err(ProviderError::UnsupportedModel(model.to_string())),
        };
        Ok(ChatRequest {
            model: model_name,
            messages,
            temperature: None,
            max_tokens: None,
            stream: false,
        })
    }

    /// Prepare (but do not send) a POST of `body` to the chat endpoint.
    pub fn prepare(&self, http: &Client, body: &ChatRequest) -> RequestBuilder {
        let req = http.post(self.endpoint.url()).json(body);
        match &self.api_key {
            Some(key) => req.header("Authorization", format!("Bearer {}", key)),
            None => req,
        }
    }
}

impl Provider for OpenAiProvider {
    fn name(&self) -> &str {
        OPENAI_ADAPTER
    }

    fn is_model_supported(&self, model: &str) -> ModelSupport {
        self.resolve(model)
    }

    fn endpoint(&self) -> &str {
        self.endpoint.url()
    }
}

// ---- Request types (OpenAI wire format) ----
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u64>,
    pub stream: bool,
}

impl ChatRequest {
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u64) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn streaming(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}
