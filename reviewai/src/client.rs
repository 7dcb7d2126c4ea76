use crate::config::ReviewConfig;
use crate::mapper::split_model_id;
use crate::providers::openai::{BareModelPolicy, OpenAiProvider};
use crate::providers::{ModelSupport, Provider, ProviderError};
use std::sync::Arc;

/// Client that dispatches model strings across registered adapters.
#[derive(Clone)]
pub struct AiClient {
    providers: Vec<Arc<dyn Provider>>,
}

impl AiClient {
    pub fn builder() -> AiClientBuilder {
        AiClientBuilder::new()
    }

    /// Client with the OpenAI adapter configured from `config`.
    pub fn from_config(config: &ReviewConfig) -> Result<Self, ProviderError> {
        Ok(Self::builder()
            .with_provider(OpenAiProvider::from_config(config)?)
            .build())
    }

    pub fn providers(&self) -> &[Arc<dyn Provider>] {
        &self.providers
    }

    /// Look up an adapter by tag.
    pub fn provider(&self, name: &str) -> Option<&Arc<dyn Provider>> {
        self.providers.iter().find(|p| p.name() == name)
    }

    /// Find the first adapter, in registration order, that accepts `model`.
    pub fn resolve(&self, model: &str) -> Result<(Arc<dyn Provider>, ModelSupport), ProviderError> {
        for provider in &self.providers {
            let support = provider.is_model_supported(model);
            if support.is_correct {
                tracing::debug!(model, adapter = provider.name(), "model resolved");
                return Ok((Arc::clone(provider), support));
            }
        }

        let msg = match split_model_id(model) {
            (Some(tag), _) if self.provider(tag).is_none() => {
                format!("{} (no adapter registered for `{}`)", model, tag)
            }
            _ => model.to_string(),
        };
        Err(ProviderError::UnsupportedModel(msg))
    }
}

pub struct AiClientBuilder {
    providers: Vec<Arc<dyn Provider>>,
}

impl AiClientBuilder {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Register an adapter. Earlier registrations win on overlap.
    pub fn with_provider(mut self, provider: impl Provider + 'static) -> Self {
        self.providers.push(Arc::new(provider));
        self
    }

    /// Register the OpenAI adapter for `base_url` (official API when `None`).
    pub fn with_openai(self, api_key: Option<&str>, base_url: Option<&str>, bare: BareModelPolicy) -> Self {
        self.with_provider(OpenAiProvider::new(api_key, base_url).with_bare_model_policy(bare))
    }

    pub fn build(self) -> AiClient {
        AiClient {
            providers: self.providers,
        }
    }
}

impl Default for AiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
