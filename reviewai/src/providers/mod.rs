pub mod openai;

use serde::Serialize;

/// Errors from provider configuration and request preparation.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Authentication required: {0}")]
    AuthRequired(String),

    #[error("Unsupported model: {0}")]
    UnsupportedModel(String),
}

/// Outcome of asking an adapter whether it handles a model string.
///
/// `is_correct == false` is an ordinary answer used to dispatch across
/// adapters, not a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSupport {
    pub is_correct: bool,
    pub model_name: Option<String>,
    pub adapter: Option<String>,
}

impl ModelSupport {
    pub fn supported(adapter: &str, model_name: &str) -> Self {
        Self {
            is_correct: true,
            model_name: Some(model_name.to_string()),
            adapter: Some(adapter.to_string()),
        }
    }

    pub fn unsupported() -> Self {
        Self::default()
    }
}

/// Trait for model adapters.
///
/// Each adapter (OpenAI-compatible, Anthropic, Google, etc.) owns one adapter
/// tag and decides which model strings it serves.
pub trait Provider: Send + Sync {
    /// Adapter tag used as the model string prefix (e.g. "openai").
    fn name(&self) -> &str;

    /// Classify a model string. Pure; never performs I/O.
    fn is_model_supported(&self, model: &str) -> ModelSupport;

    /// Request URL used by the transport.
    fn endpoint(&self) -> &str;
}
