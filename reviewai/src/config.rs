//! Explicit client configuration.
//!
//! Providers take a [`ReviewConfig`] instead of reading the environment. The
//! env loader lives here so callers choose when (and whether) env is read.

pub const MODEL_ENV: &str = "AI_CODE_REVIEW_MODEL";
pub const OPENAI_BASE_URL_ENV: &str = "AI_CODE_REVIEW_OPENAI_BASE_URL";
pub const OPENAI_API_KEY_ENV: &str = "AI_CODE_REVIEW_OPENAI_API_KEY";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewConfig {
    /// Model string, e.g. `openai:gpt-4o`.
    pub model: String,
    /// Custom OpenAI-compatible base URL; `None` means the official API.
    pub base_url: Option<String>,
    /// Opaque API key.
    pub api_key: Option<String>,
}

impl ReviewConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Load from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());
        Self {
            model: get(MODEL_ENV).unwrap_or_default(),
            base_url: get(OPENAI_BASE_URL_ENV),
            api_key: get(OPENAI_API_KEY_ENV),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn reads_all_variables() {
        let cfg = ReviewConfig::from_lookup(lookup_from(&[
            (MODEL_ENV, "openai:gpt-4"),
            (OPENAI_BASE_URL_ENV, "http://localhost:8316/v1"),
            (OPENAI_API_KEY_ENV, "sk-test-proxy-api-key-12345"),
        ]));
        assert_eq!(cfg.model, "openai:gpt-4");
        assert_eq!(cfg.base_url.as_deref(), Some("http://localhost:8316/v1"));
        assert_eq!(cfg.api_key.as_deref(), Some("sk-test-proxy-api-key-12345"));
    }

    #[test]
    fn missing_and_empty_are_none() {
        let cfg = ReviewConfig::from_lookup(lookup_from(&[(OPENAI_BASE_URL_ENV, "")]));
        assert_eq!(cfg, ReviewConfig::default());
    }

    #[test]
    fn builder_sets_fields() {
        let cfg = ReviewConfig::new("openai:gpt-4o")
            .with_base_url("http://localhost:8316/v1")
            .with_api_key("k");
        assert_eq!(cfg.model, "openai:gpt-4o");
        assert_eq!(cfg.base_url.as_deref(), Some("http://localhost:8316/v1"));
        assert_eq!(cfg.api_key.as_deref(), Some("k"));
    }
}
