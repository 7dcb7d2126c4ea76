//! Chat-completion endpoint normalization for OpenAI-compatible base URLs.

/// Official OpenAI chat-completion endpoint, used when no base URL is configured.
pub const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

pub const CHAT_COMPLETIONS_SUFFIX: &str = "/chat/completions";

/// Turn a configured base URL into the chat-completion request URL.
///
/// Absent, empty or whitespace-only input yields `default_url` unchanged.
/// Otherwise surrounding whitespace and all trailing slashes are removed and
/// `/chat/completions` is appended unless the URL already ends with it. The
/// result is not checked for scheme or host; that is left to the transport.
pub fn normalize_endpoint(raw_base_url: Option<&str>, default_url: &str) -> String {
    let Some(raw) = raw_base_url.map(str::trim).filter(|s| !s.is_empty()) else {
        return default_url.to_string();
    };

    let base = raw.trim_end_matches('/');
    if base.is_empty() {
        return default_url.to_string();
    }

    if base.ends_with(CHAT_COMPLETIONS_SUFFIX) {
        base.to_string()
    } else {
        format!("{}{}", base, CHAT_COMPLETIONS_SUFFIX)
    }
}

/// Endpoint fixed for the lifetime of a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    raw_base_url: Option<String>,
    default_url: String,
    normalized_url: String,
}

impl EndpointConfig {
    pub fn new(raw_base_url: Option<&str>, default_url: &str) -> Self {
        let normalized_url = normalize_endpoint(raw_base_url, default_url);
        tracing::debug!(?raw_base_url, %normalized_url, "normalized chat endpoint");
        Self {
            raw_base_url: raw_base_url.map(String::from),
            default_url: default_url.to_string(),
            normalized_url,
        }
    }

    /// Endpoint for the official OpenAI API.
    pub fn openai(raw_base_url: Option<&str>) -> Self {
        Self::new(raw_base_url, DEFAULT_OPENAI_ENDPOINT)
    }

    pub fn raw_base_url(&self) -> Option<&str> {
        self.raw_base_url.as_deref()
    }

    pub fn url(&self) -> &str {
        &self.normalized_url
    }

    /// True when requests go somewhere other than the default endpoint,
    /// i.e. through an OpenAI-compatible proxy.
    pub fn is_custom(&self) -> bool {
        self.normalized_url != self.default_url
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self::openai(None)
    }
}
