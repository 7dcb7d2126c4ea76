use reviewai::config::{MODEL_ENV, OPENAI_API_KEY_ENV, OPENAI_BASE_URL_ENV};
use reviewai::{AiClient, EndpointConfig, OpenAiProvider, ReviewConfig};
use url::Url;

/// Report on the configuration the review client would run with.
pub fn run_doctor(config: &ReviewConfig) -> anyhow::Result<()> {
    if config.model.is_empty() {
        println!("No model configured. Set {} (e.g. openai:gpt-4o).", MODEL_ENV);
        return Ok(());
    }

    println!("📋 Checking {}...", config.model);

    match &config.api_key {
        Some(_) => println!("  API key:   ✅ {}", OPENAI_API_KEY_ENV),
        None => println!("  API key:   ⚠️  {} not set", OPENAI_API_KEY_ENV),
    }

    let openai = match OpenAiProvider::from_config(config) {
        Ok(provider) => provider,
        Err(e) => {
            println!("  Client:    ❌ {}", e);
            anyhow::bail!("configuration is not usable");
        }
    };
    let endpoint = openai.endpoint_config().clone();
    tracing::debug!(endpoint = endpoint.url(), custom = endpoint.is_custom(), "built openai adapter");

    match Url::parse(endpoint.url()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            println!("  Endpoint:  ✅ {}", endpoint.url())
        }
        Ok(url) => println!("  Endpoint:  ⚠️  {} (unexpected scheme `{}`)", endpoint.url(), url.scheme()),
        Err(e) => println!("  Endpoint:  ⚠️  {} ({})", endpoint.url(), e),
    }

    println!("  Mode:      {}", mode_line(&endpoint));

    let client = AiClient::builder().with_provider(openai).build();
    match client.resolve(&config.model) {
        Ok((provider, support)) => {
            tracing::debug!(model = %config.model, adapter = provider.name(), "doctor resolved model");
            println!(
                "  Model:     ✅ {} (adapter {})",
                support.model_name.unwrap_or_default(),
                provider.name()
            );
            Ok(())
        }
        Err(e) => {
            println!("  Model:     ❌ {}", e);
            anyhow::bail!("model {} is not supported", config.model);
        }
    }
}

/// Routing mode as decided by the adapter, not by whether a base URL is set.
fn mode_line(endpoint: &EndpointConfig) -> String {
    match endpoint.raw_base_url() {
        Some(raw) if endpoint.is_custom() => format!("proxy ({}={})", OPENAI_BASE_URL_ENV, raw),
        Some(raw) => format!("official OpenAI API ({}={})", OPENAI_BASE_URL_ENV, raw),
        None => "official OpenAI API".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OFFICIAL_BASE: &str = "https://api.openai.com/v1";

    #[test]
    fn official_base_url_is_not_reported_as_proxy() {
        let endpoint = EndpointConfig::openai(Some(OFFICIAL_BASE));
        assert!(mode_line(&endpoint).starts_with("official OpenAI API"));
        assert_eq!(mode_line(&EndpointConfig::openai(None)), "official OpenAI API");
    }

    #[test]
    fn custom_base_url_is_reported_as_proxy() {
        let endpoint = EndpointConfig::openai(Some("http://localhost:8316/v1"));
        assert_eq!(
            mode_line(&endpoint),
            format!("proxy ({}=http://localhost:8316/v1)", OPENAI_BASE_URL_ENV)
        );
    }

    #[test]
    fn unsupported_model_fails() {
        let cfg = ReviewConfig::new("openai:gemini-2.5-pro")
            .with_base_url(OFFICIAL_BASE)
            .with_api_key("test-key");
        assert!(run_doctor(&cfg).is_err());
    }

    #[test]
    fn proxy_routed_model_passes() {
        let cfg = ReviewConfig::new("openai:gemini-2.5-pro")
            .with_base_url("http://localhost:8316/v1")
            .with_api_key("test-key");
        assert!(run_doctor(&cfg).is_ok());
    }

    #[test]
    fn missing_key_for_official_endpoint_fails() {
        assert!(run_doctor(&ReviewConfig::new("openai:gpt-4")).is_err());
    }

    #[test]
    fn empty_model_is_not_an_error() {
        assert!(run_doctor(&ReviewConfig::default()).is_ok());
    }
}
