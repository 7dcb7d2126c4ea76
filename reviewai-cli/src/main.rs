mod doctor;

use clap::{Parser, Subcommand};
use reviewai::{normalize_endpoint, BareModelPolicy, OpenAiProvider, ReviewConfig, DEFAULT_OPENAI_ENDPOINT};

#[derive(Parser)]
#[command(name = "reviewai", version, about = "Model and endpoint resolution for OpenAI-compatible APIs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a model string against the OpenAI adapter
    Resolve {
        /// Model string (format: openai:<model>); defaults to AI_CODE_REVIEW_MODEL
        model: Option<String>,

        /// Custom base URL; defaults to AI_CODE_REVIEW_OPENAI_BASE_URL
        #[arg(long)]
        base_url: Option<String>,

        /// Accept model names without an adapter prefix
        #[arg(long)]
        accept_bare: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the chat-completion endpoint for a base URL
    Endpoint {
        /// Base URL; the official endpoint is printed when omitted
        base_url: Option<String>,
    },

    /// List models accepted without a proxy endpoint
    Models,

    /// Check the environment configuration
    Doctor,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reviewai=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            model,
            base_url,
            accept_bare,
            json,
        } => {
            let env = ReviewConfig::from_env();
            let model = model.unwrap_or(env.model);
            let base_url = base_url.or(env.base_url);
            let policy = if accept_bare {
                BareModelPolicy::Accept
            } else {
                BareModelPolicy::Reject
            };
            let provider = OpenAiProvider::new(env.api_key.as_deref(), base_url.as_deref())
                .with_bare_model_policy(policy);
            run_resolve(&provider, &model, json)?;
        }
        Commands::Endpoint { base_url } => {
            println!("{}", normalize_endpoint(base_url.as_deref(), DEFAULT_OPENAI_ENDPOINT));
        }
        Commands::Models => {
            for m in reviewai::static_models::static_openai_models() {
                println!(
                    "openai:{:<16} {:<16} ctx={:<8} max_out={}{}",
                    m.id,
                    m.name,
                    m.context_window,
                    m.max_tokens,
                    if m.reasoning { " reasoning" } else { "" }
                );
            }
        }
        Commands::Doctor => {
            doctor::run_doctor(&ReviewConfig::from_env())?;
        }
    }

    Ok(())
}

/// Print the resolution of `model`; unsupported models fail in both output modes.
fn run_resolve(provider: &OpenAiProvider, model: &str, json: bool) -> anyhow::Result<()> {
    let result = provider.resolve(model);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if let Some(name) = &result.model_name {
        println!("{} -> {} via {}", model, name, provider.endpoint_config().url());
    }

    if !result.is_correct {
        anyhow::bail!("model not supported by the openai adapter: {:?}", model);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_resolve_flags() {
        let cli = Cli::try_parse_from([
            "reviewai",
            "resolve",
            "openai:gemini-2.5-pro",
            "--base-url",
            "http://localhost:8316/v1",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Resolve {
                model,
                base_url,
                accept_bare,
                json,
            } => {
                assert_eq!(model.as_deref(), Some("openai:gemini-2.5-pro"));
                assert_eq!(base_url.as_deref(), Some("http://localhost:8316/v1"));
                assert!(!accept_bare);
                assert!(json);
            }
            _ => panic!("expected resolve"),
        }
    }

    #[test]
    fn resolve_fails_for_unsupported_model_in_both_modes() {
        let provider = OpenAiProvider::new(Some("k"), None);
        assert!(run_resolve(&provider, "anthropic:claude-3", true).is_err());
        assert!(run_resolve(&provider, "anthropic:claude-3", false).is_err());
        assert!(run_resolve(&provider, "openai:gemini-2.5-pro", true).is_err());
    }

    #[test]
    fn resolve_succeeds_for_supported_model_in_both_modes() {
        let provider = OpenAiProvider::new(Some("k"), Some("http://localhost:8316/v1"));
        assert!(run_resolve(&provider, "openai:gemini-2.5-pro", true).is_ok());
        assert!(run_resolve(&provider, "openai:gemini-2.5-pro", false).is_ok());
    }

    #[test]
    fn endpoint_argument_is_optional() {
        let cli = Cli::try_parse_from(["reviewai", "endpoint"]).unwrap();
        assert!(matches!(cli.command, Commands::Endpoint { base_url: None }));
    }
}
