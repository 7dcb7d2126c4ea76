pub mod client;
pub mod config;
pub mod endpoint;
pub mod mapper;
pub mod models;
pub mod providers;

// Re-exports for convenience
pub use client::{AiClient, AiClientBuilder};
pub use config::ReviewConfig;
pub use endpoint::{normalize_endpoint, EndpointConfig, DEFAULT_OPENAI_ENDPOINT};
pub use mapper::{join_model_id, split_model_id, ModelIdentifier};
pub use models::static_models;
pub use providers::openai::{BareModelPolicy, ChatMessage, ChatRequest, OpenAiProvider, OPENAI_ADAPTER};
pub use providers::{ModelSupport, Provider, ProviderError};
