pub mod static_models;

pub use static_models::{find_openai_model, is_known_openai_model, static_openai_models, KnownModel};
