use serde::Serialize;

/// A first-party model the `openai` adapter accepts without a proxy endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KnownModel {
    /// Model ID as sent to the API (e.g. "gpt-4o").
    pub id: &'static str,
    /// Human-friendly display name.
    pub name: &'static str,
    /// Whether the model supports extended reasoning.
    pub reasoning: bool,
    /// Maximum context window in tokens.
    pub context_window: u64,
    /// Maximum output tokens.
    pub max_tokens: u64,
}

const fn oai(id: &'static str, name: &'static str, reasoning: bool, ctx: u64, max_tok: u64) -> KnownModel {
    KnownModel {
        id,
        name,
        reasoning,
        context_window: ctx,
        max_tokens: max_tok,
    }
}

static OPENAI_MODELS: &[KnownModel] = &[
    oai("gpt-4", "GPT-4", false, 8192, 8192),
    oai("gpt-4-turbo", "GPT-4 Turbo", false, 128000, 4096),
    oai("gpt-4o", "GPT-4o", false, 128000, 16384),
    oai("gpt-4o-mini", "GPT-4o Mini", false, 128000, 16384),
    oai("gpt-4.1", "GPT-4.1", false, 1047576, 32768),
    oai("gpt-4.1-mini", "GPT-4.1 Mini", false, 1047576, 32768),
    oai("gpt-4.1-nano", "GPT-4.1 Nano", false, 1047576, 32768),
    oai("gpt-3.5-turbo", "GPT-3.5 Turbo", false, 16385, 4096),
    oai("o1", "o1", true, 200000, 100000),
    oai("o1-mini", "o1-mini", true, 128000, 65536),
    oai("o3", "o3", true, 200000, 100000),
    oai("o3-mini", "o3-mini", true, 200000, 65536),
    oai("o4-mini", "o4-mini", true, 200000, 100000),
];

pub fn static_openai_models() -> &'static [KnownModel] {
    OPENAI_MODELS
}

pub fn find_openai_model(id: &str) -> Option<&'static KnownModel> {
    OPENAI_MODELS.iter().find(|m| m.id == id)
}

pub fn is_known_openai_model(id: &str) -> bool {
    find_openai_model(id).is_some()
}
