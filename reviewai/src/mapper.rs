/// Separator between the adapter tag and the model name (`openai:gpt-4o`).
pub const ADAPTER_SEPARATOR: char = ':';

/// A model string split into its adapter tag and model name.
///
/// Only the first `:` delimits, so `openai:foo:bar` names the model `foo:bar`.
/// Without a `:` the whole input is the model name and `adapter` is `None`.
/// The tag is kept verbatim; adapters compare it case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelIdentifier<'a> {
    pub adapter: Option<&'a str>,
    pub model: &'a str,
}

impl<'a> ModelIdentifier<'a> {
    pub fn parse(input: &'a str) -> Self {
        match input.split_once(ADAPTER_SEPARATOR) {
            Some((adapter, model)) => Self {
                adapter: Some(adapter),
                model,
            },
            None => Self {
                adapter: None,
                model: input,
            },
        }
    }

    pub fn is_bare(&self) -> bool {
        self.adapter.is_none()
    }
}

/// Split a model string into (adapter, model). See [`ModelIdentifier::parse`].
pub fn split_model_id(input: &str) -> (Option<&str>, &str) {
    let id = ModelIdentifier::parse(input);
    (id.adapter, id.model)
}

/// Add an adapter prefix to a bare model name.
pub fn join_model_id(adapter: &str, model: &str) -> String {
    format!("{}{}{}", adapter, ADAPTER_SEPARATOR, model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_colon() {
        assert_eq!(split_model_id("openai:gpt-4"), (Some("openai"), "gpt-4"));
        assert_eq!(split_model_id("openai:foo:bar"), (Some("openai"), "foo:bar"));
    }

    #[test]
    fn bare_name_has_no_adapter() {
        let id = ModelIdentifier::parse("gpt-4o");
        assert!(id.is_bare());
        assert_eq!(id.model, "gpt-4o");
    }

    #[test]
    fn empty_parts_are_kept() {
        assert_eq!(split_model_id(""), (None, ""));
        assert_eq!(split_model_id("openai:"), (Some("openai"), ""));
        assert_eq!(split_model_id(":gpt-4"), (Some(""), "gpt-4"));
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        assert_eq!(split_model_id(" openai:gpt-4 "), (Some(" openai"), "gpt-4 "));
    }

    #[test]
    fn join_then_split() {
        let joined = join_model_id("openai", "gemini-2.5-pro");
        assert_eq!(joined, "openai:gemini-2.5-pro");
        assert_eq!(split_model_id(&joined), (Some("openai"), "gemini-2.5-pro"));
    }
}
