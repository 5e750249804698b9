//! Prompt resolution

use std::env;

/// Environment key consulted for a prompt override.
pub const PROMPT_VAR: &str = "MY_PROMPT";

/// Prompt used when no override is set.
pub const DEFAULT_PROMPT: &str = "shell>";

/// Resolve the prompt from the named environment value.
///
/// A set value is returned verbatim, empty included; an unset one falls back
/// to [`DEFAULT_PROMPT`]. The caller owns the returned string.
pub fn resolve(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| DEFAULT_PROMPT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own key so parallel test threads don't race on the
    // process environment.

    #[test]
    fn test_resolve_default_when_unset() {
        env::remove_var("TIDESH_TEST_PROMPT_UNSET");
        assert_eq!(resolve("TIDESH_TEST_PROMPT_UNSET"), "shell>");
    }

    #[test]
    fn test_resolve_override_verbatim() {
        env::set_var("TIDESH_TEST_PROMPT_SET", "foo>");
        assert_eq!(resolve("TIDESH_TEST_PROMPT_SET"), "foo>");
        env::remove_var("TIDESH_TEST_PROMPT_SET");
    }

    #[test]
    fn test_resolve_empty_override_verbatim() {
        env::set_var("TIDESH_TEST_PROMPT_EMPTY", "");
        assert_eq!(resolve("TIDESH_TEST_PROMPT_EMPTY"), "");
        env::remove_var("TIDESH_TEST_PROMPT_EMPTY");
    }
}
