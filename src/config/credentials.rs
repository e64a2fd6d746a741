//! API key resolution.
//!
//! The key comes from the config file unless the `TMDB_API_KEY`
//! environment variable is set, which wins.

use super::types::ApiConfig;

/// Environment variable that overrides `api.api_key`.
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

impl ApiConfig {
    /// Resolve the API key, preferring `TMDB_API_KEY` over the file value.
    ///
    /// Called on demand and not cached, so a changed environment is
    /// picked up by the next client built.
    pub fn resolve_api_key(&self) -> Option<SecureString> {
        self.api_key_with_override(std::env::var(API_KEY_ENV).ok())
    }

    fn api_key_with_override(&self, env_value: Option<String>) -> Option<SecureString> {
        env_value
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.api_key.clone().filter(|key| !key.trim().is_empty()))
            .map(SecureString::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_string_does_not_leak() {
        let secret = SecureString::new("my-secret-key".to_string());

        let debug_output = format!("{:?}", secret);
        assert!(!debug_output.contains("my-secret-key"));
        assert!(debug_output.contains("••••••••"));

        let display_output = format!("{}", secret);
        assert!(!display_output.contains("my-secret-key"));

        assert_eq!(secret.expose(), "my-secret-key");
    }

    #[test]
    fn env_value_overrides_file_key() {
        let api = ApiConfig {
            api_key: Some("from-file".to_string()),
            ..ApiConfig::default()
        };
        let key = api.api_key_with_override(Some("from-env".to_string()));
        assert_eq!(key.unwrap().expose(), "from-env");
    }

    #[test]
    fn blank_values_count_as_missing() {
        let api = ApiConfig {
            api_key: Some("  ".to_string()),
            ..ApiConfig::default()
        };
        assert!(api.api_key_with_override(Some(String::new())).is_none());

        let api = ApiConfig {
            api_key: Some("from-file".to_string()),
            ..ApiConfig::default()
        };
        let key = api.api_key_with_override(Some(" ".to_string()));
        assert_eq!(key.unwrap().expose(), "from-file");
    }
}
