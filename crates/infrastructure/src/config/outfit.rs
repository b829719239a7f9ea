//! Outfit suggestion configuration: the generative AI credential.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Environment variable consulted when no key is configured
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Outfit suggestion configuration
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct OutfitConfig {
    /// Gemini API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,
}

impl std::fmt::Debug for OutfitConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutfitConfig")
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .finish()
    }
}

impl OutfitConfig {
    /// Fill in the key from `lookup(GEMINI_API_KEY)` when none is configured
    ///
    /// Empty values count as unset.
    pub fn apply_key_fallback(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if self.api_key.is_none() {
            self.api_key = lookup(GEMINI_API_KEY_VAR)
                .filter(|k| !k.trim().is_empty())
                .map(SecretString::from);
        }
    }

    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn debug_redacts_key() {
        let config = OutfitConfig {
            api_key: Some(SecretString::from("super-secret".to_string())),
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn fallback_used_when_unset() {
        let mut config = OutfitConfig::default();
        config.apply_key_fallback(|var| (var == GEMINI_API_KEY_VAR).then(|| "from-env".to_string()));
        assert_eq!(config.api_key.unwrap().expose_secret(), "from-env");
    }

    #[test]
    fn configured_key_wins() {
        let mut config = OutfitConfig {
            api_key: Some(SecretString::from("from-file".to_string())),
        };
        config.apply_key_fallback(|_| Some("from-env".to_string()));
        assert_eq!(config.api_key.unwrap().expose_secret(), "from-file");
    }

    #[test]
    fn blank_fallback_is_ignored() {
        let mut config = OutfitConfig::default();
        config.apply_key_fallback(|_| Some("  ".to_string()));
        assert!(!config.is_configured());
    }

    #[test]
    fn key_is_never_serialized() {
        let config = OutfitConfig {
            api_key: Some(SecretString::from("super-secret".to_string())),
        };
        let toml = toml::to_string(&config).unwrap();
        assert!(!toml.contains("super-secret"));
    }
}
