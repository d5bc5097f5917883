//! Error types for ignore-rule configuration.

use thiserror::Error;

/// Raised when `.talismanrc` content cannot be decoded.
///
/// The default loading path swallows this and degrades to an empty config
/// (see `TalismanRc::from_bytes`); callers that want a malformed file to
/// stop the run use `TalismanRc::try_from_bytes` and escalate.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse .talismanrc: {0}")]
    ParseYaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_display_names_the_file() {
        let yaml_err = serde_yaml::from_str::<Vec<String>>("{").unwrap_err();
        let err = ConfigError::from(yaml_err);
        assert!(err.to_string().starts_with("Failed to parse .talismanrc:"));
    }
}
