//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_types(config)?;
    validate_scopes(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_types(config: &Config) -> Result<()> {
    for name in &config.lint.types {
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidValue {
                field: "lint.types".to_string(),
                message: format!("'{}' is not a single alphabetic word", name),
            }
            .into());
        }
    }
    Ok(())
}

fn validate_scopes(config: &Config) -> Result<()> {
    for name in &config.lint.scopes {
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidValue {
                field: "lint.scopes".to_string(),
                message: format!("'{}' must not be empty or contain whitespace", name),
            }
            .into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LintConfig;

    #[test]
    fn test_valid_config_passes() {
        let mut config = Config::default();
        config.lint = LintConfig::default().with_type("build").with_scope("cli");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_type_with_whitespace_fails() {
        let mut config = Config::default();
        config.lint = LintConfig::default().with_type("not ok");
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_scope_fails() {
        let mut config = Config::default();
        config.lint = LintConfig::default().with_scope("");
        assert!(validate_config(&config).is_err());
    }
}
