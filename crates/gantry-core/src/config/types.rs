//! Configuration types

use serde::{Deserialize, Serialize};

/// Main configuration for Gantry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project name
    pub name: Option<String>,

    /// Lint configuration
    pub lint: LintConfig,
}

/// Commit lint configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Additional commit types accepted besides `feat` and `fix`.
    ///
    /// Declaration order is preserved; diagnostics render the allowed set
    /// in this order.
    pub types: Vec<String>,

    /// Allowed scopes. Empty means any noun-shaped scope is accepted.
    pub scopes: Vec<String>,
}

impl LintConfig {
    /// Add an accepted commit type
    pub fn with_type(mut self, name: impl Into<String>) -> Self {
        self.types.push(name.into());
        self
    }

    /// Add an allowed scope
    pub fn with_scope(mut self, name: impl Into<String>) -> Self {
        self.scopes.push(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = Config::default();
        assert!(config.lint.types.is_empty());
        assert!(config.lint.scopes.is_empty());
    }

    #[test]
    fn test_lint_config_builders() {
        let lint = LintConfig::default()
            .with_type("build")
            .with_type("perf")
            .with_scope("login");
        assert_eq!(lint.types, vec!["build", "perf"]);
        assert_eq!(lint.scopes, vec!["login"]);
    }
}
