//! CLI configuration.

/// Settings the CLI reads from its environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Project website shown in help and info output
    pub website: String,
    /// Copyright year shown by `--license`
    pub year: String,
    /// Explicit tracing filter, overrides `--verbose`
    pub log_filter: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            website: "https://github.com/uynilo9/bento".to_string(),
            year: "2024".to_string(),
            log_filter: None,
        }
    }
}

impl CliConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            website: non_empty("BENTO_WEBSITE").unwrap_or(defaults.website),
            year: non_empty("BENTO_YEAR").unwrap_or(defaults.year),
            log_filter: non_empty("BENTO_LOG"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> CliConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(config_from(&[]), CliConfig::default());
    }

    #[test]
    fn test_reads_variables() {
        let config = config_from(&[
            ("BENTO_WEBSITE", "https://bento.example"),
            ("BENTO_YEAR", "2025"),
            ("BENTO_LOG", "bento_lexer=trace"),
        ]);
        assert_eq!(config.website, "https://bento.example");
        assert_eq!(config.year, "2025");
        assert_eq!(config.log_filter.as_deref(), Some("bento_lexer=trace"));
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = config_from(&[("BENTO_YEAR", "  "), ("BENTO_LOG", "")]);
        assert_eq!(config.year, "2024");
        assert_eq!(config.log_filter, None);
    }
}
