use serde::Deserialize;

use crate::database::GrowthPolicy;

/// Settings for building a [`crate::Database`]
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    #[serde(default)]
    pub initial_capacity: usize,
    #[serde(default)]
    pub growth: GrowthPolicy,
}

impl StoreConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            // Both files are optional, built-in defaults apply otherwise
            .add_source(config::File::with_name("config/mercato").required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `MERCATO__INITIAL_CAPACITY=8` sets `initial_capacity`
            .add_source(
                config::Environment::with_prefix("MERCATO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }

    /// Layer a TOML document over the defaults
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::from_toml("").unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.initial_capacity, 0);
        assert_eq!(config.growth, GrowthPolicy::ByOne);
    }

    #[test]
    fn test_toml_overrides() {
        let config = StoreConfig::from_toml(
            r#"
            initial_capacity = 16
            growth = "doubling"
            "#,
        )
        .unwrap();

        assert_eq!(config.initial_capacity, 16);
        assert_eq!(config.growth, GrowthPolicy::Doubling);
    }

    #[test]
    fn test_unknown_growth_policy_rejected() {
        let result = StoreConfig::from_toml(r#"growth = "tripling""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_reads_environment() {
        std::env::set_var("MERCATO__INITIAL_CAPACITY", "8");
        std::env::set_var("MERCATO__GROWTH", "doubling");

        let config = StoreConfig::load();

        std::env::remove_var("MERCATO__INITIAL_CAPACITY");
        std::env::remove_var("MERCATO__GROWTH");

        let config = config.unwrap();
        assert_eq!(config.initial_capacity, 8);
        assert_eq!(config.growth, GrowthPolicy::Doubling);
    }
}
