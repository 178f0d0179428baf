//! Application configuration
//!
//! Split into focused sub-modules by domain:
//! - `server`: HTTP server settings
//! - `annotator`: extra gazetteer terms merged into the built-in lexicon
//! - `resolver`: date resolution preferences

mod annotator;
mod resolver;
mod server;

use serde::{Deserialize, Serialize};

pub use annotator::AnnotatorConfig;
pub use resolver::ResolverConfig;
pub use server::ServerConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Annotator lexicon extensions
    #[serde(default)]
    pub annotator: AnnotatorConfig,
    /// Date resolver settings
    #[serde(default)]
    pub resolver: ResolverConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional `config.toml`,
    /// and `QUERYLENS_*` environment overrides (e.g. `QUERYLENS_SERVER_PORT`).
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("QUERYLENS")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sensible() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8000);
        assert!(config.resolver.prefer_future);
        assert!(config.annotator.extra_gpe.is_empty());
    }

    #[test]
    fn deserializes_from_partial_toml() {
        let toml = r#"
            [server]
            port = 9100

            [annotator]
            extra_gpe = ["wakanda"]

            [resolver]
            prefer_future = false
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.annotator.extra_gpe, vec!["wakanda".to_string()]);
        assert!(!config.resolver.prefer_future);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.resolver.prefer_future);
    }
}
