use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_logging;
pub use settings::{Config, LedgerBackend, LedgerSettings, LoggingSettings, ServerSettings};

/// Looked up in the working directory when no explicit file is given.
pub const DEFAULT_CONFIG_FILE: &str = "journal.toml";

/// Prefix of the environment variables that override file settings,
/// e.g. `JOURNAL__LEDGER__PATH`.
pub const ENV_PREFIX: &str = "JOURNAL";

/// Loads the application configuration.
///
/// Sources, lowest priority first: built-in defaults, the config file, then
/// `JOURNAL__*` environment variables. With no `path` the optional
/// `journal.toml` in the working directory is read; an explicit file must
/// exist.
pub fn load_config_from(path: Option<&Path>) -> Result<Config, ConfigError> {
    build(path, environment())
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn build(path: Option<&Path>, env: config::Environment) -> Result<Config, ConfigError> {
    let mut builder = config::Config::builder()
        .set_default("ledger.backend", "csv")?
        .set_default("ledger.path", "trade_journal.csv")?
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8050_i64)?
        .set_default("logging.level", "info")?;

    builder = match path {
        Some(path) => builder.add_source(config::File::from(path)),
        None => builder.add_source(config::File::with_name(DEFAULT_CONFIG_FILE).required(false)),
    };

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.add_source(env).build()?.try_deserialize::<Config>()?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        environment().source(Some(map))
    }

    #[test]
    fn defaults_load_without_a_file() {
        let config = build(None, env(&[])).unwrap();
        assert_eq!(config.ledger.backend, LedgerBackend::Csv);
        assert_eq!(config.ledger.path, Path::new("trade_journal.csv"));
        assert_eq!(config.server.port, 8050);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.directory.is_none());
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.toml");
        fs::write(
            &path,
            r#"
            [ledger]
            backend = "memory"
            path = "data/trades.csv"

            [server]
            host = "0.0.0.0"
            port = 9000

            [logging]
            level = "debug"
            directory = "logs"
            "#,
        )
        .unwrap();

        let config = build(Some(&path), env(&[])).unwrap();
        assert_eq!(config.ledger.backend, LedgerBackend::Memory);
        assert_eq!(config.server.socket_addr().to_string(), "0.0.0.0:9000");
        assert_eq!(config.logging.directory.as_deref(), Some(Path::new("logs")));
    }

    #[test]
    fn environment_wins_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.toml");
        fs::write(&path, "[server]\nport = 9000\n").unwrap();

        let config = build(
            Some(&path),
            env(&[("JOURNAL__SERVER__PORT", "9100"), ("JOURNAL__LEDGER__PATH", "env.csv")]),
        )
        .unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.ledger.path, Path::new("env.csv"));
    }

    #[test]
    fn explicit_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(build(Some(&missing), env(&[])), Err(ConfigError::Load(_))));
    }

    #[test]
    fn rejects_invalid_settings() {
        let err = build(None, env(&[("JOURNAL__SERVER__PORT", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "server.port", .. }));

        let err = build(None, env(&[("JOURNAL__LEDGER__PATH", "")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "ledger.path", .. }));
    }
}
