use std::path::PathBuf;

use devcfg_core::document::DEFAULT_DOCUMENT_PATH;
use devcfg_db::DbConfig;

/// Overrides the location of the interface document.
pub const DOCUMENT_PATH_VAR: &str = "DEVICE_CONFIG_PATH";

pub const PG_DATABASE_VAR: &str = "PG_DATABASE";
pub const PG_USER_VAR: &str = "PG_USER";
pub const PG_PASSWORD_VAR: &str = "PG_PASSWORD";
pub const PG_HOST_VAR: &str = "PG_HOST";
pub const PG_PORT_VAR: &str = "PG_PORT";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },
}

/// Loader configuration loaded from environment variables.
///
/// | Env Var              | Default                        |
/// |----------------------|--------------------------------|
/// | `DEVICE_CONFIG_PATH` | `./data/configClear_v2.json`   |
/// | `PG_DATABASE`        | libpq fallback                 |
/// | `PG_USER`            | libpq fallback                 |
/// | `PG_PASSWORD`        | libpq fallback                 |
/// | `PG_HOST`            | libpq fallback                 |
/// | `PG_PORT`            | libpq fallback                 |
///
/// A `PG_*` value left unset is resolved by sqlx from the libpq
/// environment (`PGDATABASE`, ...) and libpq's built-in defaults.
/// Empty values are treated as unset.
#[derive(Debug, Clone)]
pub struct LoaderSettings {
    pub document_path: PathBuf,
    pub db: DbConfig,
}

impl LoaderSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build settings from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let document_path = get(DOCUMENT_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCUMENT_PATH));

        let port = get(PG_PORT_VAR)
            .map(|value| {
                value
                    .trim()
                    .parse::<u16>()
                    .map_err(|_| ConfigError::InvalidPort {
                        var: PG_PORT_VAR,
                        value,
                    })
            })
            .transpose()?;

        let db = DbConfig {
            database: get(PG_DATABASE_VAR),
            user: get(PG_USER_VAR),
            password: get(PG_PASSWORD_VAR),
            host: get(PG_HOST_VAR),
            port,
        };

        Ok(Self { document_path, db })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn settings(vars: &[(&str, &str)]) -> Result<LoaderSettings, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        LoaderSettings::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = settings(&[]).unwrap();
        assert_eq!(settings.document_path, PathBuf::from(DEFAULT_DOCUMENT_PATH));
        assert_eq!(settings.db, DbConfig::default());
    }

    #[test]
    fn test_all_values() {
        let settings = settings(&[
            (DOCUMENT_PATH_VAR, "/srv/export.json"),
            (PG_DATABASE_VAR, "inventory"),
            (PG_USER_VAR, "loader"),
            (PG_PASSWORD_VAR, "secret"),
            (PG_HOST_VAR, "db.internal"),
            (PG_PORT_VAR, "6543"),
        ])
        .unwrap();

        assert_eq!(settings.document_path, PathBuf::from("/srv/export.json"));
        assert_eq!(settings.db.database.as_deref(), Some("inventory"));
        assert_eq!(settings.db.user.as_deref(), Some("loader"));
        assert_eq!(settings.db.password.as_deref(), Some("secret"));
        assert_eq!(settings.db.host.as_deref(), Some("db.internal"));
        assert_eq!(settings.db.port, Some(6543));
    }

    #[test]
    fn test_empty_values_are_unset() {
        let settings = settings(&[(PG_HOST_VAR, ""), (PG_PORT_VAR, "  ")]).unwrap();
        assert_eq!(settings.db.host, None);
        assert_eq!(settings.db.port, None);
    }

    #[test]
    fn test_invalid_port() {
        assert_matches!(
            settings(&[(PG_PORT_VAR, "postgres")]),
            Err(ConfigError::InvalidPort { var: PG_PORT_VAR, value }) if value == "postgres"
        );
        assert_matches!(
            settings(&[(PG_PORT_VAR, "70000")]),
            Err(ConfigError::InvalidPort { .. })
        );
    }
}
