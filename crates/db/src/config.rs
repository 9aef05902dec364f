use std::fmt;

use sqlx::postgres::PgConnectOptions;

/// Connection parameters for the target database.
///
/// Built by the caller and handed to [`crate::connect`]. Fields left as
/// `None` fall back to what [`PgConnectOptions::new`] picks up from the
/// libpq environment (`PGHOST`, `PGPORT`, `PGUSER`, `PGPASSWORD`,
/// `PGDATABASE`) and then to libpq's built-in defaults.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DbConfig {
    pub database: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl DbConfig {
    /// Translate into sqlx connect options.
    pub fn connect_options(&self) -> PgConnectOptions {
        let mut options = PgConnectOptions::new();
        if let Some(host) = &self.host {
            options = options.host(host);
        }
        if let Some(port) = self.port {
            options = options.port(port);
        }
        if let Some(user) = &self.user {
            options = options.username(user);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        if let Some(database) = &self.database {
            options = options.database(database);
        }
        options
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let config = DbConfig {
            user: Some("loader".into()),
            password: Some("hunter2".into()),
            ..Default::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("loader"));
    }

    #[test]
    fn test_connect_options_apply_explicit_values() {
        let config = DbConfig {
            database: Some("inventory".into()),
            user: Some("loader".into()),
            password: None,
            host: Some("db.internal".into()),
            port: Some(6543),
        };
        let options = config.connect_options();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "loader");
        assert_eq!(options.get_database(), Some("inventory"));
    }
}
