//! Connection configuration.
//!
//! Configuration is an explicit value handed to a
//! [`Connect`](crate::client::Connect) factory at startup; nothing in this
//! crate reads or stores process-wide connection state.

use serde::{Deserialize, Serialize};

use crate::error::{OrmError, OrmResult};

/// Configuration for opening a database connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectConfig {
    /// Server hostname or address.
    pub host: String,
    /// TCP port, 1433 unless overridden.
    pub port: u16,
    /// Database name.
    pub database: String,
    /// Login user id.
    pub user: String,
    /// Login password.
    pub password: String,
}

impl Default for ConnectConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 1433,
            database: String::new(),
            user: String::new(),
            password: String::new(),
        }
    }
}

impl ConnectConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server host.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the server port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the database name.
    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Set the login user id.
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    /// Set the login password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Read configuration from `MSSQL_*` environment variables.
    ///
    /// `MSSQL_DATABASE`, `MSSQL_USER` and `MSSQL_PASSWORD` are required;
    /// `MSSQL_HOST` and `MSSQL_PORT` fall back to the defaults.
    pub fn from_env() -> OrmResult<Self> {
        let mut config = Self::default();
        if let Ok(host) = std::env::var("MSSQL_HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("MSSQL_PORT") {
            config.port = port
                .parse()
                .map_err(|_| OrmError::connection(format!("invalid MSSQL_PORT '{port}'")))?;
        }
        config.database = require_env("MSSQL_DATABASE")?;
        config.user = require_env("MSSQL_USER")?;
        config.password = require_env("MSSQL_PASSWORD")?;
        Ok(config)
    }

    /// Render the ADO-style connection string a driver adapter consumes.
    pub fn connection_string(&self) -> String {
        format!(
            "Server={}:{};Database={};User Id={};Password={}",
            self.host, self.port, self.database, self.user, self.password
        )
    }
}

fn require_env(name: &str) -> OrmResult<String> {
    std::env::var(name).map_err(|_| OrmError::connection(format!("{name} is not set")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_string_renders_every_field() {
        let config = ConnectConfig::new()
            .host("db.internal")
            .port(11433)
            .database("Reports")
            .user("reader")
            .password("s3cret");

        let s = config.connection_string();
        assert_eq!(
            s,
            "Server=db.internal:11433;Database=Reports;User Id=reader;Password=s3cret"
        );
        assert_eq!(s, config.connection_string());
    }

    #[test]
    fn test_defaults() {
        let config = ConnectConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 1433);
    }
}
