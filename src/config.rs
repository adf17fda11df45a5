// Copyright 2026 The libpq-rs Authors
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::pq_defines::PqError;
use crate::pq_defines::PqResult;

const TYPED_KEYWORDS: [&str; 7] = [
    "host",
    "port",
    "dbname",
    "user",
    "password",
    "connect_timeout",
    "application_name",
];

/// Connection parameters, rendered into a libpq conninfo string.
///
/// Unset fields are left to libpq, which falls back to the `PG*` environment variables and
/// its compiled-in defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConnectionConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub dbname: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    /// Seconds.
    pub connect_timeout: Option<u64>,
    pub application_name: Option<String>,
    /// Any other conninfo keyword, e.g. `sslmode`.
    pub options: BTreeMap<String, String>,
}

impl ConnectionConfig {
    pub fn from_json(json: &str) -> PqResult<ConnectionConfig> {
        let config: ConnectionConfig =
            serde_json::from_str(json).map_err(|e| PqError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> PqResult<ConnectionConfig> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| PqError::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        ConnectionConfig::from_json(&json)
    }

    /// Checks that every key in `options` is a plain conninfo keyword not already covered by
    /// a typed field.
    pub fn validate(&self) -> PqResult<()> {
        for key in self.options.keys() {
            if key.is_empty() || !key.chars().all(|c| c.is_ascii_lowercase() || c == '_') {
                return Err(PqError::InvalidConfig(format!(
                    "option {:?} is not a conninfo keyword",
                    key
                )));
            }
            if TYPED_KEYWORDS.contains(&key.as_str()) {
                return Err(PqError::InvalidConfig(format!(
                    "option {:?} must be set through its own field",
                    key
                )));
            }
        }
        Ok(())
    }

    /// Renders the `keyword=value` form accepted by `PQconnectdb`.
    pub fn to_conninfo(&self) -> PqResult<String> {
        self.validate()?;

        let port = self.port.map(|p| p.to_string());
        let connect_timeout = self.connect_timeout.map(|t| t.to_string());

        let known = [
            ("host", self.host.as_deref()),
            ("port", port.as_deref()),
            ("dbname", self.dbname.as_deref()),
            ("user", self.user.as_deref()),
            ("password", self.password.as_deref()),
            ("connect_timeout", connect_timeout.as_deref()),
            ("application_name", self.application_name.as_deref()),
        ];

        let conninfo = known
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
            .chain(self.options.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .map(|(key, value)| format!("{}={}", key, quote_value(value)))
            .collect::<Vec<_>>()
            .join(" ");
        Ok(conninfo)
    }
}

fn quote_value(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || c == '\'' || c == '\\');
    if !needs_quotes {
        return value.to_string();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        if c == '\'' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_empty_config() {
        assert_eq!(ConnectionConfig::default().to_conninfo().unwrap(), "");
    }

    #[test]
    fn test_conninfo_order_and_plain_values() {
        let config = ConnectionConfig {
            host: Some("localhost".into()),
            port: Some(5432),
            dbname: Some("swifttalk_dev".into()),
            connect_timeout: Some(10),
            ..Default::default()
        };
        assert_eq!(
            config.to_conninfo().unwrap(),
            "host=localhost port=5432 dbname=swifttalk_dev connect_timeout=10"
        );
    }

    #[test]
    fn test_conninfo_quoting() {
        let mut options = BTreeMap::new();
        options.insert("sslmode".to_string(), "require".to_string());
        let config = ConnectionConfig {
            password: Some("it's a \\secret".into()),
            application_name: Some(String::new()),
            options,
            ..Default::default()
        };
        assert_eq!(
            config.to_conninfo().unwrap(),
            "password='it\\'s a \\\\secret' application_name='' sslmode=require"
        );
    }

    #[test]
    fn test_from_json() {
        let config = ConnectionConfig::from_json(
            r#"{ "host": "db", "port": 6432, "options": { "sslmode": "disable" } }"#,
        )
        .unwrap();
        assert_eq!(config.host.as_deref(), Some("db"));
        assert_eq!(config.port, Some(6432));
        assert_eq!(config.user, None);
        assert_eq!(config.to_conninfo().unwrap(), "host=db port=6432 sslmode=disable");
    }

    #[test]
    fn test_from_json_rejects_unknown_keys() {
        match ConnectionConfig::from_json(r#"{ "hostname": "db" }"#) {
            Err(PqError::InvalidConfig(msg)) => assert!(msg.contains("hostname")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_option_keys_cannot_inject_keywords() {
        let mut options = BTreeMap::new();
        options.insert(
            "sslmode=disable host".to_string(),
            "evil.example".to_string(),
        );
        let config = ConnectionConfig {
            host: Some("db.internal".into()),
            options,
            ..Default::default()
        };
        match config.to_conninfo() {
            Err(PqError::InvalidConfig(msg)) => assert!(msg.contains("sslmode=disable host")),
            other => panic!("unexpected {:?}", other),
        }

        for key in ["", "SSLMODE", "ssl-mode"] {
            let mut config = ConnectionConfig::default();
            config.options.insert(key.to_string(), "x".to_string());
            assert!(matches!(
                config.to_conninfo(),
                Err(PqError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_option_keys_cannot_override_fields() {
        let mut options = BTreeMap::new();
        options.insert("host".to_string(), "other".to_string());
        let config = ConnectionConfig {
            host: Some("db.internal".into()),
            options,
            ..Default::default()
        };
        assert!(matches!(
            config.to_conninfo(),
            Err(PqError::InvalidConfig(_))
        ));

        match ConnectionConfig::from_json(r#"{ "options": { "password": "x" } }"#) {
            Err(PqError::InvalidConfig(msg)) => assert!(msg.contains("password")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "dbname": "app", "user": "me" }}"#).unwrap();

        let config = ConnectionConfig::from_file(file.path()).unwrap();
        assert_eq!(config.to_conninfo().unwrap(), "dbname=app user=me");

        let missing = ConnectionConfig::from_file("/nonexistent/libpq.json");
        assert!(matches!(missing, Err(PqError::InvalidConfig(_))));
    }
}
