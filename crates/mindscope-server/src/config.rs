use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use mindscope_core::models::respondent::ContactDetails;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}={value:?} is invalid: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings, read from `MINDSCOPE_*` environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub data_dir: PathBuf,
    /// Admin PIN. `None` disables admin login entirely.
    pub admin_pin: Option<String>,
    pub log_json: bool,
    pub mail_from: String,
    pub chart_timeout: Duration,
    pub mail_timeout: Duration,
    /// Idle sessions are dropped from memory after this long.
    pub session_ttl: Duration,
    pub token_ttl: Duration,
    /// External catalog file; the built-in catalog when unset.
    pub catalog_path: Option<PathBuf>,
    /// Printed on the report's disclaimer and closing pages.
    pub contact: ContactDetails,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 8080)),
            data_dir: PathBuf::from("./data"),
            admin_pin: None,
            log_json: false,
            mail_from: "reports@mindscope.local".to_string(),
            chart_timeout: Duration::from_millis(2_000),
            mail_timeout: Duration::from_millis(5_000),
            session_ttl: Duration::from_secs(2 * 60 * 60),
            token_ttl: Duration::from_secs(12 * 60 * 60),
            catalog_path: None,
            contact: ContactDetails {
                organisation: "Mindscope".to_string(),
                email: "support@mindscope.local".to_string(),
                phone: None,
                website: None,
            },
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source. Unset or empty variables
    /// keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(v) = get("MINDSCOPE_BIND") {
            config.bind = v.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                var: "MINDSCOPE_BIND",
                value: v.clone(),
                reason: e.to_string(),
            })?;
        }
        if let Some(v) = get("MINDSCOPE_DATA_DIR") {
            config.data_dir = PathBuf::from(v);
        }
        config.admin_pin = get("MINDSCOPE_PIN");
        if let Some(v) = get("MINDSCOPE_LOG_JSON") {
            config.log_json = parse_bool("MINDSCOPE_LOG_JSON", &v)?;
        }
        if let Some(v) = get("MINDSCOPE_MAIL_FROM") {
            config.mail_from = v;
        }
        if let Some(v) = get("MINDSCOPE_CHART_TIMEOUT_MS") {
            config.chart_timeout = parse_millis("MINDSCOPE_CHART_TIMEOUT_MS", &v)?;
        }
        if let Some(v) = get("MINDSCOPE_MAIL_TIMEOUT_MS") {
            config.mail_timeout = parse_millis("MINDSCOPE_MAIL_TIMEOUT_MS", &v)?;
        }
        if let Some(v) = get("MINDSCOPE_SESSION_TTL_SECS") {
            config.session_ttl = parse_secs("MINDSCOPE_SESSION_TTL_SECS", &v)?;
        }
        if let Some(v) = get("MINDSCOPE_TOKEN_TTL_SECS") {
            config.token_ttl = parse_secs("MINDSCOPE_TOKEN_TTL_SECS", &v)?;
        }
        config.catalog_path = get("MINDSCOPE_CATALOG_PATH").map(PathBuf::from);
        if let Some(v) = get("MINDSCOPE_CONTACT_ORGANISATION") {
            config.contact.organisation = v;
        }
        if let Some(v) = get("MINDSCOPE_CONTACT_EMAIL") {
            config.contact.email = v;
        }
        config.contact.phone = get("MINDSCOPE_CONTACT_PHONE");
        config.contact.website = get("MINDSCOPE_CONTACT_WEBSITE");

        Ok(config)
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

fn parse_millis(var: &'static str, value: &str) -> Result<Duration, ConfigError> {
    parse_positive(var, value).map(Duration::from_millis)
}

fn parse_secs(var: &'static str, value: &str) -> Result<Duration, ConfigError> {
    parse_positive(var, value).map(Duration::from_secs)
}

fn parse_positive(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        Ok(_) => Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        Err(e) => Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config(&[]).unwrap();
        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert!(config.admin_pin.is_none());
        assert!(!config.log_json);
        assert_eq!(config.chart_timeout, Duration::from_secs(2));
    }

    #[test]
    fn overrides_are_parsed() {
        let config = config(&[
            ("MINDSCOPE_BIND", "127.0.0.1:9000"),
            ("MINDSCOPE_PIN", "4821"),
            ("MINDSCOPE_LOG_JSON", "yes"),
            ("MINDSCOPE_CHART_TIMEOUT_MS", "250"),
            ("MINDSCOPE_CONTACT_PHONE", "+44 1632 960000"),
            ("MINDSCOPE_SESSION_TTL_SECS", "600"),
            ("MINDSCOPE_CATALOG_PATH", "/etc/mindscope/catalog.json"),
        ])
        .unwrap();
        assert_eq!(config.bind.to_string(), "127.0.0.1:9000");
        assert_eq!(config.admin_pin.as_deref(), Some("4821"));
        assert!(config.log_json);
        assert_eq!(config.chart_timeout, Duration::from_millis(250));
        assert_eq!(config.contact.phone.as_deref(), Some("+44 1632 960000"));
        assert_eq!(config.session_ttl, Duration::from_secs(600));
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/etc/mindscope/catalog.json"))
        );
    }

    #[test]
    fn empty_pin_disables_admin() {
        let config = config(&[("MINDSCOPE_PIN", "  ")]).unwrap();
        assert!(config.admin_pin.is_none());
    }

    #[test]
    fn bad_values_are_reported() {
        assert!(matches!(
            config(&[("MINDSCOPE_BIND", "nowhere")]),
            Err(ConfigError::Invalid { var: "MINDSCOPE_BIND", .. })
        ));
        assert!(config(&[("MINDSCOPE_CHART_TIMEOUT_MS", "0")]).is_err());
        assert!(config(&[("MINDSCOPE_LOG_JSON", "maybe")]).is_err());
        assert!(config(&[("MINDSCOPE_TOKEN_TTL_SECS", "soon")]).is_err());
    }
}
