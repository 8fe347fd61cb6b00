//! Reverse service configuration

use std::path::PathBuf;

/// Runtime configuration for the reverse service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Interface to bind (default: 0.0.0.0)
    pub host: String,
    /// Port to bind (default: 8888)
    pub port: u16,
    /// HTML page served at `GET /use` (default: static/use.html)
    pub asset_path: PathBuf,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8888,
            asset_path: PathBuf::from("static/use.html"),
        }
    }
}

impl ServiceConfig {
    /// Defaults overridden by `HOST`, `PORT` and `REVERSE_SERVICE_ASSET`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST").filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }

        if let Some(port) = lookup("PORT") {
            match port.trim().parse() {
                Ok(port) => config.port = port,
                Err(e) => {
                    tracing::warn!(value = %port, error = %e, "ignoring invalid PORT");
                }
            }
        }

        if let Some(asset) = lookup("REVERSE_SERVICE_ASSET").filter(|a| !a.is_empty()) {
            config.asset_path = PathBuf::from(asset);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_service_config_default() {
        let config = ServiceConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8888);
        assert_eq!(config.asset_path, PathBuf::from("static/use.html"));
    }

    #[test]
    fn test_overrides_from_environment() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("REVERSE_SERVICE_ASSET", "/srv/form.html"),
        ]));
        assert_eq!(
            config,
            ServiceConfig {
                host: "127.0.0.1".to_string(),
                port: 9000,
                asset_path: PathBuf::from("/srv/form.html"),
            }
        );
    }

    #[test]
    fn test_invalid_port_keeps_default() {
        let config = ServiceConfig::from_lookup(lookup_from(&[("PORT", "eighty")]));
        assert_eq!(config.port, 8888);
    }

    #[test]
    fn test_blank_host_keeps_default() {
        let config = ServiceConfig::from_lookup(lookup_from(&[("HOST", "  ")]));
        assert_eq!(config.host, "0.0.0.0");
    }
}
