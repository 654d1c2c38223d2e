//! Server Configuration

use std::net::SocketAddr;
use std::path::PathBuf;

use platform_core::Locale;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_MODEL: &str = "gpt-4-turbo";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid BIND_ADDR {value:?}: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Runtime settings, read from the environment (and `.env`)
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// `BIND_ADDR`
    pub bind_addr: SocketAddr,

    /// `STATIC_DIR`: compiled landing page
    pub static_dir: PathBuf,

    /// `MODEL_NAME`: reported in every reply
    pub model: String,

    /// `REPLY_LOCALE`: language of the canned replies
    pub locale: Locale,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind
            .parse()
            .map_err(|source| ConfigError::BindAddr { value: bind, source })?;

        Ok(Self {
            bind_addr,
            static_dir: var("STATIC_DIR")
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.into())
                .into(),
            model: var("MODEL_NAME").unwrap_or_else(|| DEFAULT_MODEL.into()),
            locale: var("REPLY_LOCALE")
                .map(|tag| Locale::from_tag(&tag))
                .unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.model, "gpt-4-turbo");
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("STATIC_DIR", "dist"),
            ("MODEL_NAME", "demo-1"),
            ("REPLY_LOCALE", "ru-RU"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.static_dir, PathBuf::from("dist"));
        assert_eq!(config.model, "demo-1");
        assert_eq!(config.locale, Locale::Ru);
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[("MODEL_NAME", "  ")])).unwrap();
        assert_eq!(config.model, "gpt-4-turbo");
    }

    #[test]
    fn test_bad_bind_addr() {
        let err = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "not-an-addr")])).unwrap_err();
        assert!(err.to_string().contains("not-an-addr"));
    }
}
