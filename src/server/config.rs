//! Server configuration

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Port used when `PORT` is unset or empty
pub const DEFAULT_PORT: u16 = 3001;

/// Listen on all interfaces
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Static asset directory served at `/`
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Environment variable holding the listening port
pub const PORT_ENV: &str = "PORT";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl ServerConfig {
    /// Defaults with the port taken from `PORT`
    pub fn from_env() -> Result<Self> {
        let port = parse_port(std::env::var(PORT_ENV).ok().as_deref())?;
        Ok(Self {
            port,
            ..Self::default()
        })
    }

    /// Address passed to the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse a port value; unset or empty means the default
pub fn parse_port(value: Option<&str>) -> Result<u16> {
    match value.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(raw) => raw
            .parse()
            .with_context(|| format!("Invalid {} value: {:?}", PORT_ENV, raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port_default() {
        assert_eq!(parse_port(None).unwrap(), 3001);
        assert_eq!(parse_port(Some("")).unwrap(), 3001);
    }

    #[test]
    fn test_parse_port_value() {
        assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
        assert_eq!(parse_port(Some(" 8080\n")).unwrap(), 8080);
    }

    #[test]
    fn test_parse_port_invalid() {
        assert!(parse_port(Some("http")).is_err());
        assert!(parse_port(Some("70000")).is_err());
    }

    #[test]
    fn test_bind_address() {
        let config = ServerConfig {
            port: 4000,
            ..Default::default()
        };
        assert_eq!(config.bind_address(), "0.0.0.0:4000");
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }
}
