use std::path::{Path, PathBuf};

use crate::error::ServerError;

/// Where the host listens and what it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding the prebuilt bundle.
    pub root: PathBuf,
    /// File under `root` served for every unmatched route.
    pub entry: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: Self::DEFAULT_PORT,
            root: PathBuf::from("dist"),
            entry: "index.html".into(),
        }
    }
}

impl ServerConfig {
    pub const DEFAULT_PORT: u16 = 8081;
    pub const PORT_VAR: &'static str = "PORT";

    /// Default config with the port taken from the `PORT` environment variable.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    /// An unset or empty variable selects the default port.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let port = match lookup(Self::PORT_VAR) {
            Some(raw) if !raw.trim().is_empty() => parse_port(&raw)?,
            _ => Self::DEFAULT_PORT,
        };
        Ok(Self {
            port,
            ..Self::default()
        })
    }

    pub fn with_root(mut self, root: impl AsRef<Path>) -> Self {
        self.root = root.as_ref().to_path_buf();
        self
    }

    pub fn entry_path(&self) -> PathBuf {
        self.root.join(&self.entry)
    }
}

fn parse_port(raw: &str) -> Result<u16, ServerError> {
    raw.trim()
        .parse::<u16>()
        .map_err(|_| ServerError::InvalidPort(raw.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_port_uses_default() {
        let cfg = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg.port, 8081);
        assert_eq!(cfg.root, PathBuf::from("dist"));
        assert_eq!(cfg.entry_path(), PathBuf::from("dist").join("index.html"));
    }

    #[test]
    fn empty_port_uses_default() {
        let cfg = ServerConfig::from_lookup(|_| Some(String::new())).unwrap();
        assert_eq!(cfg.port, 8081);
    }

    #[test]
    fn port_read_from_lookup() {
        let cfg = ServerConfig::from_lookup(|k| (k == "PORT").then(|| " 3000 ".to_string())).unwrap();
        assert_eq!(cfg.port, 3000);
    }

    #[test]
    fn garbage_port_is_rejected() {
        let err = ServerConfig::from_lookup(|_| Some("eighty".into())).unwrap_err();
        assert!(matches!(err, ServerError::InvalidPort(p) if p == "eighty"));
        assert!(ServerConfig::from_lookup(|_| Some("70000".into())).is_err());
    }
}
