//! Runtime configuration read from the environment
//!
//! - `PORT` - Listening port (default: 1234)
//! - `MOVIES_FILE` - Optional JSON seed file; the bundled seed is used when unset

use std::path::PathBuf;

use tracing::warn;

pub const DEFAULT_PORT: u16 = 1234;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub movies_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            movies_file: None,
        }
    }
}

impl Config {
    /// Reads the configuration from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(value = %raw, default = DEFAULT_PORT, "Invalid PORT, using default");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let movies_file = lookup("MOVIES_FILE")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Self { port, movies_file }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config(&[]), Config::default());
        assert_eq!(config(&[]).port, 1234);
    }

    #[test]
    fn reads_port_and_seed_file() {
        let cfg = config(&[("PORT", "8080"), ("MOVIES_FILE", "/srv/movies.json")]);
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.movies_file, Some(PathBuf::from("/srv/movies.json")));
    }

    #[test]
    fn falls_back_on_invalid_port() {
        assert_eq!(config(&[("PORT", "not-a-port")]).port, DEFAULT_PORT);
        assert_eq!(config(&[("PORT", "70000")]).port, DEFAULT_PORT);
    }

    #[test]
    fn empty_seed_path_means_bundled() {
        assert_eq!(config(&[("MOVIES_FILE", "")]).movies_file, None);
    }
}
