use std::time::Duration;

use serde::Deserialize;

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address and port the listener binds to
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Optional per-read timeout in seconds. Unset means a connection that
    /// never sends the header terminator is held until the peer disconnects,
    /// which is the reference behavior.
    #[serde(default)]
    pub read_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            read_timeout_secs: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the YAML file named by the `CONFIG`
    /// environment variable, or falls back to defaults when it is unset.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var("CONFIG") {
            Ok(path) => {
                let contents = std::fs::read_to_string(&path)?;
                Self::from_yaml(&contents)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn from_yaml(contents: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }
}

impl ServerConfig {
    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout_secs.map(Duration::from_secs)
    }
}
