use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_WORKER_THREADS: usize = 4;
pub const DEFAULT_CATALOG_PATH: &str = "data/cars.json";
pub const DEFAULT_FRONTEND_DIR: &str = "frontend";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub frontend: FrontendConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST.into(), port: DEFAULT_PORT, worker_threads: Some(DEFAULT_WORKER_THREADS) }
    }
}

/// Where the static car list is read from at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { path: DEFAULT_CATALOG_PATH.into() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FrontendConfig {
    #[serde(default = "default_frontend_dir")]
    pub dir: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self { dir: DEFAULT_FRONTEND_DIR.into() }
    }
}

fn default_host() -> String { DEFAULT_HOST.into() }
fn default_port() -> u16 { DEFAULT_PORT }
fn default_catalog_path() -> String { DEFAULT_CATALOG_PATH.into() }
fn default_frontend_dir() -> String { DEFAULT_FRONTEND_DIR.into() }

fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(path, &content)
}

fn parse(path: &str, content: &str) -> Result<AppConfig> {
    toml::from_str(content).with_context(|| format!("invalid config file {path}"))
}

impl AppConfig {
    /// `CONFIG_PATH` (default `config.toml`), or env vars when that file does not exist.
    pub fn load_or_env() -> Result<Self> {
        Self::load_or_env_from(&config_path())
    }

    /// Only a missing file falls back to env vars; unreadable, malformed or
    /// invalid files are errors.
    pub fn load_or_env_from(path: &str) -> Result<Self> {
        let mut cfg = match std::fs::read_to_string(path) {
            Ok(content) => parse(path, &content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::from_env(),
            Err(e) => return Err(anyhow!(e).context(format!("cannot read config file {path}"))),
        };
        cfg.normalize_and_validate()
            .with_context(|| format!("invalid configuration from {path}"))?;
        Ok(cfg)
    }

    /// `SERVER_HOST`, `SERVER_PORT` (or `PORT`), `CATALOG_PATH`, `FRONTEND_DIR`, `TOKIO_WORKER_THREADS`.
    pub fn from_env() -> Self {
        let env = |k: &str| std::env::var(k).ok().filter(|v| !v.trim().is_empty());
        let port = env("SERVER_PORT")
            .or_else(|| env("PORT"))
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        Self {
            server: ServerConfig {
                host: env("SERVER_HOST").unwrap_or_else(default_host),
                port,
                worker_threads: env("TOKIO_WORKER_THREADS").and_then(|v| v.parse::<usize>().ok()),
            },
            catalog: CatalogConfig { path: env("CATALOG_PATH").unwrap_or_else(default_catalog_path) },
            frontend: FrontendConfig { dir: env("FRONTEND_DIR").unwrap_or_else(default_frontend_dir) },
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.catalog.validate()?;
        if self.frontend.dir.trim().is_empty() {
            self.frontend.dir = DEFAULT_FRONTEND_DIR.to_string();
        }
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = DEFAULT_HOST.to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(DEFAULT_WORKER_THREADS),
            Some(_) => {}
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl CatalogConfig {
    fn validate(&self) -> Result<()> {
        if self.path.trim().is_empty() {
            return Err(anyhow!("catalog.path is empty; set it in config.toml or CATALOG_PATH"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_tmp(content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("configs_{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn empty_file_uses_defaults() {
        let path = write_tmp("");
        let mut cfg = load_from_file(&path.to_string_lossy()).unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.port, 4000);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.worker_threads, Some(4));
        assert_eq!(cfg.catalog.path, "data/cars.json");
        assert_eq!(cfg.frontend.dir, "frontend");
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn sections_override_defaults() {
        let path = write_tmp(
            r#"
[server]
host = "0.0.0.0"
port = 8088
worker_threads = 0

[catalog]
path = "fixtures/cars.json"
"#,
        );
        let mut cfg = load_from_file(&path.to_string_lossy()).unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.bind_addr(), "0.0.0.0:8088");
        assert_eq!(cfg.server.worker_threads, Some(4));
        assert_eq!(cfg.catalog.path, "fixtures/cars.json");
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn zero_port_is_rejected() {
        let path = write_tmp("[server]\nport = 0\n");
        let mut cfg = load_from_file(&path.to_string_lossy()).unwrap();
        assert!(cfg.normalize_and_validate().is_err());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn blank_catalog_path_is_rejected() {
        let mut cfg = AppConfig::default();
        cfg.catalog.path = "  ".into();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn missing_file_falls_back_to_env() {
        let cfg = AppConfig::load_or_env_from("/nonexistent/config.toml").unwrap();
        assert!(cfg.server.port > 0);
        assert!(!cfg.catalog.path.trim().is_empty());
    }

    #[test]
    fn invalid_file_does_not_fall_back_to_env() {
        let path = write_tmp("[server]\nport = 0\n\n[catalog]\npath = \"custom/cars.json\"\n");
        assert!(AppConfig::load_or_env_from(&path.to_string_lossy()).is_err());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn malformed_file_does_not_fall_back_to_env() {
        let path = write_tmp("[server\nport = \"eighty\"\n");
        assert!(AppConfig::load_or_env_from(&path.to_string_lossy()).is_err());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn existing_file_wins_over_env() {
        let path = write_tmp("[catalog]\npath = \"custom/cars.json\"\n");
        let cfg = AppConfig::load_or_env_from(&path.to_string_lossy()).unwrap();
        assert_eq!(cfg.catalog.path, "custom/cars.json");
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_from_file("/nonexistent/config.toml").is_err());
    }
}
