//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the router is built.

use std::path::Path;

use tracing::warn;

/// Fail when the catalog file is missing; warn when the UI assets are.
pub async fn ensure_env(frontend_dir: &str, catalog_path: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(frontend_dir).await.is_err() {
        warn!(%frontend_dir, "frontend assets directory not found; /app will 404");
    }
    if tokio::fs::metadata(Path::new(catalog_path)).await.is_err() {
        return Err(anyhow::anyhow!("catalog file {catalog_path} not found"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_catalog_is_an_error() {
        let res = ensure_env("does-not-exist", "does-not-exist/cars.json").await;
        assert!(res.is_err());
    }

    #[tokio::test]
    async fn missing_frontend_only_warns() -> anyhow::Result<()> {
        let catalog = std::env::temp_dir().join("common_env_catalog.json");
        tokio::fs::write(&catalog, b"[]").await?;
        ensure_env("does-not-exist", &catalog.to_string_lossy()).await?;
        let _ = tokio::fs::remove_file(&catalog).await;
        Ok(())
    }
}
