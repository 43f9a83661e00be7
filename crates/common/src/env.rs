//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the listener is bound.

use tracing::warn;

/// Warn when the built landing-page assets are missing. Returns whether the
/// directory exists so the router can skip mounting it.
pub async fn ensure_env(frontend_dir: &str) -> anyhow::Result<bool> {
    match tokio::fs::metadata(frontend_dir).await {
        Ok(meta) if meta.is_dir() => Ok(true),
        Ok(_) => Err(anyhow::anyhow!("{frontend_dir} exists but is not a directory")),
        Err(_) => {
            warn!(%frontend_dir, "frontend assets directory not found; serving API only");
            Ok(false)
        }
    }
}
