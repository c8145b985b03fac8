use std::path::PathBuf;
use thiserror::Error;

/// Central error type for Java discovery.
///
/// Probe failures and missing environment variables are not errors: they are
/// recovered where they happen and only show up in the logs.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    // ── Platform ────────────────────────────────────────
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ── Generic ─────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;

// ── Serialization for IPC ───────────────────────────────
// Embedders hand discovery results to a UI process, errors included.
impl serde::Serialize for DiscoveryError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
