// ── Core error types ──
//
// User-facing errors from wardline-core. A missing dataset entry is NOT an
// error (it resolves to the caller's default) -- only structural problems
// surface here: no active site, unknown sites, bad keys, snapshot I/O.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Session errors ───────────────────────────────────────────────
    #[error("No active site -- select one before reading or writing site data")]
    NoActiveSite,

    #[error("Site not found: {identifier}")]
    SiteNotFound { identifier: String },

    #[error("A site with code '{code}' already exists")]
    DuplicateSite { code: String },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Dataset keys must be non-empty")]
    InvalidDatasetKey,

    #[error("Data encoding error: {0}")]
    Data(#[from] serde_json::Error),

    // ── Persistence errors ───────────────────────────────────────────
    #[error("Failed to read or write store snapshot at {path}: {source}")]
    Persistence {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
