//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use wardline_core::CoreError;

/// Stable exit codes for scripting against the CLI.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NO_SITE: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONFLICT: i32 = 5;
}

#[derive(Debug, Error, Diagnostic)]
#[allow(dead_code)]
pub enum CliError {
    // ── Site selection ───────────────────────────────────────────────
    #[error("No active site")]
    #[diagnostic(
        code(wardline::no_active_site),
        help(
            "Select a site first: wardline sites use <code>\n\
             See what is registered: wardline sites list"
        )
    )]
    NoActiveSite,

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(wardline::not_found),
        help("Run: wardline {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    #[error("{resource_type} '{identifier}' already exists")]
    #[diagnostic(code(wardline::conflict))]
    Conflict {
        resource_type: String,
        identifier: String,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(wardline::validation))]
    Validation { field: String, reason: String },

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(wardline::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── Store / persistence ──────────────────────────────────────────
    #[error("Store data error: {message}")]
    #[diagnostic(code(wardline::store))]
    Store { message: String },

    #[error("Could not read or write the store snapshot at {path}")]
    #[diagnostic(
        code(wardline::persistence),
        help("Check the path and permissions, or point --data-file elsewhere.")
    )]
    Persistence {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration error: {0}")]
    #[diagnostic(code(wardline::config))]
    Config(#[from] wardline_config::ConfigError),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(wardline::json))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoActiveSite => exit_code::NO_SITE,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Conflict { .. } => exit_code::CONFLICT,
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NoActiveSite => CliError::NoActiveSite,

            CoreError::SiteNotFound { identifier } => CliError::NotFound {
                resource_type: "site".into(),
                identifier,
                list_command: "sites list".into(),
            },

            CoreError::DuplicateSite { code } => CliError::Conflict {
                resource_type: "site".into(),
                identifier: code,
            },

            CoreError::InvalidDatasetKey => CliError::Validation {
                field: "dataset".into(),
                reason: "dataset keys must be non-empty".into(),
            },

            CoreError::Data(err) => CliError::Store {
                message: err.to_string(),
            },

            CoreError::Persistence { path, source } => CliError::Persistence { path, source },
        }
    }
}
