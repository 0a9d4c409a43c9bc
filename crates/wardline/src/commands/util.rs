//! Shared helpers for command handlers.

use std::str::FromStr;
use std::sync::Arc;

use chrono::Utc;

use wardline_core::{AuditAction, AuditEntry, AuditSeverity, Site, datasets};

use crate::context::AppContext;
use crate::error::CliError;

/// The active site, or the "select a site first" error every data
/// command shares.
pub fn require_active_site(ctx: &AppContext) -> Result<Arc<Site>, CliError> {
    ctx.session.active_site().ok_or(CliError::NoActiveSite)
}

/// Parse a domain enum from a CLI string, mapping failure to a usage error.
pub fn parse_field<T>(value: &str, field: &str, expected: &str) -> Result<T, CliError>
where
    T: FromStr,
{
    value.parse().map_err(|_| CliError::Validation {
        field: field.into(),
        reason: format!("expected {expected}, got '{value}'"),
    })
}

/// Append one entry to the active site's audit trail, newest first.
pub fn append_audit(
    ctx: &AppContext,
    actor: &str,
    action: AuditAction,
    severity: AuditSeverity,
    detail: String,
) -> Result<(), CliError> {
    let site = require_active_site(ctx)?;
    let mut handle = ctx.session.dataset(datasets::AUDIT, Vec::new());
    let mut entries: Vec<AuditEntry> = handle.data().clone();
    entries.insert(
        0,
        AuditEntry {
            id: ctx.session.id_factory("AUD").next_id()?,
            site_id: site.id.clone(),
            timestamp: Utc::now(),
            actor: actor.to_owned(),
            action,
            severity,
            detail,
        },
    );
    handle.set(entries)?;
    Ok(())
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}
