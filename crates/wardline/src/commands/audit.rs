//! Audit trail command handlers.

use tabled::Tabled;

use wardline_core::{AuditAction, AuditEntry, AuditSeverity, datasets};

use crate::cli::{AuditArgs, AuditCommand, GlobalOpts};
use crate::context::AppContext;
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct AuditRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "TIME")]
    time: String,
    #[tabled(rename = "ACTOR")]
    actor: String,
    #[tabled(rename = "ACTION")]
    action: String,
    #[tabled(rename = "SEVERITY")]
    severity: String,
    #[tabled(rename = "DETAIL")]
    detail: String,
}

fn audit_row(entry: &AuditEntry) -> AuditRow {
    AuditRow {
        id: entry.id.clone(),
        time: entry.timestamp.format("%Y-%m-%d %H:%M").to_string(),
        actor: entry.actor.clone(),
        action: entry.action.to_string(),
        severity: entry.severity.to_string(),
        detail: entry.detail.clone(),
    }
}

pub fn handle(ctx: &AppContext, args: AuditArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        AuditCommand::List { limit, severity } => {
            util::require_active_site(ctx)?;
            let mut handle = ctx.session.dataset(datasets::AUDIT, Vec::new());
            // Entries are stored newest first.
            let mut entries: Vec<AuditEntry> = handle.data().clone();

            if let Some(severity) = severity {
                let severity: AuditSeverity = util::parse_field(
                    &severity,
                    "severity",
                    "one of info, warning, critical",
                )?;
                entries.retain(|entry| entry.severity == severity);
            }
            entries.truncate(limit);

            let rendered =
                output::render_list(&global.output, &entries, audit_row, |e| e.id.clone());
            output::print_output(&rendered, global.quiet);
            Ok(())
        }

        AuditCommand::Record {
            action,
            detail,
            actor,
            severity,
        } => {
            util::require_active_site(ctx)?;
            let action: AuditAction = util::parse_field(
                &action,
                "action",
                "an action like patient-admitted or record-viewed",
            )?;
            let severity: AuditSeverity = util::parse_field(
                &severity,
                "severity",
                "one of info, warning, critical",
            )?;

            util::append_audit(ctx, &actor, action, severity, detail)?;
            ctx.save()?;

            if !global.quiet {
                eprintln!("Recorded {action} audit entry");
            }
            Ok(())
        }
    }
}
