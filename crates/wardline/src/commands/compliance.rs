//! Compliance command handlers.

use tabled::Tabled;

use wardline_core::{ComplianceRecord, datasets};

use crate::cli::{ComplianceArgs, ComplianceCommand, GlobalOpts};
use crate::context::AppContext;
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct ComplianceRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "CONTROL")]
    control: String,
    #[tabled(rename = "SCORE")]
    score: u8,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "LAST REVIEWED")]
    last_reviewed: String,
}

fn compliance_row(record: &ComplianceRecord) -> ComplianceRow {
    ComplianceRow {
        id: record.id.clone(),
        control: record.control.clone(),
        score: record.score,
        status: record.status().to_string(),
        last_reviewed: record.last_reviewed.format("%Y-%m-%d").to_string(),
    }
}

pub fn handle(ctx: &AppContext, args: ComplianceArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ComplianceCommand::List => {
            util::require_active_site(ctx)?;
            let mut handle = ctx.session.dataset(datasets::COMPLIANCE, Vec::new());
            let records: Vec<ComplianceRecord> = handle.data().clone();

            let rendered =
                output::render_list(&global.output, &records, compliance_row, |r| r.id.clone());
            output::print_output(&rendered, global.quiet);
            Ok(())
        }
    }
}
