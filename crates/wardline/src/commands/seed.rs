//! Demo data seeding command handler.

use wardline_core::seed_demo_data;

use crate::cli::{GlobalOpts, SeedArgs};
use crate::context::AppContext;
use crate::error::CliError;

pub fn handle(ctx: &AppContext, args: SeedArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let summary = seed_demo_data(&ctx.session, args.seed, args.force)?;
    ctx.save()?;

    if !global.quiet {
        eprintln!(
            "Seeded {} new sites: {} patients, {} staff, {} audit entries, {} compliance records",
            summary.sites,
            summary.patients,
            summary.staff,
            summary.audit_entries,
            summary.compliance_records,
        );
        if ctx.session.active_site().is_none() {
            eprintln!("Pick a site to work with: wardline sites use NGH");
        }
    }
    Ok(())
}
