//! Statistics command handler: KPI tiles and department census.

use owo_colors::OwoColorize;
use serde::Serialize;

use wardline_core::{
    AuditEntry, ComplianceRecord, Patient, SiteKpis, StaffMember, compute_kpis,
    department_census, datasets,
};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::context::AppContext;
use crate::error::CliError;
use crate::output;

use super::util;

/// Everything `stats` reports, in one serializable shape for the
/// structured output formats.
#[derive(Debug, Serialize)]
struct StatsReport {
    site: String,
    kpis: SiteKpis,
    departments: Vec<(String, usize)>,
}

pub fn handle(ctx: &AppContext, global: &GlobalOpts) -> Result<(), CliError> {
    let site = util::require_active_site(ctx)?;

    let patients: Vec<Patient> = ctx
        .session
        .dataset(datasets::PATIENTS, Vec::new())
        .data()
        .clone();
    let staff: Vec<StaffMember> = ctx
        .session
        .dataset(datasets::STAFF, Vec::new())
        .data()
        .clone();
    let compliance: Vec<ComplianceRecord> = ctx
        .session
        .dataset(datasets::COMPLIANCE, Vec::new())
        .data()
        .clone();
    let audit: Vec<AuditEntry> = ctx
        .session
        .dataset(datasets::AUDIT, Vec::new())
        .data()
        .clone();

    let report = StatsReport {
        site: site.code.clone(),
        kpis: compute_kpis(&site, &patients, &staff, &compliance, &audit),
        departments: department_census(&patients),
    };

    let rendered = match global.output {
        OutputFormat::Table => render_tiles(&report, output::should_color(&global.color)),
        OutputFormat::Json => output::render_json(&report, false),
        OutputFormat::JsonCompact => output::render_json(&report, true),
        OutputFormat::Yaml => output::render_yaml(&report),
        OutputFormat::Plain => format!(
            "census={}\noccupancy={:.1}\nstaff_on_duty={}\navg_compliance={:.1}\ncritical_audits={}",
            report.kpis.census,
            report.kpis.occupancy_pct,
            report.kpis.staff_on_duty,
            report.kpis.avg_compliance,
            report.kpis.critical_audits,
        ),
    };
    output::print_output(&rendered, global.quiet);
    Ok(())
}

/// The interactive tile view.
fn render_tiles(report: &StatsReport, color: bool) -> String {
    let kpis = &report.kpis;

    let header = format!("Site {}", report.site);
    let mut lines = vec![
        if color {
            header.bold().to_string()
        } else {
            header
        },
        format!(
            "  Census          {} of {} patients in beds",
            kpis.census, kpis.total_patients
        ),
        format!("  Occupancy       {:.1}%", kpis.occupancy_pct),
        format!(
            "  Staff on duty   {} of {}",
            kpis.staff_on_duty, kpis.total_staff
        ),
        format!("  Avg compliance  {:.1}", kpis.avg_compliance),
        format!("  Critical audits {}", kpis.critical_audits),
    ];

    if !report.departments.is_empty() {
        lines.push(String::new());
        lines.push(if color {
            "Department census".bold().to_string()
        } else {
            "Department census".to_owned()
        });
        for (department, count) in &report.departments {
            lines.push(format!("  {department:<20} {count}"));
        }
    }

    lines.join("\n")
}
