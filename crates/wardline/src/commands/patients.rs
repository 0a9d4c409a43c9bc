//! Patient command handlers.

use chrono::Utc;
use tabled::Tabled;

use wardline_core::{
    AuditAction, AuditSeverity, Patient, PatientStatus, datasets,
};

use crate::cli::{GlobalOpts, PatientsArgs, PatientsCommand};
use crate::context::AppContext;
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct PatientRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "MRN")]
    mrn: String,
    #[tabled(rename = "DEPARTMENT")]
    department: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "ACUITY")]
    acuity: u8,
    #[tabled(rename = "ADMITTED")]
    admitted: String,
}

fn patient_row(patient: &Patient) -> PatientRow {
    PatientRow {
        id: patient.id.clone(),
        name: patient.name.clone(),
        mrn: patient.mrn.clone(),
        department: patient.department.clone(),
        status: patient.status.to_string(),
        acuity: patient.acuity,
        admitted: patient.admitted_at.format("%Y-%m-%d %H:%M").to_string(),
    }
}

pub fn handle(ctx: &AppContext, args: PatientsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        PatientsCommand::List { department, status } => {
            util::require_active_site(ctx)?;
            let mut handle = ctx.session.dataset(datasets::PATIENTS, Vec::new());
            let mut patients: Vec<Patient> = handle.data().clone();

            if let Some(department) = department {
                patients.retain(|p| p.department.eq_ignore_ascii_case(&department));
            }
            if let Some(status) = status {
                let status: PatientStatus = util::parse_field(
                    &status,
                    "status",
                    "one of admitted, observation, discharged",
                )?;
                patients.retain(|p| p.status == status);
            }

            let rendered =
                output::render_list(&global.output, &patients, patient_row, |p| p.id.clone());
            output::print_output(&rendered, global.quiet);
            Ok(())
        }

        PatientsCommand::Admit {
            name,
            department,
            acuity,
            mrn,
        } => {
            let site = util::require_active_site(ctx)?;
            if !(1..=5).contains(&acuity) {
                return Err(CliError::Validation {
                    field: "acuity".into(),
                    reason: format!("must be between 1 and 5, got {acuity}"),
                });
            }

            let id = ctx.session.id_factory("PT").next_id()?;
            // Synthesized MRNs just need per-invocation uniqueness; real
            // ones arrive via --mrn.
            let mrn =
                mrn.unwrap_or_else(|| format!("MRN-{:06}", Utc::now().timestamp_subsec_micros()));

            let mut handle = ctx.session.dataset(datasets::PATIENTS, Vec::new());
            let mut patients: Vec<Patient> = handle.data().clone();
            patients.push(Patient {
                id: id.clone(),
                site_id: site.id.clone(),
                mrn,
                name: name.clone(),
                department,
                status: PatientStatus::Admitted,
                acuity,
                admitted_at: Utc::now(),
            });
            handle.set(patients)?;

            util::append_audit(
                ctx,
                "console",
                AuditAction::PatientAdmitted,
                AuditSeverity::Info,
                format!("Admitted {name} as {id}"),
            )?;
            ctx.save()?;

            if !global.quiet {
                eprintln!("Admitted {name} as {id}");
            }
            Ok(())
        }

        PatientsCommand::Discharge { id } => {
            util::require_active_site(ctx)?;
            let mut handle = ctx.session.dataset(datasets::PATIENTS, Vec::new());
            let mut patients: Vec<Patient> = handle.data().clone();

            let Some(patient) = patients
                .iter_mut()
                .find(|p| p.id.eq_ignore_ascii_case(&id))
            else {
                return Err(CliError::NotFound {
                    resource_type: "patient".into(),
                    identifier: id,
                    list_command: "patients list".into(),
                });
            };

            patient.status = PatientStatus::Discharged;
            let name = patient.name.clone();
            let patient_id = patient.id.clone();
            handle.set(patients)?;

            util::append_audit(
                ctx,
                "console",
                AuditAction::PatientDischarged,
                AuditSeverity::Info,
                format!("Discharged {name} ({patient_id})"),
            )?;
            ctx.save()?;

            if !global.quiet {
                eprintln!("Discharged {name} ({patient_id})");
            }
            Ok(())
        }
    }
}
