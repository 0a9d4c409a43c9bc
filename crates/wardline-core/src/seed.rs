// ── Demo data seeding ──
//
// Populates the store with a fixed set of demo hospitals and plausible
// records for every screen. Seeding goes through the same accessor path
// screens use: check whether the slice exists, then explicitly set it --
// an unwritten slice is never populated implicitly.

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::info;

use crate::error::CoreError;
use crate::model::{
    AuditAction, AuditEntry, AuditSeverity, ComplianceRecord, Patient, PatientStatus, Site,
    SiteTheme, StaffMember, StaffRole,
};
use crate::session::{IdFactory, SiteSession};
use crate::store::datasets;

const FIRST_NAMES: &[&str] = &[
    "Alex", "Sam", "Jordan", "Casey", "Riley", "Morgan", "Avery", "Quinn", "Harper", "Rowan",
    "Elliot", "Dana", "Kai", "Noor", "Imani", "Lucia", "Mateo", "Priya", "Tomas", "Wren",
];

const LAST_NAMES: &[&str] = &[
    "Okafor", "Moran", "Castillo", "Nguyen", "Haddad", "Lindgren", "Abebe", "Kowalski",
    "Fujimoto", "Deluca", "Marchetti", "Osei", "Petrov", "Silva", "Tanaka", "Varga",
];

const COMPLIANCE_CONTROLS: &[&str] = &[
    "Hand hygiene",
    "Medication reconciliation",
    "Surgical safety checklist",
    "Patient identification",
    "Infection control",
    "Documentation timeliness",
];

/// What a seeding run created.
#[derive(Debug, Default, Clone, Serialize)]
pub struct SeedSummary {
    pub sites: usize,
    pub patients: usize,
    pub staff: usize,
    pub audit_entries: usize,
    pub compliance_records: usize,
}

/// The demo hospital network.
fn demo_sites() -> Vec<Site> {
    let mut northgate = Site::new("NGH", "Northgate General Hospital");
    northgate.departments = vec![
        "Emergency".into(),
        "Cardiology".into(),
        "Oncology".into(),
        "Pediatrics".into(),
        "General Surgery".into(),
    ];
    northgate.theme = SiteTheme::Teal;
    northgate.beds = 220;

    let mut riverview = Site::new("RVM", "Riverview Medical Center");
    riverview.departments = vec![
        "Emergency".into(),
        "Maternity".into(),
        "Orthopedics".into(),
        "General Medicine".into(),
    ];
    riverview.theme = SiteTheme::Indigo;
    riverview.beds = 140;

    let mut stlucia = Site::new("SLC", "St. Lucia Clinic");
    stlucia.departments = vec!["General Medicine".into(), "Geriatrics".into()];
    stlucia.theme = SiteTheme::Amber;
    stlucia.beds = 60;

    vec![northgate, riverview, stlucia]
}

/// Register the demo sites and fill their datasets.
///
/// Deterministic for a given `rng_seed` (timestamps aside). Existing
/// slices are left alone unless `force` is set; existing sites are never
/// re-registered. The caller's active-site selection is restored at the
/// end.
pub fn seed_demo_data(
    session: &SiteSession,
    rng_seed: u64,
    force: bool,
) -> Result<SeedSummary, CoreError> {
    let mut rng = StdRng::seed_from_u64(rng_seed);
    let store = session.store();
    let previously_active = store.active_site();

    let mut summary = SeedSummary::default();

    for site in demo_sites() {
        let site = match store.find_site(&site.code) {
            Some(existing) => existing,
            None => {
                summary.sites += 1;
                store.register_site(site)?
            }
        };
        store.activate(site.code.as_str())?;

        if force || !store.has_site_data(datasets::PATIENTS) {
            let generated = gen_patients(&mut rng, &site, &session.id_factory("PT"))?;
            summary.patients += generated.len();
            session
                .dataset(datasets::PATIENTS, Vec::new())
                .set(generated)?;
        }

        let roster = if force || !store.has_site_data(datasets::STAFF) {
            let generated = gen_staff(&mut rng, &site, &session.id_factory("ST"))?;
            summary.staff += generated.len();
            let mut handle = session.dataset(datasets::STAFF, Vec::new());
            handle.set(generated)?;
            handle.data().clone()
        } else {
            session.dataset(datasets::STAFF, Vec::new()).data().clone()
        };

        if force || !store.has_site_data(datasets::COMPLIANCE) {
            let generated = gen_compliance(&mut rng, &site, &session.id_factory("CMP"))?;
            summary.compliance_records += generated.len();
            session
                .dataset(datasets::COMPLIANCE, Vec::new())
                .set(generated)?;
        }

        if force || !store.has_site_data(datasets::AUDIT) {
            let generated = gen_audit(&mut rng, &site, &roster, &session.id_factory("AUD"))?;
            summary.audit_entries += generated.len();
            session
                .dataset(datasets::AUDIT, Vec::new())
                .set(generated)?;
        }
    }

    // Put the selection back the way the caller had it.
    match previously_active {
        Some(site) => {
            store.activate(site.id.as_str())?;
        }
        None => store.deactivate(),
    }

    info!(
        sites = summary.sites,
        patients = summary.patients,
        staff = summary.staff,
        "seeded demo data"
    );
    Ok(summary)
}

// ── Generators ──────────────────────────────────────────────────────

fn full_name(rng: &mut StdRng) -> String {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Alex");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("Okafor");
    format!("{first} {last}")
}

fn pick_department(rng: &mut StdRng, site: &Site) -> String {
    site.departments
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| "General Medicine".to_owned())
}

fn gen_patients(
    rng: &mut StdRng,
    site: &Site,
    ids: &IdFactory,
) -> Result<Vec<Patient>, CoreError> {
    let count = rng.gen_range(12..=24);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let status = match rng.gen_range(0..10) {
            0..=5 => PatientStatus::Admitted,
            6..=7 => PatientStatus::Observation,
            _ => PatientStatus::Discharged,
        };
        out.push(Patient {
            id: ids.next_id()?,
            site_id: site.id.clone(),
            mrn: format!("MRN-{:06}", rng.gen_range(100_000..1_000_000)),
            name: full_name(rng),
            department: pick_department(rng, site),
            status,
            acuity: rng.gen_range(1..=5),
            admitted_at: Utc::now() - Duration::hours(rng.gen_range(1..=336)),
        });
    }
    Ok(out)
}

fn gen_staff(
    rng: &mut StdRng,
    site: &Site,
    ids: &IdFactory,
) -> Result<Vec<StaffMember>, CoreError> {
    const ROLES: &[StaffRole] = &[
        StaffRole::Physician,
        StaffRole::Nurse,
        StaffRole::Nurse,
        StaffRole::Technician,
        StaffRole::Pharmacist,
        StaffRole::Administrator,
    ];

    let count = rng.gen_range(8..=16);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(StaffMember {
            id: ids.next_id()?,
            site_id: site.id.clone(),
            name: full_name(rng),
            role: ROLES.choose(rng).copied().unwrap_or(StaffRole::Nurse),
            department: pick_department(rng, site),
            on_duty: rng.gen_bool(0.6),
        });
    }
    Ok(out)
}

fn gen_compliance(
    rng: &mut StdRng,
    site: &Site,
    ids: &IdFactory,
) -> Result<Vec<ComplianceRecord>, CoreError> {
    let mut out = Vec::with_capacity(COMPLIANCE_CONTROLS.len());
    for control in COMPLIANCE_CONTROLS {
        out.push(ComplianceRecord {
            id: ids.next_id()?,
            site_id: site.id.clone(),
            control: (*control).to_owned(),
            score: rng.gen_range(55..=100),
            last_reviewed: Utc::now() - Duration::days(rng.gen_range(0..30)),
        });
    }
    Ok(out)
}

fn gen_audit(
    rng: &mut StdRng,
    site: &Site,
    roster: &[StaffMember],
    ids: &IdFactory,
) -> Result<Vec<AuditEntry>, CoreError> {
    const ACTIONS: &[AuditAction] = &[
        AuditAction::PatientAdmitted,
        AuditAction::PatientDischarged,
        AuditAction::RecordViewed,
        AuditAction::RecordViewed,
        AuditAction::RecordUpdated,
        AuditAction::LoginFailure,
        AuditAction::ConfigChanged,
    ];

    let count = rng.gen_range(15..=30);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let action = ACTIONS
            .choose(rng)
            .copied()
            .unwrap_or(AuditAction::RecordViewed);
        let actor = roster
            .choose(rng)
            .map_or_else(|| "system".to_owned(), |member| member.name.clone());
        out.push(AuditEntry {
            id: ids.next_id()?,
            site_id: site.id.clone(),
            timestamp: Utc::now() - Duration::minutes(rng.gen_range(5..=10_080)),
            actor,
            severity: severity_for(action, rng),
            detail: detail_for(action),
            action,
        });
    }

    // Newest first, the way the audit screen lists them.
    out.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    Ok(out)
}

fn severity_for(action: AuditAction, rng: &mut StdRng) -> AuditSeverity {
    match action {
        AuditAction::LoginFailure => {
            if rng.gen_bool(0.3) {
                AuditSeverity::Critical
            } else {
                AuditSeverity::Warning
            }
        }
        AuditAction::ConfigChanged => AuditSeverity::Warning,
        AuditAction::PatientAdmitted
        | AuditAction::PatientDischarged
        | AuditAction::RecordViewed
        | AuditAction::RecordUpdated => AuditSeverity::Info,
    }
}

fn detail_for(action: AuditAction) -> String {
    match action {
        AuditAction::PatientAdmitted => "Patient admitted via intake".to_owned(),
        AuditAction::PatientDischarged => "Discharge paperwork completed".to_owned(),
        AuditAction::RecordViewed => "Chart opened from patient list".to_owned(),
        AuditAction::RecordUpdated => "Care plan updated".to_owned(),
        AuditAction::LoginFailure => "Failed workstation sign-in".to_owned(),
        AuditAction::ConfigChanged => "Dashboard settings changed".to_owned(),
    }
}
