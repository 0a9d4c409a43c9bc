// ── Site analytics ──
//
// The arithmetic behind the dashboard's KPI tiles. Pure functions over
// already-filtered, single-site slices; callers fetch data through their
// own accessors first.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{AuditEntry, AuditSeverity, ComplianceRecord, Patient, Site, StaffMember};

/// Headline numbers for one site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteKpis {
    /// Patients currently occupying beds (admitted or under observation).
    pub census: usize,
    pub total_patients: usize,
    /// Census against licensed beds, 0.0 when capacity is unknown.
    pub occupancy_pct: f64,
    pub staff_on_duty: usize,
    pub total_staff: usize,
    /// Mean compliance score across controls, 0.0 with no records.
    pub avg_compliance: f64,
    pub critical_audits: usize,
}

/// Compute KPI tiles from one site's slices.
pub fn compute_kpis(
    site: &Site,
    patients: &[Patient],
    staff: &[StaffMember],
    compliance: &[ComplianceRecord],
    audit: &[AuditEntry],
) -> SiteKpis {
    let census = patients.iter().filter(|p| p.is_active()).count();

    let occupancy_pct = if site.beds == 0 {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let pct = census as f64 / f64::from(site.beds) * 100.0;
        pct
    };

    let avg_compliance = if compliance.is_empty() {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let avg = compliance.iter().map(|r| f64::from(r.score)).sum::<f64>()
            / compliance.len() as f64;
        avg
    };

    SiteKpis {
        census,
        total_patients: patients.len(),
        occupancy_pct,
        staff_on_duty: staff.iter().filter(|s| s.on_duty).count(),
        total_staff: staff.len(),
        avg_compliance,
        critical_audits: audit
            .iter()
            .filter(|entry| entry.severity == AuditSeverity::Critical)
            .count(),
    }
}

/// Per-department counts of bed-occupying patients, name-ordered so
/// repeated renders are stable.
pub fn department_census(patients: &[Patient]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for patient in patients.iter().filter(|p| p.is_active()) {
        *counts.entry(patient.department.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(dept, count)| (dept.to_owned(), count))
        .collect()
}
