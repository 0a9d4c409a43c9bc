// ── Patient domain type ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SiteTagged;
use super::site::SiteId;

/// Where a patient currently stands in their stay.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum PatientStatus {
    Admitted,
    Observation,
    Discharged,
}

/// A patient record as the dashboard's patient screens render it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    /// Site-scoped record id (e.g., `PT-NGH-0007`).
    pub id: String,
    pub site_id: SiteId,
    /// Medical record number.
    pub mrn: String,
    pub name: String,
    pub department: String,
    pub status: PatientStatus,
    /// Acuity level, 1 (stable) through 5 (critical).
    pub acuity: u8,
    pub admitted_at: DateTime<Utc>,
}

impl Patient {
    /// Whether this patient currently occupies a bed.
    pub fn is_active(&self) -> bool {
        !matches!(self.status, PatientStatus::Discharged)
    }
}

impl SiteTagged for Patient {
    fn site_id(&self) -> &SiteId {
        &self.site_id
    }
}
