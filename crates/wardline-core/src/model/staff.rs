// ── Staff domain type ──

use serde::{Deserialize, Serialize};

use super::SiteTagged;
use super::site::SiteId;

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
pub enum StaffRole {
    Physician,
    Nurse,
    Technician,
    Pharmacist,
    Administrator,
}

/// A staff directory entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMember {
    /// Site-scoped record id (e.g., `ST-NGH-0003`).
    pub id: String,
    pub site_id: SiteId,
    pub name: String,
    pub role: StaffRole,
    pub department: String,
    pub on_duty: bool,
}

impl SiteTagged for StaffMember {
    fn site_id(&self) -> &SiteId {
        &self.site_id
    }
}
