// ── Compliance scoring domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SiteTagged;
use super::site::SiteId;

/// Banding derived from a record's score, matching the dashboard's
/// green / amber / red badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ComplianceStatus {
    Compliant,
    NeedsAttention,
    Critical,
}

/// Score for one compliance control (hand hygiene, med reconciliation, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceRecord {
    /// Site-scoped record id (e.g., `CMP-NGH-0002`).
    pub id: String,
    pub site_id: SiteId,
    /// Name of the audited control.
    pub control: String,
    /// 0-100.
    pub score: u8,
    pub last_reviewed: DateTime<Utc>,
}

impl ComplianceRecord {
    /// Band the score: >= 90 compliant, >= 70 needs attention, else critical.
    pub fn status(&self) -> ComplianceStatus {
        match self.score {
            90..=u8::MAX => ComplianceStatus::Compliant,
            70..=89 => ComplianceStatus::NeedsAttention,
            _ => ComplianceStatus::Critical,
        }
    }
}

impl SiteTagged for ComplianceRecord {
    fn site_id(&self) -> &SiteId {
        &self.site_id
    }
}
