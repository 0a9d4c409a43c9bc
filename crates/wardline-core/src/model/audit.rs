// ── Audit trail domain types ──
//
// One entry per recorded operator action. The compliance screens list
// these; `stats` counts critical entries into the KPI tiles.

use chrono::{DateTime, Utc};
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
pub enum AuditAction {
    PatientAdmitted,
    PatientDischarged,
    RecordViewed,
    RecordUpdated,
    LoginFailure,
    ConfigChanged,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum AuditSeverity {
    Info,
    Warning,
    Critical,
}

/// One line of the audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Site-scoped record id (e.g., `AUD-NGH-0042`).
    pub id: String,
    pub site_id: SiteId,
    pub timestamp: DateTime<Utc>,
    /// Operator the action is attributed to.
    pub actor: String,
    pub action: AuditAction,
    pub severity: AuditSeverity,
    pub detail: String,
}

impl SiteTagged for AuditEntry {
    fn site_id(&self) -> &SiteId {
        &self.site_id
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_by_urgency() {
        assert!(AuditSeverity::Info < AuditSeverity::Warning);
        assert!(AuditSeverity::Warning < AuditSeverity::Critical);
    }

    #[test]
    fn action_round_trips_through_strings() {
        let action: AuditAction = "patient-admitted".parse().unwrap();
        assert_eq!(action, AuditAction::PatientAdmitted);
        assert_eq!(action.to_string(), "patient-admitted");
    }
}
