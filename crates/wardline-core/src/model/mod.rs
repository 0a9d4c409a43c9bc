// ── Domain model ──
//
// Typed records for everything the operations screens display. Every
// record except Site itself carries the owning site's id and implements
// SiteTagged, so flat collections can be partitioned without a store
// round-trip.

mod audit;
mod compliance;
mod patient;
mod site;
mod staff;

pub use audit::{AuditAction, AuditEntry, AuditSeverity};
pub use compliance::{ComplianceRecord, ComplianceStatus};
pub use patient::{Patient, PatientStatus};
pub use site::{Site, SiteId, SiteTheme};
pub use staff::{StaffMember, StaffRole};

/// A record that belongs to exactly one site.
///
/// The static-typed replacement for a loosely-shaped `siteId` field:
/// implementing this is what lets [`crate::filter_by_site`] partition a
/// flat collection.
pub trait SiteTagged {
    fn site_id(&self) -> &SiteId;
}
