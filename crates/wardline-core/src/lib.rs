// wardline-core: Site-scoped data layer between the store and consumers
// (CLI commands, dashboard screens).
//
// Every read and write of operational data flows through a SiteSession
// bound to a shared SiteStore, so one hospital's records can never
// surface under another hospital's view.

pub mod analytics;
pub mod error;
pub mod filter;
pub mod model;
pub mod seed;
pub mod session;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::CoreError;
pub use filter::filter_by_site;
pub use session::{IdFactory, SiteSession};
pub use store::{DatasetHandle, SiteStore, datasets};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    // Tenant identity
    Site, SiteId, SiteTagged, SiteTheme,
    // Records
    AuditAction, AuditEntry, AuditSeverity, ComplianceRecord, ComplianceStatus, Patient,
    PatientStatus, StaffMember, StaffRole,
};

pub use analytics::{SiteKpis, compute_kpis, department_census};
pub use seed::{SeedSummary, seed_demo_data};
