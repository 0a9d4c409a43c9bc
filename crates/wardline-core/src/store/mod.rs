// ── Site-scoped store ──
//
// Tenant-partitioned storage with push-based active-site notification.

mod dataset;
mod site_store;
mod snapshot;

pub use dataset::DatasetHandle;
pub use site_store::{SiteStore, datasets};
