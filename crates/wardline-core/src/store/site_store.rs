// ── Site context store ──
//
// Thread-safe storage for the site registry, the active-site selection,
// and every site's dataset slices. Active-site changes are broadcast to
// accessor handles via a `watch` channel.

use std::sync::Arc;

use dashmap::DashMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::watch;
use tracing::debug;

use crate::error::CoreError;
use crate::model::{Site, SiteId};

/// Canonical dataset keys for the built-in screens.
pub mod datasets {
    pub const PATIENTS: &str = "patients";
    pub const STAFF: &str = "staff";
    pub const AUDIT: &str = "audit";
    pub const COMPLIANCE: &str = "compliance";
}

/// Composite key for one site's slice of one dataset.
///
/// Slices are only ever addressed by the (site, dataset) pair. Keying on
/// the dataset name alone would let data bleed across tenants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct DataKey {
    pub(crate) site: SiteId,
    pub(crate) dataset: String,
}

impl DataKey {
    fn new(site: &SiteId, dataset: &str) -> Self {
        Self {
            site: site.clone(),
            dataset: dataset.to_owned(),
        }
    }
}

/// Process-wide store for sites and their scoped data.
///
/// All reads are concurrent-safe (`DashMap`); the active-site selection
/// lives behind a `watch` channel so accessor handles observe switches.
/// Writes follow a last-write-wins policy per (site, dataset) pair.
pub struct SiteStore {
    /// Registered sites by id.
    pub(crate) sites: DashMap<SiteId, Arc<Site>>,

    /// (site, dataset) -> stored JSON slice.
    pub(crate) data: DashMap<DataKey, Value>,

    /// Per-site monotonic counters backing generated record ids.
    pub(crate) counters: DashMap<SiteId, u64>,

    /// Currently active site, broadcast to accessor handles.
    pub(crate) active: watch::Sender<Option<Arc<Site>>>,
}

impl SiteStore {
    pub fn new() -> Self {
        let (active, _) = watch::channel(None);

        Self {
            sites: DashMap::new(),
            data: DashMap::new(),
            counters: DashMap::new(),
            active,
        }
    }

    // ── Site registry ────────────────────────────────────────────────

    /// Register a new site. Codes must be unique across the registry.
    pub fn register_site(&self, site: Site) -> Result<Arc<Site>, CoreError> {
        if self
            .sites
            .iter()
            .any(|entry| entry.value().code.eq_ignore_ascii_case(&site.code))
        {
            return Err(CoreError::DuplicateSite { code: site.code });
        }

        let site = Arc::new(site);
        debug!(code = %site.code, id = %site.id, "registering site");
        self.sites.insert(site.id.clone(), Arc::clone(&site));
        Ok(site)
    }

    /// Look up a site by id or by code (case-insensitive).
    pub fn find_site(&self, identifier: &str) -> Option<Arc<Site>> {
        if let Some(site) = self.sites.get(&SiteId::from(identifier)) {
            return Some(Arc::clone(site.value()));
        }
        self.sites
            .iter()
            .find(|entry| entry.value().code.eq_ignore_ascii_case(identifier))
            .map(|entry| Arc::clone(entry.value()))
    }

    /// All registered sites, ordered by code for stable listings.
    pub fn sites_snapshot(&self) -> Vec<Arc<Site>> {
        let mut sites: Vec<Arc<Site>> = self
            .sites
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        sites.sort_by(|a, b| a.code.cmp(&b.code));
        sites
    }

    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    /// Remove a site along with all of its dataset slices and counters.
    /// Deactivates first if the site is currently active.
    pub fn remove_site(&self, identifier: &str) -> Result<Arc<Site>, CoreError> {
        let site = self
            .find_site(identifier)
            .ok_or_else(|| CoreError::SiteNotFound {
                identifier: identifier.to_owned(),
            })?;

        if self.active_site().is_some_and(|active| active.id == site.id) {
            self.deactivate();
        }

        self.sites.remove(&site.id);
        self.data.retain(|key, _| key.site != site.id);
        self.counters.remove(&site.id);
        debug!(code = %site.code, "removed site and its data");
        Ok(site)
    }

    // ── Active site ──────────────────────────────────────────────────

    /// The currently active site, if any.
    pub fn active_site(&self) -> Option<Arc<Site>> {
        self.active.borrow().clone()
    }

    /// Make a site active by id or code.
    pub fn activate(&self, identifier: &str) -> Result<Arc<Site>, CoreError> {
        let site = self
            .find_site(identifier)
            .ok_or_else(|| CoreError::SiteNotFound {
                identifier: identifier.to_owned(),
            })?;

        debug!(code = %site.code, "activating site");
        self.active.send_replace(Some(Arc::clone(&site)));
        Ok(site)
    }

    /// Clear the active-site selection.
    pub fn deactivate(&self) {
        self.active.send_replace(None);
    }

    /// Subscribe to active-site changes.
    pub fn subscribe_active(&self) -> watch::Receiver<Option<Arc<Site>>> {
        self.active.subscribe()
    }

    // ── Site-scoped data ─────────────────────────────────────────────

    /// Read the active site's slice of `dataset`. `Ok(None)` means the
    /// slice was never written -- callers substitute their own default.
    pub fn site_data<T: DeserializeOwned>(&self, dataset: &str) -> Result<Option<T>, CoreError> {
        let site = self.active_site().ok_or(CoreError::NoActiveSite)?;
        self.data_for(&site.id, dataset)
    }

    /// Read a specific site's slice of `dataset`.
    pub(crate) fn data_for<T: DeserializeOwned>(
        &self,
        site: &SiteId,
        dataset: &str,
    ) -> Result<Option<T>, CoreError> {
        validate_dataset_key(dataset)?;
        match self.data.get(&DataKey::new(site, dataset)) {
            Some(value) => Ok(Some(serde_json::from_value(value.value().clone())?)),
            None => Ok(None),
        }
    }

    /// Write the active site's slice of `dataset`, replacing any previous
    /// value (last-write-wins). Returns the site written under.
    ///
    /// With no active site this is an explicit rejection: no slice of any
    /// site is touched.
    pub fn set_site_data<T: Serialize>(
        &self,
        dataset: &str,
        value: &T,
    ) -> Result<Arc<Site>, CoreError> {
        validate_dataset_key(dataset)?;
        let site = self.active_site().ok_or(CoreError::NoActiveSite)?;
        let json = serde_json::to_value(value)?;
        debug!(code = %site.code, dataset, "writing site dataset");
        self.data.insert(DataKey::new(&site.id, dataset), json);
        Ok(site)
    }

    /// Whether the active site has ever written `dataset`.
    ///
    /// Distinguishes "never initialized" from "explicitly set to the
    /// default"; false when no site is active.
    pub fn has_site_data(&self, dataset: &str) -> bool {
        self.active_site()
            .is_some_and(|site| self.data.contains_key(&DataKey::new(&site.id, dataset)))
    }

    // ── Site-scoped id generation ────────────────────────────────────

    /// Produce the next identifier in the active site's namespace:
    /// `{PREFIX}-{CODE}-{NNNN}`. Sequences are per-site, so the same
    /// slot number recurring under different site codes is expected.
    pub fn generate_site_id(&self, prefix: &str) -> Result<String, CoreError> {
        let site = self.active_site().ok_or(CoreError::NoActiveSite)?;
        let mut counter = self.counters.entry(site.id.clone()).or_insert(0);
        *counter += 1;
        Ok(format!("{prefix}-{}-{:04}", site.code, *counter))
    }
}

impl Default for SiteStore {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_dataset_key(dataset: &str) -> Result<(), CoreError> {
    if dataset.is_empty() {
        return Err(CoreError::InvalidDatasetKey);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store_with_sites() -> SiteStore {
        let store = SiteStore::new();
        store
            .register_site(Site::new("NGH", "Northgate General"))
            .unwrap();
        store
            .register_site(Site::new("RVM", "Riverview Medical"))
            .unwrap();
        store
    }

    #[test]
    fn register_rejects_duplicate_codes() {
        let store = store_with_sites();
        let err = store
            .register_site(Site::new("ngh", "Northgate Clone"))
            .unwrap_err();
        assert!(matches!(err, CoreError::DuplicateSite { .. }));
    }

    #[test]
    fn find_site_matches_id_and_code() {
        let store = store_with_sites();
        let by_code = store.find_site("ngh").unwrap();
        let by_id = store.find_site(by_code.id.as_str()).unwrap();
        assert_eq!(by_code.code, by_id.code);
    }

    #[test]
    fn activate_unknown_site_fails() {
        let store = store_with_sites();
        let err = store.activate("nope").unwrap_err();
        assert!(matches!(err, CoreError::SiteNotFound { .. }));
    }

    #[test]
    fn writes_are_isolated_between_sites() {
        let store = store_with_sites();

        store.activate("NGH").unwrap();
        store
            .set_site_data(datasets::PATIENTS, &vec!["a".to_owned()])
            .unwrap();

        store.activate("RVM").unwrap();
        let slice: Option<Vec<String>> = store.site_data(datasets::PATIENTS).unwrap();
        assert_eq!(slice, None, "RVM must never see NGH's slice");

        store.activate("NGH").unwrap();
        let slice: Option<Vec<String>> = store.site_data(datasets::PATIENTS).unwrap();
        assert_eq!(slice, Some(vec!["a".to_owned()]));
    }

    #[test]
    fn unwritten_dataset_reads_as_none() {
        let store = store_with_sites();
        store.activate("NGH").unwrap();
        let slice: Option<Vec<String>> = store.site_data("never-written").unwrap();
        assert_eq!(slice, None);
    }

    #[test]
    fn set_then_get_round_trips_unchanged() {
        let store = store_with_sites();
        store.activate("NGH").unwrap();

        let value = vec!["x".to_owned(), "y".to_owned(), "z".to_owned()];
        store.set_site_data("letters", &value).unwrap();
        let read: Vec<String> = store.site_data("letters").unwrap().unwrap();
        assert_eq!(read, value);
    }

    #[test]
    fn write_without_active_site_is_rejected_and_harmless() {
        let store = store_with_sites();

        let err = store.set_site_data("letters", &vec!["a"]).unwrap_err();
        assert!(matches!(err, CoreError::NoActiveSite));

        // No site's slice may have been touched.
        store.activate("NGH").unwrap();
        let ngh: Option<Vec<String>> = store.site_data("letters").unwrap();
        assert_eq!(ngh, None);
        store.activate("RVM").unwrap();
        let rvm: Option<Vec<String>> = store.site_data("letters").unwrap();
        assert_eq!(rvm, None);
    }

    #[test]
    fn empty_dataset_key_is_rejected() {
        let store = store_with_sites();
        store.activate("NGH").unwrap();
        let err = store.set_site_data("", &1).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDatasetKey));
    }

    #[test]
    fn has_site_data_distinguishes_written_from_absent() {
        let store = store_with_sites();
        assert!(!store.has_site_data("letters"), "no active site fails closed");

        store.activate("NGH").unwrap();
        assert!(!store.has_site_data("letters"));

        store.set_site_data("letters", &Vec::<String>::new()).unwrap();
        assert!(
            store.has_site_data("letters"),
            "an explicitly written empty slice still counts as written"
        );
    }

    #[test]
    fn generated_ids_sequence_per_site() {
        let store = store_with_sites();

        store.activate("NGH").unwrap();
        assert_eq!(store.generate_site_id("PT").unwrap(), "PT-NGH-0001");
        assert_eq!(store.generate_site_id("PT").unwrap(), "PT-NGH-0002");

        // A different site restarts its own sequence; the shared slot
        // number with a different code is expected.
        store.activate("RVM").unwrap();
        assert_eq!(store.generate_site_id("PT").unwrap(), "PT-RVM-0001");

        store.activate("NGH").unwrap();
        assert_eq!(store.generate_site_id("PT").unwrap(), "PT-NGH-0003");
    }

    #[test]
    fn generate_id_without_active_site_fails() {
        let store = store_with_sites();
        assert!(matches!(
            store.generate_site_id("PT").unwrap_err(),
            CoreError::NoActiveSite
        ));
    }

    #[test]
    fn remove_site_drops_its_slices_and_counter() {
        let store = store_with_sites();
        store.activate("NGH").unwrap();
        store.set_site_data("letters", &vec!["a"]).unwrap();
        store.generate_site_id("PT").unwrap();

        store.remove_site("NGH").unwrap();
        assert!(store.active_site().is_none(), "removal deactivates");
        assert!(store.find_site("NGH").is_none());
        assert!(store.data.is_empty());
        assert!(store.counters.is_empty());

        // RVM is untouched.
        assert!(store.find_site("RVM").is_some());
    }

    #[test]
    fn sites_snapshot_orders_by_code() {
        let store = store_with_sites();
        store
            .register_site(Site::new("AAA", "Alpha Hospital"))
            .unwrap();
        let snapshot = store.sites_snapshot();
        let codes: Vec<&str> = snapshot.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, vec!["AAA", "NGH", "RVM"]);
    }
}
