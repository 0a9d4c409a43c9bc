// ── Site-scoped dataset accessor ──
//
// A DatasetHandle is one consumer's live binding to the active site's
// slice of one dataset: the screen-side counterpart of the store. It
// re-resolves whenever it observes an active-site change and writes
// through to the store on `set`.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::watch;
use tracing::warn;

use super::site_store::SiteStore;
use crate::error::CoreError;
use crate::model::Site;

/// Per-consumer binding of `(dataset, default)` to the active site's slice.
///
/// The handle keeps a local copy of the slice and only re-reads the store
/// when the active site changes -- two handles on the same pair observe
/// each other's writes at their next site switch, not before
/// (last-write-wins in the store).
pub struct DatasetHandle<T> {
    store: Arc<SiteStore>,
    dataset: String,
    default: T,
    active_rx: watch::Receiver<Option<Arc<Site>>>,
    value: T,
    loading: bool,
}

impl<T> DatasetHandle<T>
where
    T: Clone + Serialize + DeserializeOwned,
{
    pub(crate) fn new(store: Arc<SiteStore>, dataset: String, default: T) -> Self {
        let mut handle = Self {
            active_rx: store.subscribe_active(),
            value: default.clone(),
            default,
            dataset,
            store,
            loading: true,
        };
        handle.resolve_current();
        handle
    }

    /// The dataset key this handle is bound to.
    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    /// The current value: the stored slice once resolved, the default
    /// before that (and whenever the slice was never written).
    pub fn data(&mut self) -> &T {
        self.sync();
        &self.value
    }

    /// True until the first resolution completes for the current site.
    /// Stays true while no site has ever been active -- callers surface
    /// that as a distinct "no site selected" state rather than showing
    /// the default as real data.
    pub fn loading(&mut self) -> bool {
        self.sync();
        self.loading
    }

    /// The site this handle currently resolves against.
    pub fn site(&mut self) -> Option<Arc<Site>> {
        self.sync();
        self.active_rx.borrow().clone()
    }

    /// Replace the active site's slice: the local value and the store are
    /// updated together, so callers never observe them diverging.
    ///
    /// With no active site the write is rejected and nothing -- local or
    /// stored, for any site -- changes.
    pub fn set(&mut self, value: T) -> Result<(), CoreError> {
        // Converge to the current site first so the write can never land
        // under a site this handle has not yet observed.
        self.sync();
        self.store.set_site_data(&self.dataset, &value)?;
        self.value = value;
        self.loading = false;
        Ok(())
    }

    /// Re-resolve if the active site changed since the last access.
    fn sync(&mut self) {
        if self.active_rx.has_changed().unwrap_or(false) {
            self.resolve_current();
        }
    }

    /// Query the store for the current site's slice. No active site means
    /// no resolution: the last value stays visible.
    fn resolve_current(&mut self) {
        let site = self.active_rx.borrow_and_update().clone();
        let Some(site) = site else { return };

        self.value = match self.store.data_for::<T>(&site.id, &self.dataset) {
            Ok(Some(value)) => value,
            Ok(None) => self.default.clone(),
            Err(err) => {
                // Contain decode failures at the accessor boundary; the
                // stored slice stays as-is for other consumers.
                warn!(dataset = %self.dataset, code = %site.code, error = %err,
                    "stored slice did not decode; falling back to default");
                self.default.clone()
            }
        };
        self.loading = false;
    }
}
