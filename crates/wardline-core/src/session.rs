// ── Site session ──
//
// The handle consumers hold instead of reading ambient "current site"
// state: every accessor, id factory, and filter goes through an explicit
// session, so tenant scoping is visible at each call site.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::CoreError;
use crate::filter;
use crate::model::{Site, SiteTagged};
use crate::store::{DatasetHandle, SiteStore};

/// Cheaply cloneable entry point for screens and commands.
#[derive(Clone)]
pub struct SiteSession {
    store: Arc<SiteStore>,
}

impl SiteSession {
    pub fn new(store: Arc<SiteStore>) -> Self {
        Self { store }
    }

    /// The shared store behind this session.
    pub fn store(&self) -> &Arc<SiteStore> {
        &self.store
    }

    /// The currently active site, if any.
    pub fn active_site(&self) -> Option<Arc<Site>> {
        self.store.active_site()
    }

    /// Bind to the active site's slice of `dataset`, with `default` as
    /// the value until the store resolves (and whenever the slice was
    /// never written).
    pub fn dataset<T>(&self, dataset: impl Into<String>, default: T) -> DatasetHandle<T>
    where
        T: Clone + Serialize + DeserializeOwned,
    {
        DatasetHandle::new(Arc::clone(&self.store), dataset.into(), default)
    }

    /// An id factory namespaced to whichever site is active at each call.
    pub fn id_factory(&self, prefix: impl Into<String>) -> IdFactory {
        IdFactory {
            store: Arc::clone(&self.store),
            prefix: prefix.into(),
        }
    }

    /// Partition `items` down to the active site's records, fail-closed.
    pub fn filter_by_site<'a, T: SiteTagged>(&self, items: &'a [T]) -> Vec<&'a T> {
        let active = self.active_site();
        filter::filter_by_site(active.as_deref().map(|site| &site.id), items)
    }
}

/// Generator for site-namespaced record identifiers.
///
/// Each call asks the store for the next `{PREFIX}-{CODE}-{NNNN}` id under
/// the currently active site; sequences never repeat within a site.
pub struct IdFactory {
    store: Arc<SiteStore>,
    prefix: String,
}

impl IdFactory {
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The next identifier in the active site's namespace.
    pub fn next_id(&self) -> Result<String, CoreError> {
        self.store.generate_site_id(&self.prefix)
    }
}
