// ── Store persistence ──
//
// Whole-store JSON snapshots: the registry, the active-site selection,
// every dataset slice, and the id counters travel together. This is the
// store's client-local durability; nothing else in the core touches disk.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::site_store::{DataKey, SiteStore};
use crate::error::CoreError;
use crate::model::{Site, SiteId};

const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    sites: Vec<Site>,
    active: Option<SiteId>,
    data: Vec<SnapshotSlice>,
    counters: Vec<SnapshotCounter>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotSlice {
    site: SiteId,
    dataset: String,
    value: Value,
}

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotCounter {
    site: SiteId,
    next: u64,
}

impl SiteStore {
    /// Write the whole store to `path` as one JSON document. Entries are
    /// sorted so consecutive saves of the same state produce identical files.
    pub fn save_to(&self, path: &Path) -> Result<(), CoreError> {
        let mut sites: Vec<Site> = self
            .sites
            .iter()
            .map(|entry| entry.value().as_ref().clone())
            .collect();
        sites.sort_by(|a, b| a.code.cmp(&b.code));

        let mut data: Vec<SnapshotSlice> = self
            .data
            .iter()
            .map(|entry| SnapshotSlice {
                site: entry.key().site.clone(),
                dataset: entry.key().dataset.clone(),
                value: entry.value().clone(),
            })
            .collect();
        data.sort_by(|a, b| {
            (a.site.as_str(), a.dataset.as_str()).cmp(&(b.site.as_str(), b.dataset.as_str()))
        });

        let mut counters: Vec<SnapshotCounter> = self
            .counters
            .iter()
            .map(|entry| SnapshotCounter {
                site: entry.key().clone(),
                next: *entry.value(),
            })
            .collect();
        counters.sort_by(|a, b| a.site.as_str().cmp(b.site.as_str()));

        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            sites,
            active: self.active_site().map(|site| site.id.clone()),
            data,
            counters,
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| CoreError::Persistence {
                path: path.display().to_string(),
                source,
            })?;
        }
        std::fs::write(path, json).map_err(|source| CoreError::Persistence {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "saved store snapshot");
        Ok(())
    }

    /// Load a store from a snapshot written by [`SiteStore::save_to`].
    pub fn load_from(path: &Path) -> Result<Self, CoreError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| CoreError::Persistence {
                path: path.display().to_string(),
                source,
            })?;
        let snapshot: Snapshot = serde_json::from_str(&contents)?;

        let store = Self::new();
        for site in snapshot.sites {
            store.sites.insert(site.id.clone(), Arc::new(site));
        }
        for slice in snapshot.data {
            store.data.insert(
                DataKey {
                    site: slice.site,
                    dataset: slice.dataset,
                },
                slice.value,
            );
        }
        for counter in snapshot.counters {
            store.counters.insert(counter.site, counter.next);
        }
        if let Some(active) = snapshot.active {
            if let Some(site) = store.sites.get(&active) {
                let site = Arc::clone(site.value());
                store.active.send_replace(Some(site));
            }
        }
        debug!(path = %path.display(), sites = store.site_count(), "loaded store snapshot");
        Ok(store)
    }

    /// Load from `path`, or start empty when the file does not exist or
    /// cannot be read.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::new();
        }
        match Self::load_from(path) {
            Ok(store) => store,
            Err(err) => {
                warn!(path = %path.display(), error = %err,
                    "could not load store snapshot; starting empty");
                Self::new()
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::datasets;
    use pretty_assertions::assert_eq;

    #[test]
    fn snapshot_round_trips_registry_data_and_counters() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let store = SiteStore::new();
        store
            .register_site(Site::new("NGH", "Northgate General"))
            .unwrap();
        store
            .register_site(Site::new("RVM", "Riverview Medical"))
            .unwrap();
        store.activate("NGH").unwrap();
        store
            .set_site_data(datasets::PATIENTS, &vec!["p1".to_owned()])
            .unwrap();
        store.generate_site_id("PT").unwrap();
        store.generate_site_id("PT").unwrap();

        store.save_to(&path).unwrap();
        let restored = SiteStore::load_from(&path).unwrap();

        assert_eq!(restored.site_count(), 2);
        assert_eq!(restored.active_site().unwrap().code, "NGH");
        let patients: Vec<String> = restored
            .site_data(datasets::PATIENTS)
            .unwrap()
            .unwrap();
        assert_eq!(patients, vec!["p1".to_owned()]);

        // Counter continues, no id reuse after restart.
        assert_eq!(restored.generate_site_id("PT").unwrap(), "PT-NGH-0003");
    }

    #[test]
    fn save_is_deterministic_for_the_same_state() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");

        let store = SiteStore::new();
        store
            .register_site(Site::new("NGH", "Northgate General"))
            .unwrap();
        store.activate("NGH").unwrap();
        store.set_site_data("one", &1).unwrap();
        store.set_site_data("two", &2).unwrap();

        store.save_to(&a).unwrap();
        store.save_to(&b).unwrap();
        assert_eq!(
            std::fs::read_to_string(&a).unwrap(),
            std::fs::read_to_string(&b).unwrap()
        );
    }

    #[test]
    fn load_or_default_handles_missing_and_corrupt_files() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.json");
        assert_eq!(SiteStore::load_or_default(&missing).site_count(), 0);

        let corrupt = dir.path().join("corrupt.json");
        std::fs::write(&corrupt, "not json at all").unwrap();
        assert_eq!(SiteStore::load_or_default(&corrupt).site_count(), 0);
    }
}
