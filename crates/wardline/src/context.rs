//! Store bootstrap shared by command handlers.
//!
//! Each invocation loads the persisted store snapshot, optionally applies
//! the `--site` switch, hands a session to the command, and saves the
//! snapshot back after mutations.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use wardline_core::{SiteSession, SiteStore};

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub struct AppContext {
    pub session: SiteSession,
    data_file: PathBuf,
}

impl AppContext {
    /// Load the store snapshot and bind a session to it.
    ///
    /// Precedence for the snapshot location: `--data-file` flag (or its
    /// env var), then the config file's `data_file`, then the platform
    /// data dir.
    pub fn load(global: &GlobalOpts) -> Result<Self, CliError> {
        let config = wardline_config::load_config_or_default();
        let data_file = global
            .data_file
            .clone()
            .unwrap_or_else(|| wardline_config::resolve_data_file(&config));
        debug!(path = %data_file.display(), "loading store snapshot");

        let store = Arc::new(SiteStore::load_or_default(&data_file));

        // A configured default site only applies while nothing is selected;
        // an unknown code is ignored rather than blocking every command.
        if store.active_site().is_none() {
            if let Some(code) = &config.default_site {
                if store.activate(code).is_err() {
                    debug!(code, "configured default site is not registered");
                }
            }
        }

        if let Some(site) = &global.site {
            store.activate(site)?;
        }

        Ok(Self {
            session: SiteSession::new(store),
            data_file,
        })
    }

    /// Persist the store back to its snapshot file.
    pub fn save(&self) -> Result<(), CliError> {
        self.session.store().save_to(&self.data_file)?;
        Ok(())
    }
}
