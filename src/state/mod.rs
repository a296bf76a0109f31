//! Shared application state handed to every request handler.

use std::sync::Arc;

use crate::{config::AppConfig, dao::teams::TeamStore, design::profile::DesignProfile};

/// Cheaply clonable handle on the application state.
pub type SharedState = Arc<AppState>;

/// Central application state. Everything here is read-only: the dataset is
/// re-read from disk on every request and the profile is a static document,
/// so requests share nothing mutable.
pub struct AppState {
    store: TeamStore,
    profile: DesignProfile,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be
    /// cloned cheaply.
    pub fn new(config: &AppConfig) -> SharedState {
        Arc::new(Self {
            store: TeamStore::new(config.data_path()),
            profile: DesignProfile::new(),
        })
    }

    /// Handle on the team dataset.
    pub fn store(&self) -> &TeamStore {
        &self.store
    }

    /// The static style-profile document.
    pub fn profile(&self) -> &DesignProfile {
        &self.profile
    }
}
