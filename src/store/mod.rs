mod conflict;
mod error;
mod mutations;
mod queries;

pub use error::StoreError;

use dashmap::DashMap;
use tracing::warn;

use crate::config::StoreConfig;
use crate::model::Schedule;

/// Per-resource booking schedules over a fixed set of resources.
///
/// Each schedule sits behind its own DashMap entry lock, so a `reserve` holds
/// exclusive access to one resource while it checks for overlap and inserts.
/// Other resources stay available to concurrent callers.
pub struct ReservationStore {
    /// Configured identifiers in construction order, deduplicated.
    resources: Vec<String>,
    schedules: DashMap<String, Schedule>,
}

impl ReservationStore {
    /// Build a store with an empty schedule per resource.
    ///
    /// Duplicate identifiers are merged: the first occurrence wins and later
    /// ones are ignored.
    pub fn new<I, S>(resources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let schedules: DashMap<String, Schedule> = DashMap::new();
        let mut names = Vec::new();
        for name in resources {
            let name = name.into();
            if schedules.contains_key(&name) {
                warn!(resource = %name, "duplicate resource identifier ignored");
                continue;
            }
            schedules.insert(name.clone(), Schedule::new());
            names.push(name);
        }
        Self {
            resources: names,
            schedules,
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.resources.iter().cloned())
    }
}
