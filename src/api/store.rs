use std::sync::RwLock;

use super::coords::Coordinates;
use super::models::{Location, NewLocation, SeedLocation};

/// In-process catalog store. Stands in for the external data store; no
/// persistence across restarts.
pub struct CatalogStore {
    inner: RwLock<Inner>,
}

struct Inner {
    locations: Vec<Location>,
    next_id: u64,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                locations: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Load seed records, dropping any whose coordinates are out of range.
    /// Returns the number inserted.
    pub fn seed(&self, entries: Vec<SeedLocation>) -> usize {
        let mut inserted = 0;
        for entry in entries {
            let Some(coordinates) = Coordinates::new(entry.latitude, entry.longitude) else {
                log::warn!("Skipping seed record '{}': coordinates out of range", entry.name);
                continue;
            };
            self.insert(NewLocation {
                name: entry.name,
                state: entry.state,
                coordinates,
                elevation: entry.elevation,
                description: entry.description,
            });
            inserted += 1;
        }
        inserted
    }

    pub(super) fn snapshot(&self) -> Vec<Location> {
        self.inner.read().expect("store lock poisoned").locations.clone()
    }

    pub(super) fn get(&self, id: u64) -> Option<Location> {
        let inner = self.inner.read().expect("store lock poisoned");
        inner.locations.iter().find(|l| l.id == id).cloned()
    }

    pub(super) fn insert(&self, new: NewLocation) -> Location {
        let mut inner = self.inner.write().expect("store lock poisoned");
        let id = inner.next_id;
        inner.next_id += 1;
        let location = Location {
            id,
            name: new.name,
            state: new.state,
            latitude: new.coordinates.latitude,
            longitude: new.coordinates.longitude,
            elevation: new.elevation,
            description: new.description,
        };
        inner.locations.push(location.clone());
        location
    }

    pub(super) fn update(&self, id: u64, new: NewLocation) -> Option<Location> {
        let mut inner = self.inner.write().expect("store lock poisoned");
        let location = inner.locations.iter_mut().find(|l| l.id == id)?;
        location.name = new.name;
        location.state = new.state;
        location.latitude = new.coordinates.latitude;
        location.longitude = new.coordinates.longitude;
        location.elevation = new.elevation;
        location.description = new.description;
        Some(location.clone())
    }

    pub(super) fn remove(&self, id: u64) -> bool {
        let mut inner = self.inner.write().expect("store lock poisoned");
        let before = inner.locations.len();
        inner.locations.retain(|l| l.id != id);
        inner.locations.len() != before
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a JSON array of seed records and load it into the store.
pub fn seed_from_file(store: &CatalogStore, path: &str) -> std::io::Result<usize> {
    let raw = std::fs::read_to_string(path)?;
    let entries: Vec<SeedLocation> = serde_json::from_str(&raw)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    Ok(store.seed(entries))
}
