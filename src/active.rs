use tracing::{debug, info, warn};

use crate::{city, City, Error, Persistence, Result, MAX_CLOCKS};

/// Ordered, bounded selection of shown cities. Insertion order is display order.
///
/// Every entry comes from the catalog, no entry repeats, and there are never
/// more than [`MAX_CLOCKS`] of them. Each successful change is persisted.
#[derive(Default)]
pub struct ActiveSet {
    cities: Vec<&'static City>,
    persistence: Persistence,
}

impl ActiveSet {
    /// Empty selection backed by `persistence`. See [`ActiveSet::restore`].
    pub fn new(persistence: Persistence) -> Self {
        Self {
            cities: Vec::with_capacity(MAX_CLOCKS),
            persistence,
        }
    }

    /// Replace the selection with the stored one, or the defaults when
    /// nothing usable is stored.
    pub fn restore(&mut self) {
        let source = match self.persistence.load() {
            Some(stored) => {
                debug!(count = stored.len(), "Restoring stored cities");
                stored
            }
            None => {
                info!("No stored cities, using defaults");
                city::defaults()
            }
        };

        self.cities.clear();
        for city in source {
            if self.cities.contains(&city) {
                continue;
            }
            if self.cities.len() == MAX_CLOCKS {
                warn!(dropped = city.id, "Stored selection exceeds {MAX_CLOCKS} cities");
                continue;
            }
            self.cities.push(city);
        }
    }

    pub fn add(&mut self, id: &str) -> Result<&'static City> {
        if self.cities.len() >= MAX_CLOCKS {
            return Err(Error::CapacityExceeded);
        }
        if self.contains(id) {
            return Err(Error::DuplicateCity(id.to_string()));
        }
        let city = city::by_id(id).ok_or_else(|| Error::UnknownCity(id.to_string()))?;

        self.cities.push(city);
        self.persistence.save(&self.cities);
        Ok(city)
    }

    pub fn remove(&mut self, id: &str) -> Result<&'static City> {
        let index = self
            .cities
            .iter()
            .position(|city| city.id == id)
            .ok_or_else(|| Error::NotActive(id.to_string()))?;

        let city = self.cities.remove(index);
        self.persistence.save(&self.cities);
        Ok(city)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.cities.iter().any(|city| city.id == id)
    }

    pub fn cities(&self) -> &[&'static City] {
        &self.cities
    }

    pub fn list_active(&self) -> Vec<&'static str> {
        self.cities.iter().map(|city| city.id).collect()
    }

    pub fn list_available(&self) -> Vec<&'static City> {
        city::available(&self.list_active())
    }

    pub fn can_add(&self) -> bool {
        self.cities.len() < MAX_CLOCKS
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
