//! Durable key-value storage for the selected cities.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tracing::{debug, warn};

use crate::{city, City, Result};

/// Key the city selection is stored under.
pub const STORAGE_KEY: &str = "world-clocks-cities";

pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(key), value)?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn with(key: &str, value: &str) -> Self {
        let mut storage = Self::default();
        storage.entries.insert(key.to_string(), value.to_string());
        storage
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads and writes the city selection as a JSON array of ids.
///
/// Storage problems never escape: a failed write is skipped and a failed or
/// corrupt read looks like nothing was stored.
pub struct Persistence {
    storage: Box<dyn Storage>,
}

impl Default for Persistence {
    fn default() -> Self {
        Self::new(MemoryStorage::default())
    }
}

impl Persistence {
    pub fn new(storage: impl Storage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
        }
    }

    pub fn save(&mut self, cities: &[&'static City]) {
        let ids: Vec<&str> = cities.iter().map(|city| city.id).collect();
        if let Err(e) = self.try_save(&ids) {
            warn!(error = %e, "Failed to save city selection");
        }
    }

    fn try_save(&mut self, ids: &[&str]) -> Result<()> {
        let value = serde_json::to_string(ids)?;
        self.storage.set(STORAGE_KEY, &value)?;
        debug!(?ids, "Saved city selection");
        Ok(())
    }

    /// Stored cities that still exist in the catalog, in stored order.
    ///
    /// `None` when nothing usable is stored. An empty list is a valid result.
    pub fn load(&self) -> Option<Vec<&'static City>> {
        match self.try_load() {
            Ok(cities) => cities,
            Err(e) => {
                warn!(error = %e, "Failed to load city selection");
                None
            }
        }
    }

    fn try_load(&self) -> Result<Option<Vec<&'static City>>> {
        let Some(raw) = self.storage.get(STORAGE_KEY)? else {
            return Ok(None);
        };
        let entries: Vec<Value> = serde_json::from_str(&raw)?;
        let cities = entries
            .iter()
            .filter_map(Value::as_str)
            .filter_map(|id| {
                let city = city::by_id(id);
                if city.is_none() {
                    debug!(id, "Dropping stored city missing from catalog");
                }
                city
            })
            .collect();
        Ok(Some(cities))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    struct Broken;

    impl Storage for Broken {
        fn get(&self, _: &str) -> Result<Option<String>> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "storage disabled").into())
        }

        fn set(&mut self, _: &str, _: &str) -> Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "quota exceeded").into())
        }
    }

    fn ids(cities: &[&City]) -> Vec<&'static str> {
        cities.iter().map(|c| c.id).collect()
    }

    fn stored(value: &str) -> Persistence {
        Persistence::new(MemoryStorage::with(STORAGE_KEY, value))
    }

    #[test]
    fn round_trip() {
        let cities: Vec<_> = ["moscow", "tokyo", "sao-paulo"]
            .iter()
            .filter_map(|id| city::by_id(id))
            .collect();
        let mut persistence = Persistence::default();
        persistence.save(&cities);
        assert_eq!(persistence.load(), Some(cities));
    }

    #[test]
    fn writes_json_array() {
        let mut storage = MemoryStorage::default();
        let value = serde_json::to_string(&["london", "paris"]).unwrap();
        storage.set(STORAGE_KEY, &value).unwrap();
        assert_eq!(
            storage.get(STORAGE_KEY).unwrap().as_deref(),
            Some(r#"["london","paris"]"#)
        );
    }

    #[test]
    fn absent_is_none() {
        assert_eq!(Persistence::default().load(), None);
    }

    #[test]
    fn malformed_is_none() {
        assert_eq!(stored("not json").load(), None);
        assert_eq!(stored("").load(), None);
        assert_eq!(stored(r#"{"cities":["london"]}"#).load(), None);
        assert_eq!(stored(r#""london""#).load(), None);
        assert_eq!(stored("null").load(), None);
    }

    #[test]
    fn drops_unknown_entries() {
        let cities = stored(r#"["atlantis","london",42,null,"tokyo"]"#)
            .load()
            .unwrap();
        assert_eq!(ids(&cities), ["london", "tokyo"]);
    }

    #[test]
    fn empty_list_is_kept() {
        assert_eq!(stored("[]").load(), Some(vec![]));
        assert_eq!(stored(r#"["atlantis"]"#).load(), Some(vec![]));
    }

    #[test]
    fn broken_storage_degrades() {
        let mut persistence = Persistence::new(Broken);
        persistence.save(&city::defaults());
        assert_eq!(persistence.load(), None);
    }

    #[test]
    fn corrupt_value_maps_to_error() {
        let err = serde_json::from_str::<Vec<Value>>("{").unwrap_err();
        assert!(matches!(Error::from(err), Error::StorageCorrupt(_)));
    }
}
