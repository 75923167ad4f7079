use crate::errors::StorageError;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the persisted slot inside the data directory.
pub const SLOT_NAME: &str = "favorites.json";

/// Favorites Store: a single JSON slot holding the favorited post ids.
/// Stateless; the in-memory set lives with the application state and is
/// passed in and out of `load`/`save`.
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(SLOT_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted slot. An absent slot is an empty set, not an
    /// error; an unreadable or unparsable slot is.
    pub fn load(&self) -> Result<BTreeSet<u64>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeSet::new());
        }

        let raw = fs::read_to_string(&self.path)?;
        let ids: Vec<u64> =
            serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt(e.to_string()))?;

        Ok(ids.into_iter().collect())
    }

    /// Overwrites the slot with `set`. The content lands in a temp file
    /// first and is renamed over the slot, so a concurrent `load` never
    /// observes a partial write. Stale ids are persisted as-is, never pruned.
    /// The temp path is fixed, so the slot admits one writer at a time; the
    /// event loop funnels all saves through a single writer task.
    pub fn save(&self, set: &BTreeSet<u64>) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let ids: Vec<u64> = set.iter().copied().collect();
        let raw = serde_json::to_string(&ids).map_err(|e| StorageError::Corrupt(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;

        log::info!("Saved {} favorites to {:?}", ids.len(), self.path);
        Ok(())
    }
}

/// Pure toggle: returns `set` without `id` if it was present, with it
/// otherwise.
pub fn toggle(mut set: BTreeSet<u64>, id: u64) -> BTreeSet<u64> {
    if !set.remove(&id) {
        set.insert(id);
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_toggle_is_self_inverse() {
        let set: BTreeSet<u64> = [1, 2, 3].into_iter().collect();
        for id in [2u64, 99] {
            assert_eq!(toggle(toggle(set.clone(), id), id), set);
        }
    }

    #[test]
    fn test_toggle_flips_membership() {
        let set: BTreeSet<u64> = [1, 2].into_iter().collect();
        assert!(!toggle(set.clone(), 2).contains(&2));
        assert!(toggle(set.clone(), 3).contains(&3));
    }

    #[test]
    fn test_load_absent_slot_is_empty_not_an_error() {
        let dir = TempDir::new().unwrap();
        let store = FavoritesStore::new(dir.path());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = FavoritesStore::new(dir.path());
        let set: BTreeSet<u64> = [5, 1, 12].into_iter().collect();

        store.save(&set).unwrap();
        assert_eq!(store.load().unwrap(), set);
    }

    #[test]
    fn test_save_creates_a_missing_data_dir() {
        let dir = TempDir::new().unwrap();
        let store = FavoritesStore::new(dir.path().join("nested"));

        store.save(&BTreeSet::from([7])).unwrap();
        assert_eq!(store.load().unwrap(), BTreeSet::from([7]));
    }

    #[test]
    fn test_load_corrupt_slot_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = FavoritesStore::new(dir.path());
        fs::write(store.path(), "{not an array").unwrap();

        match store.load() {
            Err(StorageError::Corrupt(_)) => {}
            other => panic!("expected Corrupt, got {other:?}"),
        }
    }

    #[test]
    fn test_save_overwrites_the_previous_slot() {
        let dir = TempDir::new().unwrap();
        let store = FavoritesStore::new(dir.path());

        store.save(&BTreeSet::from([1, 2])).unwrap();
        store.save(&BTreeSet::from([2])).unwrap();
        assert_eq!(store.load().unwrap(), BTreeSet::from([2]));
    }
}
