use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::AppResult;

/// Key-value slot scoped to a single client session.
///
/// Values are opaque strings; callers own their encoding. Nothing stored here
/// outlives the process.
pub trait SessionStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: String);
    fn remove_item(&self, key: &str);
    fn clear(&self);
}

#[derive(Default)]
pub struct MemorySessionStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: String) {
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value);
    }

    fn remove_item(&self, key: &str) {
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }

    fn clear(&self) {
        log::debug!("Clearing session storage");
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

/// Reads a JSON array kept under `key`. A missing slot is empty; an
/// unreadable one is logged and treated as empty.
pub fn load_collection<T: DeserializeOwned>(storage: &dyn SessionStorage, key: &str) -> Vec<T> {
    let Some(raw) = storage.get_item(key) else {
        return Vec::new();
    };

    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(err) => {
            log::error!("Discarding unreadable '{}' collection: {}", key, err);
            Vec::new()
        }
    }
}

pub fn save_collection<T: Serialize>(
    storage: &dyn SessionStorage,
    key: &str,
    items: &[T],
) -> AppResult<()> {
    let raw = serde_json::to_string(items)?;
    storage.set_item(key, raw);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MemorySessionStorage>();
    }

    #[test]
    fn missing_key_reads_as_none() {
        let storage = MemorySessionStorage::new();
        assert!(storage.get_item("quizzes").is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn set_item_overwrites_previous_value() {
        let storage = MemorySessionStorage::new();
        storage.set_item("quizzes", "[]".to_string());
        storage.set_item("quizzes", "[1]".to_string());

        assert_eq!(storage.get_item("quizzes").as_deref(), Some("[1]"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn remove_and_clear_drop_values() {
        let storage = MemorySessionStorage::new();
        storage.set_item("a", "1".to_string());
        storage.set_item("b", "2".to_string());

        storage.remove_item("a");
        assert!(storage.get_item("a").is_none());
        assert_eq!(storage.len(), 1);

        storage.clear();
        assert!(storage.is_empty());
    }

    #[test]
    fn collections_round_trip_through_the_slot() {
        let storage = MemorySessionStorage::new();
        save_collection(&storage, "numbers", &[3, 1, 2]).unwrap();

        let loaded: Vec<u32> = load_collection(&storage, "numbers");

        assert_eq!(loaded, vec![3, 1, 2]);
    }

    #[test]
    fn unreadable_collection_loads_empty() {
        let storage = MemorySessionStorage::new();
        storage.set_item("numbers", "{oops".to_string());

        let loaded: Vec<u32> = load_collection(&storage, "numbers");

        assert!(loaded.is_empty());
    }
}
