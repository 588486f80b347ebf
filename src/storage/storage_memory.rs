use std::collections::HashMap;

use crate::error::StorageError;

use super::storage::Storage;

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
  items: HashMap<String, String>,
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_item(key: &str, value: &str) -> Self {
    let mut storage = Self::new();
    storage.items.insert(key.to_owned(), value.to_owned());
    return storage;
  }
}

impl Storage for MemoryStorage {
  fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
    Ok(self.items.get(key).cloned())
  }

  fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
    self.items.insert(key.to_owned(), value.to_owned());
    Ok(())
  }

  fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
    self.items.remove(key);
    Ok(())
  }
}

#[cfg(test)]
mod test {
  use super::{MemoryStorage, Storage};

  #[test]
  fn set_then_get() {
    let mut storage = MemoryStorage::new();
    assert_eq!(storage.get_item("k").unwrap(), None);

    storage.set_item("k", "v1").unwrap();
    storage.set_item("k", "v2").unwrap();
    assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v2"));

    storage.remove_item("k").unwrap();
    assert_eq!(storage.get_item("k").unwrap(), None);
  }
}
