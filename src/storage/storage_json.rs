use std::{
  fs::{self, File},
  io::{ErrorKind, Write},
  path::{Path, PathBuf},
};

use log::debug;

use crate::error::StorageError;

use super::storage::Storage;

/// Keeps every key in its own `<key>.json` file inside a data folder.
pub struct JsonFileStorage {
  folder: PathBuf,
}

impl JsonFileStorage {
  pub fn new<P: AsRef<Path>>(database_folder: P) -> Self {
    Self {
      folder: database_folder.as_ref().to_path_buf(),
    }
  }

  pub fn item_path(&self, key: &str) -> PathBuf {
    self.folder.join(format!("{}.json", key))
  }
}

impl Storage for JsonFileStorage {
  fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
    let path = self.item_path(key);
    match fs::read_to_string(&path) {
      Ok(value) => {
        debug!("read {} bytes from: {}", value.len(), path.display());
        Ok(Some(value))
      }
      Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
      Err(err) => Err(err.into()),
    }
  }

  fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
    fs::create_dir_all(&self.folder)?;

    let path = self.item_path(key);
    let temp_path = path.with_extension("tmp");
    {
      let mut file = File::create(&temp_path)?;
      file.write_all(value.as_bytes())?;
      file.sync_all()?;
    }
    fs::rename(&temp_path, &path)?;

    debug!("wrote {} bytes to: {}", value.len(), path.display());
    Ok(())
  }

  fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
    match fs::remove_file(self.item_path(key)) {
      Ok(()) => Ok(()),
      Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
      Err(err) => Err(err.into()),
    }
  }
}

#[cfg(test)]
mod test {
  use super::{JsonFileStorage, Storage};

  fn get_new_storage() -> (tempfile::TempDir, JsonFileStorage) {
    let dir = tempfile::Builder::new().prefix("todolist").tempdir().unwrap();
    let storage = JsonFileStorage::new(dir.path());
    (dir, storage)
  }

  #[test]
  fn missing_key_reads_as_none() {
    let (_dir, storage) = get_new_storage();
    assert_eq!(storage.get_item("todo-list").unwrap(), None);
  }

  #[test]
  fn set_item_replaces_whole_value() {
    let (_dir, mut storage) = get_new_storage();
    storage.set_item("todo-list", "[1,2,3]").unwrap();
    storage.set_item("todo-list", "[]").unwrap();

    assert_eq!(storage.get_item("todo-list").unwrap().as_deref(), Some("[]"));
    assert!(!storage.item_path("todo-list").with_extension("tmp").exists());
  }

  #[test]
  fn set_item_creates_missing_folder() {
    let dir = tempfile::Builder::new().prefix("todolist").tempdir().unwrap();
    let mut storage = JsonFileStorage::new(dir.path().join("nested").join("data"));

    storage.set_item("todo-list", "[]").unwrap();
    assert_eq!(storage.get_item("todo-list").unwrap().as_deref(), Some("[]"));
  }

  #[test]
  fn remove_item() {
    let (_dir, mut storage) = get_new_storage();
    storage.set_item("todo-list", "[]").unwrap();
    storage.remove_item("todo-list").unwrap();
    storage.remove_item("todo-list").unwrap();
    assert_eq!(storage.get_item("todo-list").unwrap(), None);
  }

  #[test]
  fn keys_are_kept_apart() {
    let (_dir, mut storage) = get_new_storage();
    storage.set_item("a", "1").unwrap();
    storage.set_item("b", "2").unwrap();
    assert_eq!(storage.get_item("a").unwrap().as_deref(), Some("1"));
    assert_eq!(storage.get_item("b").unwrap().as_deref(), Some("2"));
  }
}
