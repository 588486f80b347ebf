use crate::error::StorageError;

/// String key/value store the task snapshot is persisted into.
pub trait Storage {
  fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
  fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
  fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}
