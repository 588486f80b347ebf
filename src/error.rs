use crate::task::TaskId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
  NotFound(TaskId),
  InvalidArgument(String),
}

impl std::fmt::Display for TodoError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      TodoError::NotFound(id) => write!(f, "task with id: {} not found", id),
      TodoError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
    }
  }
}

impl std::error::Error for TodoError {}

#[derive(Debug)]
pub enum StorageError {
  Io(std::io::Error),
  Json(serde_json::Error),
  Corrupt(String),
}

impl std::fmt::Display for StorageError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      StorageError::Io(err) => write!(f, "io error: {err}"),
      StorageError::Json(err) => write!(f, "json error: {err}"),
      StorageError::Corrupt(msg) => write!(f, "corrupt snapshot: {msg}"),
    }
  }
}

impl std::error::Error for StorageError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      StorageError::Io(err) => Some(err),
      StorageError::Json(err) => Some(err),
      StorageError::Corrupt(_) => None,
    }
  }
}

impl From<std::io::Error> for StorageError {
  fn from(value: std::io::Error) -> Self {
    StorageError::Io(value)
  }
}

impl From<serde_json::Error> for StorageError {
  fn from(value: serde_json::Error) -> Self {
    StorageError::Json(value)
  }
}
