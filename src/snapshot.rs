//! Serialized form of the task collection.
//!
//! A snapshot is a JSON array of `{"id", "text", "completed"}` records in
//! collection order. Decoding either yields a whole valid collection or an
//! error; there is no partial result.

use std::collections::HashSet;

use crate::{
  error::StorageError,
  task::{normalize_text, Task},
};

/// Default storage key the snapshot lives under.
pub const SNAPSHOT_KEY: &str = "todo-list";

pub fn encode(tasks: &[Task]) -> Result<String, StorageError> {
  Ok(serde_json::to_string(tasks)?)
}

pub fn decode(raw: &str) -> Result<Vec<Task>, StorageError> {
  let mut tasks: Vec<Task> = serde_json::from_str(raw)?;

  let mut seen = HashSet::with_capacity(tasks.len());
  for task in tasks.iter_mut() {
    if task.id().as_str().is_empty() {
      return Err(StorageError::Corrupt("task with empty id".to_owned()));
    }
    if !seen.insert(task.id().clone()) {
      return Err(StorageError::Corrupt(format!(
        "duplicate task id: {}",
        task.id()
      )));
    }
    match normalize_text(task.text()) {
      Some(text) => task.set_text(text),
      None => {
        return Err(StorageError::Corrupt(format!(
          "task with id: {} has blank text",
          task.id()
        )))
      }
    }
  }

  return Ok(tasks);
}

#[cfg(test)]
mod test {
  use super::{decode, encode};
  use crate::{
    error::StorageError,
    task::{Task, TaskId, MAX_TEXT_CHARS},
  };

  #[test]
  fn reload_keeps_ids_text_flags_and_order() {
    let mut done = Task::new(TaskId::from("_b"), "Write report".to_owned());
    done.toggle();
    let tasks = vec![
      Task::new(TaskId::from("_a"), "Buy milk".to_owned()),
      done,
      Task::new(TaskId::generate(), "Call mom".to_owned()),
    ];

    let restored = decode(&encode(&tasks).unwrap()).unwrap();
    assert_eq!(restored, tasks);
  }

  #[test]
  fn decode_snapshot_written_by_browser_app() {
    let raw = r#"[{"id":"_x1y2z3a4b","text":"Done","completed":true},{"id":"_q9w8e7r6t","text":"Active","completed":false}]"#;
    let tasks = decode(raw).unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id().as_str(), "_x1y2z3a4b");
    assert!(tasks[0].completed());
    assert_eq!(tasks[1].text(), "Active");
  }

  #[test]
  fn decode_empty_array() {
    assert!(decode("[]").unwrap().is_empty());
  }

  #[test]
  fn decode_ignores_unknown_fields() {
    let raw = r#"[{"id":"a","text":"x","completed":false,"color":"red"}]"#;
    assert_eq!(decode(raw).unwrap().len(), 1);
  }

  #[test]
  fn decode_rejects_malformed_json() {
    assert!(matches!(decode("[{"), Err(StorageError::Json(_))));
    assert!(matches!(decode("{}"), Err(StorageError::Json(_))));
    assert!(matches!(decode("null"), Err(StorageError::Json(_))));
  }

  #[test]
  fn decode_rejects_missing_fields() {
    let raw = r#"[{"id":"a","text":"x"}]"#;
    assert!(matches!(decode(raw), Err(StorageError::Json(_))));
  }

  #[test]
  fn decode_rejects_duplicate_ids() {
    let raw = r#"[{"id":"a","text":"x","completed":false},{"id":"a","text":"y","completed":true}]"#;
    assert!(matches!(decode(raw), Err(StorageError::Corrupt(_))));
  }

  #[test]
  fn decode_rejects_blank_text() {
    let raw = r#"[{"id":"a","text":"x","completed":false},{"id":"b","text":"  ","completed":false}]"#;
    assert!(matches!(decode(raw), Err(StorageError::Corrupt(_))));
  }

  #[test]
  fn decode_rejects_empty_id() {
    let raw = r#"[{"id":"","text":"x","completed":false}]"#;
    assert!(matches!(decode(raw), Err(StorageError::Corrupt(_))));
  }

  #[test]
  fn decode_normalizes_overlong_text() {
    let raw = format!(
      r#"[{{"id":"a","text":"  {}  ","completed":false}}]"#,
      "b".repeat(MAX_TEXT_CHARS + 5)
    );
    let tasks = decode(&raw).unwrap();
    assert_eq!(tasks[0].text(), "b".repeat(MAX_TEXT_CHARS));
  }
}
