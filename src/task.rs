/// Longest text a task may carry, in characters.
pub const MAX_TEXT_CHARS: usize = 140;

/// Opaque task identifier.
///
/// Fresh ids are random hex strings, but any non-empty string read back from
/// a snapshot is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
  pub fn generate() -> Self {
    Self(uuid::Uuid::new_v4().as_simple().to_string())
  }

  pub fn as_str(&self) -> &str {
    self.0.as_str()
  }

  /// `abcd..wxyz` form for terminals; short ids are returned whole.
  pub fn short(&self) -> String {
    let chars: Vec<char> = self.0.chars().collect();
    if chars.len() <= 10 {
      return self.0.clone();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    return format!("{}..{}", head, tail);
  }
}

impl From<&str> for TaskId {
  fn from(value: &str) -> Self {
    Self(value.to_owned())
  }
}

impl From<String> for TaskId {
  fn from(value: String) -> Self {
    Self(value)
  }
}

impl std::fmt::Display for TaskId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Task {
  id: TaskId,
  text: String,
  completed: bool,
}

impl Task {
  pub(crate) fn new(id: TaskId, text: String) -> Self {
    Self {
      id,
      text,
      completed: false,
    }
  }

  pub fn id(&self) -> &TaskId {
    &self.id
  }

  pub fn text(&self) -> &str {
    self.text.as_str()
  }

  pub fn completed(&self) -> bool {
    self.completed
  }

  pub(crate) fn set_text(&mut self, text: String) {
    self.text = text;
  }

  pub(crate) fn toggle(&mut self) {
    self.completed = !self.completed;
  }
}

/// Trims `raw` and caps it at [`MAX_TEXT_CHARS`]. `None` when nothing is left.
pub fn normalize_text(raw: &str) -> Option<String> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return None;
  }
  let capped: String = trimmed.chars().take(MAX_TEXT_CHARS).collect();
  return Some(capped.trim_end().to_owned());
}
