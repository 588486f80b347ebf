use crate::{error::TodoError, task::Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
  #[default]
  All,
  Active,
  Completed,
}

impl Filter {
  pub const VALUES: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

  pub fn as_str(self) -> &'static str {
    match self {
      Filter::All => "all",
      Filter::Active => "active",
      Filter::Completed => "completed",
    }
  }

  pub fn matches(self, task: &Task) -> bool {
    match self {
      Filter::All => true,
      Filter::Active => !task.completed(),
      Filter::Completed => task.completed(),
    }
  }
}

impl std::str::FromStr for Filter {
  type Err = TodoError;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    Filter::VALUES
      .iter()
      .copied()
      .find(|f| f.as_str() == value)
      .ok_or_else(|| TodoError::InvalidArgument(format!("unknown filter: {}", value)))
  }
}

impl std::fmt::Display for Filter {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

#[cfg(test)]
mod test {
  use super::Filter;
  use crate::{error::TodoError, task::Task, task::TaskId};

  #[test]
  fn parse_known_values() {
    assert_eq!("all".parse::<Filter>().unwrap(), Filter::All);
    assert_eq!("active".parse::<Filter>().unwrap(), Filter::Active);
    assert_eq!("completed".parse::<Filter>().unwrap(), Filter::Completed);
  }

  #[test]
  fn parse_unknown_value() {
    match "bogus".parse::<Filter>() {
      Err(TodoError::InvalidArgument(_)) => {}
      other => panic!("unexpected parse result: {:?}", other),
    }
    assert!("Active".parse::<Filter>().is_err());
  }

  #[test]
  fn default_is_all() {
    assert_eq!(Filter::default(), Filter::All);
  }

  #[test]
  fn matches_by_completion() {
    let mut task = Task::new(TaskId::from("a"), "x".to_owned());
    assert!(Filter::All.matches(&task));
    assert!(Filter::Active.matches(&task));
    assert!(!Filter::Completed.matches(&task));

    task.toggle();
    assert!(Filter::All.matches(&task));
    assert!(!Filter::Active.matches(&task));
    assert!(Filter::Completed.matches(&task));
  }
}
