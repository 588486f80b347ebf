use log::{debug, warn};

use crate::{
  error::TodoError,
  filter::Filter,
  snapshot::{self, SNAPSHOT_KEY},
  storage::Storage,
  task::{normalize_text, Task, TaskId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
  pub total: usize,
  pub active: usize,
  pub completed: usize,
}

/// Owns the ordered task collection and the active filter.
///
/// Every mutation writes the full collection back to storage before
/// returning. Storage failures never reach the caller: reads degrade to an
/// empty collection and failed writes leave the in-memory state in charge.
pub struct TodoStore {
  storage: Box<dyn Storage>,
  key: String,
  tasks: Vec<Task>,
  filter: Filter,
  editing: Option<TaskId>,
}

impl TodoStore {
  pub fn new(storage: Box<dyn Storage>) -> Self {
    Self::with_key(storage, SNAPSHOT_KEY)
  }

  pub fn with_key(storage: Box<dyn Storage>, key: &str) -> Self {
    let mut store = Self {
      storage,
      key: key.to_owned(),
      tasks: Vec::new(),
      filter: Filter::default(),
      editing: None,
    };
    store.initialize();
    return store;
  }

  /// Re-reads the collection from storage, replacing the in-memory one.
  pub fn initialize(&mut self) -> &[Task] {
    self.tasks = self.hydrate();
    self.editing = None;
    debug!("restored {} tasks from key: {}", self.tasks.len(), self.key);
    return &self.tasks;
  }

  pub fn add(&mut self, raw_text: &str) -> Option<Task> {
    let text = normalize_text(raw_text)?;

    let mut id = TaskId::generate();
    while self.position_by_id(&id).is_some() {
      id = TaskId::generate();
    }

    let task = Task::new(id, text);
    self.tasks.push(task.clone());
    self.persist();
    return Some(task);
  }

  /// Blank `raw_text` keeps the current text.
  pub fn edit(&mut self, id: &TaskId, raw_text: &str) -> Result<Task, TodoError> {
    let position = self.find(id)?;
    if let Some(text) = normalize_text(raw_text) {
      if self.tasks[position].text() != text {
        self.tasks[position].set_text(text);
        self.persist();
      }
    }
    return Ok(self.tasks[position].clone());
  }

  pub fn toggle_completed(&mut self, id: &TaskId) -> Result<Task, TodoError> {
    let position = self.find(id)?;
    self.tasks[position].toggle();
    self.persist();
    return Ok(self.tasks[position].clone());
  }

  pub fn delete(&mut self, id: &TaskId) -> bool {
    let position = match self.position_by_id(id) {
      Some(position) => position,
      None => return false,
    };

    self.tasks.remove(position);
    if self.editing.as_ref() == Some(id) {
      self.editing = None;
    }
    self.persist();
    return true;
  }

  pub fn clear_completed(&mut self) -> usize {
    let before = self.tasks.len();
    self.tasks.retain(|t| !t.completed());
    let removed = before - self.tasks.len();

    if removed > 0 {
      if let Some(editing) = &self.editing {
        if self.position_by_id(editing).is_none() {
          self.editing = None;
        }
      }
      self.persist();
    }
    return removed;
  }

  pub fn set_filter(&mut self, value: &str) -> Result<Filter, TodoError> {
    let filter: Filter = value.parse()?;
    self.select_filter(filter);
    return Ok(filter);
  }

  pub fn select_filter(&mut self, filter: Filter) {
    self.filter = filter;
  }

  pub fn filter(&self) -> Filter {
    self.filter
  }

  /// Tasks matching the active filter, in insertion order.
  pub fn visible_tasks(&self) -> impl Iterator<Item = &Task> + '_ {
    let filter = self.filter;
    self.tasks.iter().filter(move |t| filter.matches(t))
  }

  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  pub fn task_by_id(&self, id: &TaskId) -> Option<&Task> {
    self.tasks.iter().find(|t| t.id() == id)
  }

  /// Accepts a full id or its [`TaskId::short`] form.
  pub fn resolve_id(&self, id: &str) -> Option<TaskId> {
    self
      .tasks
      .iter()
      .map(|t| t.id())
      .find(|task_id| task_id.as_str() == id)
      .or_else(|| self.tasks.iter().map(|t| t.id()).find(|task_id| task_id.short() == id))
      .cloned()
  }

  pub fn counts(&self) -> Counts {
    let completed = self.tasks.iter().filter(|t| t.completed()).count();
    Counts {
      total: self.tasks.len(),
      active: self.tasks.len() - completed,
      completed,
    }
  }

  pub fn begin_edit(&mut self, id: &TaskId) -> Result<Task, TodoError> {
    let position = self.find(id)?;
    self.editing = Some(id.clone());
    return Ok(self.tasks[position].clone());
  }

  pub fn editing(&self) -> Option<&TaskId> {
    self.editing.as_ref()
  }

  pub fn cancel_edit(&mut self) {
    self.editing = None;
  }

  pub fn commit_edit(&mut self, raw_text: &str) -> Result<Task, TodoError> {
    let id = match self.editing.take() {
      Some(id) => id,
      None => return Err(TodoError::InvalidArgument("no edit in progress".to_owned())),
    };
    self.edit(&id, raw_text)
  }

  fn find(&self, id: &TaskId) -> Result<usize, TodoError> {
    self
      .position_by_id(id)
      .ok_or_else(|| TodoError::NotFound(id.clone()))
  }

  fn position_by_id(&self, id: &TaskId) -> Option<usize> {
    self.tasks.iter().position(|t| t.id() == id)
  }

  fn hydrate(&self) -> Vec<Task> {
    let raw = match self.storage.get_item(&self.key) {
      Ok(Some(raw)) => raw,
      Ok(None) => return Vec::new(),
      Err(err) => {
        warn!("can't read snapshot from key: {} err: {}", self.key, err);
        return Vec::new();
      }
    };

    match snapshot::decode(&raw) {
      Ok(tasks) => tasks,
      Err(err) => {
        warn!("ignoring unreadable snapshot at key: {} err: {}", self.key, err);
        Vec::new()
      }
    }
  }

  fn persist(&mut self) {
    let result = snapshot::encode(&self.tasks).and_then(|raw| self.storage.set_item(&self.key, &raw));
    match result {
      Ok(()) => debug!("saved {} tasks to key: {}", self.tasks.len(), self.key),
      Err(err) => warn!("can't save snapshot to key: {} err: {}", self.key, err),
    }
  }
}
