use colored::{Color, Colorize};

use todolist::{Filter, Task, TodoStore};

struct ViewColors {}
impl ViewColors {
  const ID: Color = Color::BrightBlack;
  const DONE_MARK: Color = Color::Green;
  const ACTIVE_FILTER: Color = Color::Cyan;
  const COUNT: Color = Color::BrightYellow;
}

/// Renders store state to the terminal. Only ever reads from the store.
pub struct Viewer {}

impl Viewer {
  pub fn new() -> Self {
    Self {}
  }

  pub fn print_tasks(&self, store: &TodoStore) {
    let mut empty = true;
    for task in store.visible_tasks() {
      self.print_task(task);
      empty = false;
    }
    if empty {
      println!("{}", "no todos found for this filter".dimmed());
    }
    self.print_footer(store);
  }

  pub fn print_task(&self, task: &Task) {
    let mark = match task.completed() {
      true => format!("[{}]", "x".color(ViewColors::DONE_MARK)),
      false => "[ ]".to_owned(),
    };
    let text = match task.completed() {
      true => task.text().strikethrough().dimmed(),
      false => task.text().normal(),
    };
    println!("{}  {} {}", task.id().short().color(ViewColors::ID), mark, text);
  }

  fn print_footer(&self, store: &TodoStore) {
    let counts = store.counts();
    let filters: Vec<String> = Filter::VALUES
      .iter()
      .map(|f| match *f == store.filter() {
        true => f.as_str().color(ViewColors::ACTIVE_FILTER).bold().to_string(),
        false => f.as_str().to_owned(),
      })
      .collect();

    println!();
    println!(
      "{} left, {} completed  |  {}",
      counts.active.to_string().color(ViewColors::COUNT),
      counts.completed.to_string().color(ViewColors::COUNT),
      filters.join(" ")
    );
  }
}
