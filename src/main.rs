extern crate colored;

use log::debug;
use todolist::{storage::JsonFileStorage, Config, TaskId, TodoError, TodoStore};
use viewer::Viewer;

mod viewer;

fn cli() -> clap::Command<'static> {
  clap::Command::new("todolist")
    .about("Small local task list")
    .arg_required_else_help(true)
    .subcommand(
      clap::Command::new("add")
        .about("Add a new task")
        .arg(clap::Arg::new("text").required(true).index(1).multiple_values(true)),
    )
    .subcommand(clap::Command::new("edit").about("Replace task text").args(&[
      clap::Arg::new("id").required(true).index(1),
      clap::Arg::new("text").required(true).index(2).multiple_values(true),
    ]))
    .subcommand(
      clap::Command::new("toggle")
        .about("Flip a task between active and completed")
        .arg(clap::Arg::new("id").required(true).index(1)),
    )
    .subcommand(
      clap::Command::new("delete")
        .about("Remove a task")
        .arg(clap::Arg::new("id").required(true).index(1)),
    )
    .subcommand(clap::Command::new("clear-completed").about("Remove every completed task"))
    .subcommand(
      clap::Command::new("list").about("Show tasks").arg(
        clap::Arg::new("filter")
          .long("filter")
          .takes_value(true)
          .possible_values(["all", "active", "completed"])
          .default_value("all"),
      ),
    )
    .subcommand(
      clap::Command::new("completions")
        .about("Print shell completions")
        .arg(clap::Arg::new("shell").required(true).index(1)),
    )
}

fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

  if let Err(err) = run() {
    eprintln!("error: {}", err);
    std::process::exit(1);
  }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
  let matches = cli().get_matches();

  if let Some(command_matches) = matches.subcommand_matches("completions") {
    let shell: clap_complete::Shell = command_matches.value_of("shell").unwrap_or_default().parse()?;
    clap_complete::generate(shell, &mut cli(), "todolist", &mut std::io::stdout());
    return Ok(());
  }

  let config = Config::load()?;
  debug!("todolist data folder: {}", config.storage_dir_path.display());

  let storage = JsonFileStorage::new(&config.storage_dir_path);
  let mut store = TodoStore::with_key(Box::new(storage), &config.snapshot_key);
  let viewer = Viewer::new();

  match matches.subcommand() {
    Some(("add", command_matches)) => {
      match store.add(&joined_text(command_matches)) {
        Some(task) => {
          println!("task added:");
          viewer.print_task(&task);
        }
        None => println!("nothing to add: task text is empty"),
      };
    }

    Some(("edit", command_matches)) => {
      let id = resolve_id(&store, command_matches)?;
      let task = store.edit(&id, &joined_text(command_matches))?;
      println!("task edited:");
      viewer.print_task(&task);
    }

    Some(("toggle", command_matches)) => {
      let id = resolve_id(&store, command_matches)?;
      let task = store.toggle_completed(&id)?;
      viewer.print_task(&task);
    }

    Some(("delete", command_matches)) => {
      let id = resolve_id(&store, command_matches)?;
      if store.delete(&id) {
        println!("task deleted: {}", id.short());
      }
    }

    Some(("clear-completed", _)) => {
      println!("removed {} completed tasks", store.clear_completed());
    }

    Some(("list", command_matches)) => {
      store.set_filter(command_matches.value_of("filter").unwrap_or("all"))?;
    }

    Some((subcmd, _)) => println!("unknown subcommand {}", subcmd),
    None => println!("subcommand not found"),
  };

  println!();
  viewer.print_tasks(&store);
  return Ok(());
}

fn joined_text(command_matches: &clap::ArgMatches) -> String {
  command_matches
    .values_of("text")
    .map(|words| words.collect::<Vec<_>>().join(" "))
    .unwrap_or_default()
}

fn resolve_id(store: &TodoStore, command_matches: &clap::ArgMatches) -> Result<TaskId, TodoError> {
  let raw = command_matches.value_of("id").unwrap_or_default();
  store
    .resolve_id(raw)
    .ok_or_else(|| TodoError::NotFound(TaskId::from(raw)))
}
