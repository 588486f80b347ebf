extern crate serde;
extern crate serde_json;
extern crate uuid;

pub mod config;
pub mod error;
pub mod filter;
pub mod snapshot;
pub mod storage;
pub mod store;
pub mod task;

pub use config::Config;
pub use error::{StorageError, TodoError};
pub use filter::Filter;
pub use store::{Counts, TodoStore};
pub use task::{Task, TaskId};
