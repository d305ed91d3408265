//! Single-user task tracker backed by a local file.
//!
//! [`TaskStore`] owns the file and exposes add, update, delete, status changes and listing;
//! [`codec`] converts between tasks and the on-disk text.

pub mod codec;
pub mod config;
pub mod error;
pub mod store;
pub mod task;

pub use error::{FormatError, TaskError};
pub use store::{Clock, SystemClock, TaskStore};
pub use task::{Status, Task};
