//! CLI command handlers, one per file.

mod config;
mod fetch;
mod list;

pub use config::run_config;
pub use fetch::{run_fetch, FetchArgs};
pub use list::run_list;
