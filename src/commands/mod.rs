//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and executes the operation against the tag index and, for export,
//! the remote store.

pub mod add;
pub mod export;
pub mod list;
pub mod remove;
pub mod show;
pub mod update;

// Re-export execute functions for convenience
pub use add::execute as add;
pub use export::execute as export;
pub use list::execute as list;
pub use remove::execute as remove;
pub use show::execute as show;
pub use update::execute as update;
