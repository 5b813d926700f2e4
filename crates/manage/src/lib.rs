//! Management CLI for the blog settings.
//!
//! - **cli**: Command-line argument definitions
//! - **commands**: `show`, `check` and `database` implementations
//! - **db**: Database connectivity
//! - **errors**: Centralized error handling

pub mod cli;
pub mod commands;
pub mod db;
pub mod errors;

pub use errors::{ManageError, ManageResult};
