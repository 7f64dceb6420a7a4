//! Generic utility primitives with zero domain knowledge.
//!
//! - `command` - Command execution with error handling
//! - `io` - File I/O with consistent error handling
//! - `text` - String helpers for comment stripping, diffing, and chunking

pub mod command;
pub mod io;
pub mod text;
