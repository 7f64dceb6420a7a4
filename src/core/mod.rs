// Public modules
pub mod adapter;
pub mod config;
pub mod error;
pub mod folder;
pub mod scaffold;
pub mod script;
pub mod variables;

// Internal modules - not part of public API
pub(crate) mod paths;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
