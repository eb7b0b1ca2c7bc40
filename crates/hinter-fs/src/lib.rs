//! Filesystem primitives for hinter-helper
//!
//! Provides normalized paths, atomic writes, the depth-first directory walker
//! and empty-directory pruning used by the report sync engine.

pub mod checksum;
pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;
pub mod prune;
pub mod walk;

pub use config::ConfigStore;
pub use constants::HinterPath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use prune::remove_empty_directories;
pub use walk::{Walk, walk};
