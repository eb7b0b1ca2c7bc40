//! Shared test utilities for the hinter-helper workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`data_root`]: [`TestDataRoot`] builder for a throwaway hinter-core data directory

pub mod data_root;

pub use data_root::{TestDataRoot, public_key};
