//! Report resolution and sync engine for hinter-helper
//!
//! This crate sits between the Layer 0 crates and the CLI and implements:
//!
//! - **Peer roster**: peers, their public keys and their config files
//! - **Groups**: membership derived from peer configs, plus the implicit `all`
//! - **Recipient resolution**: `to` minus `except` over aliases and `group:` references
//! - **Manifest building**: which file lands where for every peer
//! - **ReportSyncEngine**: reconcile every outgoing directory with its manifest
//! - **Draft authoring**: new drafts from the standard template
//!
//! # Architecture
//!
//! ```text
//!                 hinter-cli
//!                     |
//!                hinter-core
//!                     |
//!          +----------+-----------+
//!          |                      |
//!      hinter-fs           hinter-content
//! ```
//!
//! # Example
//!
//! ```no_run
//! use hinter_core::{DataRoot, ReportSyncEngine, SyncOptions, SyncOutcome};
//!
//! fn example() -> hinter_core::Result<()> {
//!     let engine = ReportSyncEngine::new(DataRoot::new("hinter-core-data"));
//!     if let SyncOutcome::Synced(report) = engine.sync(&SyncOptions::default())? {
//!         println!("{}", report.summary());
//!     }
//!     Ok(())
//! }
//! ```

pub mod draft;
pub mod error;
pub mod group;
pub mod layout;
pub mod manifest;
pub mod peer;
pub mod recipients;
pub mod sync;
pub mod validation;

pub use draft::DraftAuthor;
pub use error::{Error, ResolutionError, Result};
pub use group::{ALL_GROUP, GROUP_PREFIX, GroupManager, Groups};
pub use hinter_fs::HinterPath;
pub use layout::DataRoot;
pub use manifest::{ContentSource, DesiredManifest, ManifestBuilder, PeerFiles};
pub use peer::{ClineSettings, PeerConfig, PeerRoster};
pub use recipients::{RecipientExpr, available_recipients, resolve_recipients};
pub use sync::{ReportSyncEngine, SyncOptions, SyncOutcome, SyncReport};
pub use validation::{is_valid_public_key, is_valid_slug};
