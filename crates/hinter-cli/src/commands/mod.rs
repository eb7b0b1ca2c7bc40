//! Command implementations for hinter-cli

pub mod draft;
pub mod group;
pub mod peer;
pub mod sync;

pub use draft::{run_draft, run_recipients};
pub use group::{run_group_add, run_group_create, run_group_list, run_group_remove};
pub use peer::{run_peer_add, run_peer_list, run_peer_remove, run_peer_rename, run_peer_set_key};
pub use sync::run_sync;
