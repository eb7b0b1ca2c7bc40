//! Report synchronization
//!
//! - **engine**: run a full sync over a data root
//! - **reconcile**: make one outgoing directory match its desired files

mod engine;
mod reconcile;

pub use engine::{ReportSyncEngine, SyncOptions, SyncOutcome, SyncReport};
pub use reconcile::{PeerReconciliation, Reconciler};
