//! # Application Services
//!
//! One service per entity. Each operation is a short pipeline: reject blank
//! input, check parents through the sibling ports, then make a single store
//! call (or a lookup followed by a save).
//!
//! ## Available Services
//! * [`franchise::FranchiseService`]: leaf service, no parent to check.
//! * [`branch::BranchService`]: checks the owning franchise through a [`FranchisePort`](stockpile_common::ports::FranchisePort).
//! * [`product::ProductService`]: checks franchise and branch, and computes the top product per branch.
//!
//! ## Concurrency
//! Services hold nothing but shared handles to their ports, so any number of
//! operations may run at once. Parent checks and the write that follows them
//! are separate store calls. Two requests can interleave between them; with no
//! parent deletion in place this never orphans a record, but anyone adding
//! deletion has to revisit it.

use stockpile_common::error::ServiceError;
use tracing::{error, warn};

pub mod branch;
pub mod franchise;
pub mod product;

pub use branch::BranchService;
pub use franchise::FranchiseService;
pub use product::ProductService;

/// Logs a failed operation at a level matching its kind.
fn log_failure(action: &str, err: &ServiceError) {
    match err {
        ServiceError::InvalidArgument(reason) => warn!("{} rejected: {}", action, reason),
        ServiceError::Unexpected(source) => error!("{} failed: {}", action, source),
    }
}
