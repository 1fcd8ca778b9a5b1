//! # Stockpile Common
//!
//! Shared vocabulary for the franchise → branch → product backend.
//!
//! * **[`models`]**: Domain records handed to callers and the documents the store persists.
//! * **[`ports`]**: Traits at the edges of the services (driving and driven side).
//! * **[`error`]**: The error taxonomy every operation reports through.
//! * **[`config`]**: Runtime settings assembled by the driver.

pub mod config;
pub mod error;
pub mod models;
pub mod ports;
pub mod validation;
