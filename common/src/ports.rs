//! # Ports Layer (Boundaries)
//!
//! Traits that isolate the services from whoever drives them and from the store behind them.
//!
//! ## Types of Ports
//! * **[`inbound`]** (Primary/Driving): operations exposed *by* the services (`create_branch`, ...).
//! * **[`outbound`]** (Secondary/Driven): collections required *by* the services (`save`, `find_by_id`, ...).
//!
//! ## Dependency Rule
//! * Services implement the inbound ports and depend on the outbound ones.
//! * A service that needs a sibling (e.g. branch creation checking its franchise)
//!   depends on the sibling's inbound port, never on its concrete type.

pub mod inbound;
pub mod outbound;

pub use inbound::{BranchPort, FranchisePort, ProductPort};
pub use outbound::{BranchStore, FranchiseStore, ProductStore};
