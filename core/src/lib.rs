//! # Stockpile Core
//!
//! The services that validate and persist franchises, branches and products,
//! plus the bundled document store they can run against.
//!
//! * **[`services`]**: Implementations of the inbound ports.
//! * **[`store`]**: [`store::DocumentStore`], an implementation of every outbound port.
//! * **[`wiring`]**: Builds the three services over one store.

pub mod services;
pub mod store;
pub mod wiring;

#[cfg(test)]
mod testing;
