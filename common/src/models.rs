//! # Domain Models
//!
//! Every entity comes in two shapes:
//!
//! * The **domain record** ([`franchise::Franchise`], [`branch::Branch`], [`product::Product`])
//!   returned to callers. Its `id` is always populated.
//! * The **document** ([`franchise::FranchiseDocument`], ...) handed to and returned by the store.
//!   A document without an `id` has not been persisted yet; `save` assigns one.
//!
//! Records are values: mutation means building a replacement document and saving it.

pub mod branch;
pub mod franchise;
pub mod product;

pub use branch::{Branch, BranchDocument};
pub use franchise::{Franchise, FranchiseDocument};
pub use product::{NewProduct, Product, ProductDocument};
