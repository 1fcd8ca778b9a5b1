//! # Outbound Ports (Driven Actors)
//!
//! One trait per document collection. The services only ever see these traits,
//! so any backend offering the operations below can stand behind them
//! (the bundled `DocumentStore`, a test fake, a remote database client).
//!
//! ## Rules
//! 1. `save` is insert-or-update keyed by `id`; a document without an `id` gets a fresh one.
//! 2. Compound lookups match on every field named, never on a subset.
//! 3. No method retries; failures surface as [`StoreError`].
//! 4. Nothing here is transactional across collections.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::{BranchDocument, FranchiseDocument, ProductDocument};

#[async_trait]
pub trait FranchiseStore: Send + Sync {
    async fn save(&self, doc: FranchiseDocument) -> StoreResult<FranchiseDocument>;

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<FranchiseDocument>>;

    async fn exists_by_id(&self, id: &str) -> StoreResult<bool>;
}

#[async_trait]
pub trait BranchStore: Send + Sync {
    async fn save(&self, doc: BranchDocument) -> StoreResult<BranchDocument>;

    async fn find_by_franchise_id_and_id(
        &self,
        franchise_id: &str,
        id: &str,
    ) -> StoreResult<Option<BranchDocument>>;

    async fn exists_by_franchise_id_and_id(&self, franchise_id: &str, id: &str)
    -> StoreResult<bool>;
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn save(&self, doc: ProductDocument) -> StoreResult<ProductDocument>;

    async fn find_by_franchise_id_and_branch_id_and_id(
        &self,
        franchise_id: &str,
        branch_id: &str,
        id: &str,
    ) -> StoreResult<Option<ProductDocument>>;

    async fn delete_by_id(&self, id: &str) -> StoreResult<()>;

    /// Every product of the franchise, in no particular order.
    async fn find_by_franchise_id(&self, franchise_id: &str) -> StoreResult<Vec<ProductDocument>>;
}
