//! # Inbound Ports (Driving Actors)
//!
//! Use cases the services offer. Adapters (the CLI today) hold these as trait
//! objects and call exactly one operation per request.
//!
//! Ids are plain strings. A blank id is rejected with
//! [`ServiceError::InvalidArgument`](crate::error::ServiceError::InvalidArgument)
//! before any store call.

use async_trait::async_trait;

use crate::error::ServiceResult;
use crate::models::{Branch, Franchise, NewProduct, Product};

#[async_trait]
pub trait FranchisePort: Send + Sync {
    async fn create_franchise(&self, name: &str) -> ServiceResult<Franchise>;

    async fn exists_franchise(&self, franchise_id: &str) -> ServiceResult<bool>;

    /// Completes with `None` when no franchise has `franchise_id`.
    async fn update_franchise_name(
        &self,
        franchise_id: &str,
        new_name: &str,
    ) -> ServiceResult<Option<Franchise>>;
}

#[async_trait]
pub trait BranchPort: Send + Sync {
    async fn create_branch(&self, franchise_id: &str, branch_name: &str) -> ServiceResult<Branch>;

    async fn exists_branch(&self, franchise_id: &str, branch_id: &str) -> ServiceResult<bool>;

    /// Completes with `None` when the branch is not found under `franchise_id`.
    async fn update_branch_name(
        &self,
        franchise_id: &str,
        branch_id: &str,
        new_name: &str,
    ) -> ServiceResult<Option<Branch>>;
}

#[async_trait]
pub trait ProductPort: Send + Sync {
    async fn create_product(
        &self,
        franchise_id: &str,
        branch_id: &str,
        product: NewProduct,
    ) -> ServiceResult<Product>;

    async fn delete_product(
        &self,
        franchise_id: &str,
        branch_id: &str,
        product_id: &str,
    ) -> ServiceResult<()>;

    async fn update_product_stock(
        &self,
        franchise_id: &str,
        branch_id: &str,
        product_id: &str,
        stock: i32,
    ) -> ServiceResult<Product>;

    async fn update_product_name(
        &self,
        franchise_id: &str,
        branch_id: &str,
        product_id: &str,
        new_name: &str,
    ) -> ServiceResult<Product>;

    /// The highest-stocked product of every branch of `franchise_id` that has products.
    async fn get_top_products_by_franchise(&self, franchise_id: &str)
    -> ServiceResult<Vec<Product>>;
}
