use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;

use async_trait::async_trait;
use stockpile_common::error::{ServiceError, ServiceResult};
use stockpile_common::models::{NewProduct, Product, ProductDocument};
use stockpile_common::ports::{BranchPort, FranchisePort, ProductPort, ProductStore};
use stockpile_common::validation::{any_blank, clean_name, is_blank};
use tracing::{debug, info};

use super::log_failure;

const FRANCHISE_ID_REQUIRED: &str = "Franchise id must not be null or empty";
const FRANCHISE_MISSING: &str = "Franchise does not exist";
const BRANCH_ID_REQUIRED: &str = "Branch id must not be null or empty";
const BRANCH_MISSING: &str = "Branch does not exist";
const PRODUCT_INVALID: &str = "Product name or stock must not be null or empty";
const IDS_REQUIRED: &str = "Franchise ID, Branch ID and Product ID must not be null or empty";
const NAME_REQUIRED: &str = "Product name must not be null or empty";
const STOCK_NEGATIVE: &str = "Product stock must not be negative";
const PRODUCT_MISSING: &str = "Product not found";
const TOP_FRANCHISE_ID_REQUIRED: &str = "Franchise ID must not be null or empty";

/// Validates and persists products, and answers the top-product query.
///
/// Every mutation re-checks scope: creation asks the franchise and branch
/// ports, updates and deletes look the product up by the full
/// (franchise, branch, product) key.
pub struct ProductService {
    franchises: Arc<dyn FranchisePort>,
    branches: Arc<dyn BranchPort>,
    product_store: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(
        franchises: Arc<dyn FranchisePort>,
        branches: Arc<dyn BranchPort>,
        product_store: Arc<dyn ProductStore>,
    ) -> Self {
        Self {
            franchises,
            branches,
            product_store,
        }
    }

    async fn require_franchise(&self, franchise_id: &str) -> ServiceResult<()> {
        if is_blank(franchise_id) {
            return Err(ServiceError::invalid(FRANCHISE_ID_REQUIRED));
        }
        if !self.franchises.exists_franchise(franchise_id).await? {
            return Err(ServiceError::invalid(FRANCHISE_MISSING));
        }
        Ok(())
    }

    async fn require_branch(&self, franchise_id: &str, branch_id: &str) -> ServiceResult<()> {
        if is_blank(branch_id) {
            return Err(ServiceError::invalid(BRANCH_ID_REQUIRED));
        }
        if !self.branches.exists_branch(franchise_id, branch_id).await? {
            return Err(ServiceError::invalid(BRANCH_MISSING));
        }
        Ok(())
    }

    /// Looks the product up by its full key, failing when it is not there.
    async fn find_scoped(
        &self,
        franchise_id: &str,
        branch_id: &str,
        product_id: &str,
    ) -> ServiceResult<ProductDocument> {
        self.product_store
            .find_by_franchise_id_and_branch_id_and_id(franchise_id, branch_id, product_id)
            .await?
            .ok_or_else(|| ServiceError::invalid(PRODUCT_MISSING))
    }

    async fn create(
        &self,
        franchise_id: &str,
        branch_id: &str,
        product: NewProduct,
    ) -> ServiceResult<Product> {
        self.require_franchise(franchise_id).await?;
        self.require_branch(franchise_id, branch_id).await?;
        let (name, stock) = validate_new_product(product)?;

        let saved = self
            .product_store
            .save(ProductDocument::new(
                franchise_id.to_string(),
                branch_id.to_string(),
                name,
                stock,
            ))
            .await?;
        Ok(saved.into())
    }

    async fn delete(
        &self,
        franchise_id: &str,
        branch_id: &str,
        product_id: &str,
    ) -> ServiceResult<()> {
        if any_blank(&[franchise_id, branch_id, product_id]) {
            return Err(ServiceError::invalid(IDS_REQUIRED));
        }

        self.find_scoped(franchise_id, branch_id, product_id).await?;
        self.product_store.delete_by_id(product_id).await?;
        Ok(())
    }

    async fn restock(
        &self,
        franchise_id: &str,
        branch_id: &str,
        product_id: &str,
        stock: i32,
    ) -> ServiceResult<Product> {
        if any_blank(&[franchise_id, branch_id, product_id]) {
            return Err(ServiceError::invalid(IDS_REQUIRED));
        }
        if stock < 0 {
            return Err(ServiceError::invalid(STOCK_NEGATIVE));
        }

        let doc = self.find_scoped(franchise_id, branch_id, product_id).await?;
        let saved = self.product_store.save(doc.with_stock(stock)).await?;
        Ok(saved.into())
    }

    async fn rename(
        &self,
        franchise_id: &str,
        branch_id: &str,
        product_id: &str,
        new_name: &str,
    ) -> ServiceResult<Product> {
        if any_blank(&[franchise_id, branch_id, product_id]) {
            return Err(ServiceError::invalid(IDS_REQUIRED));
        }
        let new_name = clean_name(new_name).ok_or_else(|| ServiceError::invalid(NAME_REQUIRED))?;

        let doc = self.find_scoped(franchise_id, branch_id, product_id).await?;
        let saved = self.product_store.save(doc.with_name(new_name)).await?;
        Ok(saved.into())
    }

    async fn top_products(&self, franchise_id: &str) -> ServiceResult<Vec<Product>> {
        if is_blank(franchise_id) {
            return Err(ServiceError::invalid(TOP_FRANCHISE_ID_REQUIRED));
        }

        let docs = self.product_store.find_by_franchise_id(franchise_id).await?;
        Ok(top_per_branch(docs.into_iter().map(Product::from)))
    }
}

fn validate_new_product(product: NewProduct) -> ServiceResult<(String, i32)> {
    let name = product.name.as_deref().and_then(clean_name);
    match (name, product.stock) {
        (Some(name), Some(stock)) if stock >= 0 => Ok((name, stock)),
        _ => Err(ServiceError::invalid(PRODUCT_INVALID)),
    }
}

/// Keeps the highest-stocked product of each branch.
///
/// On a tie the product seen first stays. The result is ordered by branch id.
pub fn top_per_branch<I>(products: I) -> Vec<Product>
where
    I: IntoIterator<Item = Product>,
{
    let mut top: BTreeMap<String, Product> = BTreeMap::new();

    for product in products {
        match top.entry(product.branch_id.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(product);
            }
            Entry::Occupied(mut slot) => {
                if product.stock > slot.get().stock {
                    slot.insert(product);
                }
            }
        }
    }

    top.into_values().collect()
}

#[async_trait]
impl ProductPort for ProductService {
    async fn create_product(
        &self,
        franchise_id: &str,
        branch_id: &str,
        product: NewProduct,
    ) -> ServiceResult<Product> {
        info!(
            "Starting product creation. Product name: {}",
            product.name.as_deref().unwrap_or_default()
        );

        self.create(franchise_id, branch_id, product)
            .await
            .inspect(|product| {
                info!(
                    "Product created. Product ID: {}, Name: {}",
                    product.id, product.name
                )
            })
            .inspect_err(|err| log_failure("Product creation", err))
    }

    async fn delete_product(
        &self,
        franchise_id: &str,
        branch_id: &str,
        product_id: &str,
    ) -> ServiceResult<()> {
        self.delete(franchise_id, branch_id, product_id)
            .await
            .inspect(|_| info!("Product deleted. ID: {}", product_id))
            .inspect_err(|err| log_failure("Product deletion", err))
    }

    async fn update_product_stock(
        &self,
        franchise_id: &str,
        branch_id: &str,
        product_id: &str,
        stock: i32,
    ) -> ServiceResult<Product> {
        self.restock(franchise_id, branch_id, product_id, stock)
            .await
            .inspect(|product| {
                info!("Product stock updated. ID: {}, Stock: {}", product.id, product.stock)
            })
            .inspect_err(|err| log_failure("Product stock update", err))
    }

    async fn update_product_name(
        &self,
        franchise_id: &str,
        branch_id: &str,
        product_id: &str,
        new_name: &str,
    ) -> ServiceResult<Product> {
        self.rename(franchise_id, branch_id, product_id, new_name)
            .await
            .inspect(|product| info!("Product renamed. ID: {}", product.id))
            .inspect_err(|err| log_failure("Product rename", err))
    }

    async fn get_top_products_by_franchise(
        &self,
        franchise_id: &str,
    ) -> ServiceResult<Vec<Product>> {
        self.top_products(franchise_id)
            .await
            .inspect(|products| {
                for product in products {
                    debug!(
                        "Top product for branch {} in franchise {}: {} (stock {})",
                        product.branch_id, franchise_id, product.name, product.stock
                    );
                }
                info!(
                    "Top products fetched for franchise {}: {} branches",
                    franchise_id,
                    products.len()
                );
            })
            .inspect_err(|err| log_failure("Top product query", err))
    }
}
