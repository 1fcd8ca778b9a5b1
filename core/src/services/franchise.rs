use std::sync::Arc;

use async_trait::async_trait;
use stockpile_common::error::{ServiceError, ServiceResult};
use stockpile_common::models::{Franchise, FranchiseDocument};
use stockpile_common::ports::{FranchisePort, FranchiseStore};
use stockpile_common::validation::{clean_name, is_blank};
use tracing::{debug, info};

use super::log_failure;

const NAME_REQUIRED: &str = "Franchise name must not be null or empty";
const ID_REQUIRED: &str = "Franchise ID must not be null or empty";

/// Validates and persists franchises.
pub struct FranchiseService {
    franchise_store: Arc<dyn FranchiseStore>,
}

impl FranchiseService {
    pub fn new(franchise_store: Arc<dyn FranchiseStore>) -> Self {
        Self { franchise_store }
    }

    async fn create(&self, name: &str) -> ServiceResult<Franchise> {
        let name = clean_name(name).ok_or_else(|| ServiceError::invalid(NAME_REQUIRED))?;
        let saved = self
            .franchise_store
            .save(FranchiseDocument::new(name))
            .await?;
        Ok(saved.into())
    }

    async fn rename(&self, franchise_id: &str, new_name: &str) -> ServiceResult<Option<Franchise>> {
        if is_blank(franchise_id) {
            return Err(ServiceError::invalid(ID_REQUIRED));
        }
        let new_name = clean_name(new_name).ok_or_else(|| ServiceError::invalid(NAME_REQUIRED))?;

        let Some(doc) = self.franchise_store.find_by_id(franchise_id).await? else {
            debug!("No franchise with ID {} to rename", franchise_id);
            return Ok(None);
        };

        let saved = self.franchise_store.save(doc.with_name(new_name)).await?;
        Ok(Some(saved.into()))
    }
}

#[async_trait]
impl FranchisePort for FranchiseService {
    async fn create_franchise(&self, name: &str) -> ServiceResult<Franchise> {
        info!("Starting franchise creation. Franchise name: {}", name);

        self.create(name)
            .await
            .inspect(|franchise| {
                info!(
                    "Franchise created. Franchise ID: {}, Name: {}",
                    franchise.id, franchise.name
                )
            })
            .inspect_err(|err| log_failure("Franchise creation", err))
    }

    async fn exists_franchise(&self, franchise_id: &str) -> ServiceResult<bool> {
        if is_blank(franchise_id) {
            let err = ServiceError::invalid(ID_REQUIRED);
            log_failure("Franchise existence check", &err);
            return Err(err);
        }

        let exists = self
            .franchise_store
            .exists_by_id(franchise_id)
            .await
            .map_err(ServiceError::from)
            .inspect_err(|err| log_failure("Franchise existence check", err))?;

        debug!("Franchise ID {} exists: {}", franchise_id, exists);
        Ok(exists)
    }

    async fn update_franchise_name(
        &self,
        franchise_id: &str,
        new_name: &str,
    ) -> ServiceResult<Option<Franchise>> {
        self.rename(franchise_id, new_name)
            .await
            .inspect(|renamed| {
                if let Some(franchise) = renamed {
                    info!("Franchise renamed. ID: {}", franchise.id);
                }
            })
            .inspect_err(|err| log_failure("Franchise rename", err))
    }
}
