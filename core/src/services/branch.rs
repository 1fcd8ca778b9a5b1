use std::sync::Arc;

use async_trait::async_trait;
use stockpile_common::error::{ServiceError, ServiceResult};
use stockpile_common::models::{Branch, BranchDocument};
use stockpile_common::ports::{BranchPort, BranchStore, FranchisePort};
use stockpile_common::validation::{any_blank, clean_name, is_blank};
use tracing::{debug, info};

use super::log_failure;

const FRANCHISE_ID_REQUIRED: &str = "Franchise id must not be null or empty";
const FRANCHISE_MISSING: &str = "Franchise does not exist";
const NAME_REQUIRED: &str = "Branch name must not be null or empty";
const IDS_REQUIRED: &str = "Franchise ID or Branch ID must not be null or empty";

/// Validates and persists branches.
///
/// The owning franchise is checked through a [`FranchisePort`] before the
/// branch name is looked at, so a missing franchise wins over a bad name.
pub struct BranchService {
    franchises: Arc<dyn FranchisePort>,
    branch_store: Arc<dyn BranchStore>,
}

impl BranchService {
    pub fn new(franchises: Arc<dyn FranchisePort>, branch_store: Arc<dyn BranchStore>) -> Self {
        Self {
            franchises,
            branch_store,
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

    async fn create(&self, franchise_id: &str, branch_name: &str) -> ServiceResult<Branch> {
        self.require_franchise(franchise_id).await?;
        let name = clean_name(branch_name).ok_or_else(|| ServiceError::invalid(NAME_REQUIRED))?;

        let saved = self
            .branch_store
            .save(BranchDocument::new(franchise_id.to_string(), name))
            .await?;
        Ok(saved.into())
    }

    async fn rename(
        &self,
        franchise_id: &str,
        branch_id: &str,
        new_name: &str,
    ) -> ServiceResult<Option<Branch>> {
        if any_blank(&[franchise_id, branch_id]) {
            return Err(ServiceError::invalid(IDS_REQUIRED));
        }
        let new_name = clean_name(new_name).ok_or_else(|| ServiceError::invalid(NAME_REQUIRED))?;

        let Some(doc) = self
            .branch_store
            .find_by_franchise_id_and_id(franchise_id, branch_id)
            .await?
        else {
            debug!(
                "No branch {} under franchise {} to rename",
                branch_id, franchise_id
            );
            return Ok(None);
        };

        let saved = self.branch_store.save(doc.with_name(new_name)).await?;
        Ok(Some(saved.into()))
    }
}

#[async_trait]
impl BranchPort for BranchService {
    async fn create_branch(&self, franchise_id: &str, branch_name: &str) -> ServiceResult<Branch> {
        info!("Starting branch creation. Branch name: {}", branch_name);

        self.create(franchise_id, branch_name)
            .await
            .inspect(|branch| {
                info!(
                    "Branch created. Branch ID: {}, Name: {}",
                    branch.id, branch.name
                )
            })
            .inspect_err(|err| log_failure("Branch creation", err))
    }

    async fn exists_branch(&self, franchise_id: &str, branch_id: &str) -> ServiceResult<bool> {
        if any_blank(&[franchise_id, branch_id]) {
            let err = ServiceError::invalid(IDS_REQUIRED);
            log_failure("Branch existence check", &err);
            return Err(err);
        }

        let exists = self
            .branch_store
            .exists_by_franchise_id_and_id(franchise_id, branch_id)
            .await
            .map_err(ServiceError::from)
            .inspect_err(|err| log_failure("Branch existence check", err))?;

        debug!("Branch ID {} exists: {}", branch_id, exists);
        Ok(exists)
    }

    async fn update_branch_name(
        &self,
        franchise_id: &str,
        branch_id: &str,
        new_name: &str,
    ) -> ServiceResult<Option<Branch>> {
        self.rename(franchise_id, branch_id, new_name)
            .await
            .inspect(|renamed| {
                if let Some(branch) = renamed {
                    info!("Branch renamed. ID: {}", branch.id);
                }
            })
            .inspect_err(|err| log_failure("Branch rename", err))
    }
}
