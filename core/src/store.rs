//! # Document Store
//!
//! [`DocumentStore`] keeps the `franchises`, `branches` and `products`
//! collections in memory and implements every outbound port over them.
//!
//! Opened with [`DocumentStore::open`], the collections are loaded from a JSON
//! snapshot and every mutation rewrites that snapshot before returning, so a
//! restarted process sees the same documents. A mutation is staged on a copy
//! of the collections and only becomes visible once the snapshot is written.
//!
//! Ids are UUID v4 strings assigned on the first `save` of a document.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use stockpile_common::error::StoreResult;
use stockpile_common::models::{BranchDocument, FranchiseDocument, ProductDocument};
use stockpile_common::ports::{BranchStore, FranchiseStore, ProductStore};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

mod snapshot;

use snapshot::Snapshot;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub(crate) struct Collections {
    #[serde(default)]
    franchises: BTreeMap<String, FranchiseDocument>,
    #[serde(default)]
    branches: BTreeMap<String, BranchDocument>,
    #[serde(default)]
    products: BTreeMap<String, ProductDocument>,
}

#[derive(Debug, Default)]
pub struct DocumentStore {
    collections: RwLock<Collections>,
    snapshot: Option<Snapshot>,
}

impl DocumentStore {
    /// A store that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Opens a store backed by the JSON snapshot at `path`.
    ///
    /// A missing file yields an empty store; the file is created on the first write.
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let snapshot = Snapshot::new(path.into());
        let collections = snapshot.load().await?;
        debug!(
            "Loaded {} franchises, {} branches, {} products from {}",
            collections.franchises.len(),
            collections.branches.len(),
            collections.products.len(),
            snapshot.path().display()
        );

        Ok(Self {
            collections: RwLock::new(collections),
            snapshot: Some(snapshot),
        })
    }

    /// Applies `change` and keeps it only if the snapshot write succeeds.
    ///
    /// `change` reports whether it touched anything; untouched collections are not rewritten.
    async fn commit<F>(&self, change: F) -> StoreResult<()>
    where
        F: FnOnce(&mut Collections) -> bool + Send,
    {
        let mut collections = self.collections.write().await;
        let Some(snapshot) = &self.snapshot else {
            change(&mut *collections);
            return Ok(());
        };

        let mut staged = collections.clone();
        if change(&mut staged) {
            snapshot.write(&staged).await?;
            *collections = staged;
        }
        Ok(())
    }
}

fn assign_id(id: &mut Option<String>) -> String {
    id.get_or_insert_with(|| Uuid::new_v4().to_string()).clone()
}

#[async_trait]
impl FranchiseStore for DocumentStore {
    async fn save(&self, mut doc: FranchiseDocument) -> StoreResult<FranchiseDocument> {
        let id = assign_id(&mut doc.id);
        let stored = doc.clone();
        self.commit(move |collections| {
            collections.franchises.insert(id, stored);
            true
        })
        .await?;
        Ok(doc)
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<FranchiseDocument>> {
        Ok(self.collections.read().await.franchises.get(id).cloned())
    }

    async fn exists_by_id(&self, id: &str) -> StoreResult<bool> {
        Ok(self.collections.read().await.franchises.contains_key(id))
    }
}

#[async_trait]
impl BranchStore for DocumentStore {
    async fn save(&self, mut doc: BranchDocument) -> StoreResult<BranchDocument> {
        let id = assign_id(&mut doc.id);
        let stored = doc.clone();
        self.commit(move |collections| {
            collections.branches.insert(id, stored);
            true
        })
        .await?;
        Ok(doc)
    }

    async fn find_by_franchise_id_and_id(
        &self,
        franchise_id: &str,
        id: &str,
    ) -> StoreResult<Option<BranchDocument>> {
        let collections = self.collections.read().await;
        Ok(collections
            .branches
            .get(id)
            .filter(|branch| branch.franchise_id == franchise_id)
            .cloned())
    }

    async fn exists_by_franchise_id_and_id(
        &self,
        franchise_id: &str,
        id: &str,
    ) -> StoreResult<bool> {
        let collections = self.collections.read().await;
        Ok(collections
            .branches
            .get(id)
            .is_some_and(|branch| branch.franchise_id == franchise_id))
    }
}

#[async_trait]
impl ProductStore for DocumentStore {
    async fn save(&self, mut doc: ProductDocument) -> StoreResult<ProductDocument> {
        let id = assign_id(&mut doc.id);
        let stored = doc.clone();
        self.commit(move |collections| {
            collections.products.insert(id, stored);
            true
        })
        .await?;
        Ok(doc)
    }

    async fn find_by_franchise_id_and_branch_id_and_id(
        &self,
        franchise_id: &str,
        branch_id: &str,
        id: &str,
    ) -> StoreResult<Option<ProductDocument>> {
        let collections = self.collections.read().await;
        Ok(collections
            .products
            .get(id)
            .filter(|product| {
                product.franchise_id == franchise_id && product.branch_id == branch_id
            })
            .cloned())
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        self.commit(|collections| collections.products.remove(id).is_some())
            .await
    }

    async fn find_by_franchise_id(&self, franchise_id: &str) -> StoreResult<Vec<ProductDocument>> {
        let collections = self.collections.read().await;
        Ok(collections
            .products
            .values()
            .filter(|product| product.franchise_id == franchise_id)
            .cloned()
            .collect())
    }
}
