//! Store double for service tests: counts calls and can fail on demand.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use stockpile_common::error::{StoreError, StoreResult};
use stockpile_common::models::{BranchDocument, FranchiseDocument, ProductDocument};
use stockpile_common::ports::{BranchStore, FranchiseStore, ProductStore};

use crate::store::DocumentStore;

#[derive(Default)]
pub struct RecordingStore {
    inner: DocumentStore,
    reads: AtomicUsize,
    writes: AtomicUsize,
    fail_reads: bool,
    fail_writes: bool,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.reads() + self.writes()
    }

    // Seeding goes straight to the inner store and is not counted.

    pub async fn seed_franchise(&self, id: &str, name: &str) {
        let doc = FranchiseDocument {
            id: Some(id.into()),
            name: name.into(),
        };
        FranchiseStore::save(&self.inner, doc).await.unwrap();
    }

    pub async fn seed_branch(&self, franchise_id: &str, id: &str, name: &str) {
        let doc = BranchDocument {
            id: Some(id.into()),
            franchise_id: franchise_id.into(),
            name: name.into(),
        };
        BranchStore::save(&self.inner, doc).await.unwrap();
    }

    pub async fn seed_product(
        &self,
        franchise_id: &str,
        branch_id: &str,
        id: &str,
        name: &str,
        stock: i32,
    ) {
        let doc = ProductDocument {
            id: Some(id.into()),
            franchise_id: franchise_id.into(),
            branch_id: branch_id.into(),
            name: name.into(),
            stock,
        };
        ProductStore::save(&self.inner, doc).await.unwrap();
    }

    fn read(&self) -> StoreResult<()> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads {
            return Err(StoreError::Unavailable("DB error".into()));
        }
        Ok(())
    }

    fn write(&self) -> StoreResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(StoreError::Unavailable("DB error".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl FranchiseStore for RecordingStore {
    async fn save(&self, doc: FranchiseDocument) -> StoreResult<FranchiseDocument> {
        self.write()?;
        FranchiseStore::save(&self.inner, doc).await
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<FranchiseDocument>> {
        self.read()?;
        self.inner.find_by_id(id).await
    }

    async fn exists_by_id(&self, id: &str) -> StoreResult<bool> {
        self.read()?;
        self.inner.exists_by_id(id).await
    }
}

#[async_trait]
impl BranchStore for RecordingStore {
    async fn save(&self, doc: BranchDocument) -> StoreResult<BranchDocument> {
        self.write()?;
        BranchStore::save(&self.inner, doc).await
    }

    async fn find_by_franchise_id_and_id(
        &self,
        franchise_id: &str,
        id: &str,
    ) -> StoreResult<Option<BranchDocument>> {
        self.read()?;
        self.inner.find_by_franchise_id_and_id(franchise_id, id).await
    }

    async fn exists_by_franchise_id_and_id(
        &self,
        franchise_id: &str,
        id: &str,
    ) -> StoreResult<bool> {
        self.read()?;
        self.inner.exists_by_franchise_id_and_id(franchise_id, id).await
    }
}

#[async_trait]
impl ProductStore for RecordingStore {
    async fn save(&self, doc: ProductDocument) -> StoreResult<ProductDocument> {
        self.write()?;
        ProductStore::save(&self.inner, doc).await
    }

    async fn find_by_franchise_id_and_branch_id_and_id(
        &self,
        franchise_id: &str,
        branch_id: &str,
        id: &str,
    ) -> StoreResult<Option<ProductDocument>> {
        self.read()?;
        self.inner
            .find_by_franchise_id_and_branch_id_and_id(franchise_id, branch_id, id)
            .await
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        self.write()?;
        self.inner.delete_by_id(id).await
    }

    async fn find_by_franchise_id(&self, franchise_id: &str) -> StoreResult<Vec<ProductDocument>> {
        self.read()?;
        self.inner.find_by_franchise_id(franchise_id).await
    }
}
