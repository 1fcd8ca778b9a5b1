use std::sync::Arc;

use stockpile_common::ports::{
    BranchPort, BranchStore, FranchisePort, FranchiseStore, ProductPort, ProductStore,
};

use crate::services::{BranchService, FranchiseService, ProductService};

/// The three services, wired over one store.
#[derive(Clone)]
pub struct Services {
    pub franchises: Arc<dyn FranchisePort>,
    pub branches: Arc<dyn BranchPort>,
    pub products: Arc<dyn ProductPort>,
}

impl Services {
    pub fn over<S>(store: Arc<S>) -> Self
    where
        S: FranchiseStore + BranchStore + ProductStore + 'static,
    {
        let franchises: Arc<dyn FranchisePort> = Arc::new(FranchiseService::new(store.clone()));
        let branches: Arc<dyn BranchPort> =
            Arc::new(BranchService::new(franchises.clone(), store.clone()));
        let products: Arc<dyn ProductPort> = Arc::new(ProductService::new(
            franchises.clone(),
            branches.clone(),
            store,
        ));

        Self {
            franchises,
            branches,
            products,
        }
    }
}
