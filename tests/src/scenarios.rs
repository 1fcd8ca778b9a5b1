mod lifecycle;
mod persistence;

use std::sync::Arc;

use stockpile_common::error::ServiceError;
use stockpile_core::store::DocumentStore;
use stockpile_core::wiring::Services;

pub fn in_memory_services() -> Services {
    Services::over(Arc::new(DocumentStore::in_memory()))
}

pub fn rejection(err: ServiceError) -> String {
    match err {
        ServiceError::InvalidArgument(reason) => reason,
        other => panic!("expected a rejected request, got {other:?}"),
    }
}
