// Ports define what the catalog needs from storage, without implementing it.
//
// Every operation is atomic with respect to the others: a lookup followed by
// a write happens under one exclusive section in the adapter, so callers never
// observe a half-applied request.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::products::core::product::{Product, ProductChanges, ProductDraft};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upserted {
    Created,
    Updated,
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All records, in insertion order.
    async fn list(&self) -> Result<Vec<Product>, RepositoryError>;

    async fn find(&self, id: &str) -> Result<Option<Product>, RepositoryError>;

    /// Appends a new record at the end of the collection.
    async fn insert(&self, product: Product) -> Result<(), RepositoryError>;

    /// Overwrites the record with this id in place, or appends it when absent.
    async fn upsert(&self, id: &str, draft: ProductDraft) -> Result<(Product, Upserted), RepositoryError>;

    /// Merges changes into an existing record. `None` when the id is unknown.
    async fn update(&self, id: &str, changes: ProductChanges) -> Result<Option<Product>, RepositoryError>;

    /// `false` when nothing was removed.
    async fn remove(&self, id: &str) -> Result<bool, RepositoryError>;
}
