// In memory product repository.
//
// Purpose
// - Hold the catalog for the lifetime of the process. Nothing survives a restart.
//
// Responsibilities
// - Keep records in insertion order.
// - Run each read-modify-write under a single write guard.

use crate::modules::products::core::ports::{ProductRepository, RepositoryError, Upserted};
use crate::modules::products::core::product::{Product, ProductChanges, ProductDraft};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryProducts {
    rows: RwLock<Vec<Product>>,
    is_offline: bool,
}

impl InMemoryProducts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Product repository offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProductRepository for InMemoryProducts {
    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.clone())
    }

    async fn find(&self, id: &str) -> Result<Option<Product>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, product: Product) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        if guard.iter().any(|p| p.id == product.id) {
            return Err(RepositoryError::Backend(format!(
                "duplicate product id {}",
                product.id
            )));
        }
        guard.push(product);
        Ok(())
    }

    async fn upsert(
        &self,
        id: &str,
        draft: ProductDraft,
    ) -> Result<(Product, Upserted), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        match guard.iter_mut().find(|p| p.id == id) {
            Some(existing) => {
                existing.replace_with(draft);
                Ok((existing.clone(), Upserted::Updated))
            }
            None => {
                let product = Product::from_draft(id, draft);
                guard.push(product.clone());
                Ok((product, Upserted::Created))
            }
        }
    }

    async fn update(
        &self,
        id: &str,
        changes: ProductChanges,
    ) -> Result<Option<Product>, RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        Ok(guard.iter_mut().find(|p| p.id == id).map(|existing| {
            existing.apply(changes);
            existing.clone()
        }))
    }

    async fn remove(&self, id: &str) -> Result<bool, RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        match guard.iter().position(|p| p.id == id) {
            Some(index) => {
                guard.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
