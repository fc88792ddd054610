use crate::modules::products::core::errors::ApplicationError;
use crate::modules::products::core::ports::{ProductRepository, Upserted};
use crate::modules::products::core::product::Product;
use crate::modules::products::core::validation::{ProductPayload, validate_draft};
use std::sync::Arc;

pub struct ReplaceProductHandler<TRepository>
where
    TRepository: ProductRepository + ?Sized + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> ReplaceProductHandler<TRepository>
where
    TRepository: ProductRepository + ?Sized + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    /// Replaces the record stored under `id`, creating it under that exact id
    /// when it does not exist yet. Never fails with not found.
    pub async fn handle(
        &self,
        id: &str,
        payload: ProductPayload,
    ) -> Result<(Product, Upserted), ApplicationError> {
        let draft = validate_draft(payload)?;
        let (product, outcome) = self.repository.upsert(id, draft).await?;

        match outcome {
            Upserted::Created => {
                tracing::info!(product_id = %product.id, "product created by upsert")
            }
            Upserted::Updated => tracing::info!(product_id = %product.id, "product replaced"),
        }
        Ok((product, outcome))
    }
}
