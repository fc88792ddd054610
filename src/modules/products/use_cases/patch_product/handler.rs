use crate::modules::products::core::errors::ApplicationError;
use crate::modules::products::core::ports::ProductRepository;
use crate::modules::products::core::product::Product;
use crate::modules::products::core::validation::{ProductPayload, validate_changes};
use std::sync::Arc;

pub struct PatchProductHandler<TRepository>
where
    TRepository: ProductRepository + ?Sized + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> PatchProductHandler<TRepository>
where
    TRepository: ProductRepository + ?Sized + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    /// Merges the submitted fields into an existing record. An unknown id is
    /// reported as not found even when the submission is also invalid.
    pub async fn handle(&self, id: &str, payload: ProductPayload) -> Result<Product, ApplicationError> {
        let changes = match validate_changes(payload) {
            Ok(changes) => changes,
            Err(err) => {
                return match self.repository.find(id).await? {
                    Some(_) => Err(err.into()),
                    None => Err(ApplicationError::NotFound),
                };
            }
        };

        let product = self
            .repository
            .update(id, changes)
            .await?
            .ok_or(ApplicationError::NotFound)?;
        tracing::info!(product_id = %product.id, "product updated");
        Ok(product)
    }
}
