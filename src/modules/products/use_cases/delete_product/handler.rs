use crate::modules::products::core::errors::ApplicationError;
use crate::modules::products::core::ports::ProductRepository;
use std::sync::Arc;

pub struct DeleteProductHandler<TRepository>
where
    TRepository: ProductRepository + ?Sized + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> DeleteProductHandler<TRepository>
where
    TRepository: ProductRepository + ?Sized + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, id: &str) -> Result<(), ApplicationError> {
        if !self.repository.remove(id).await? {
            return Err(ApplicationError::NotFound);
        }
        tracing::info!(product_id = %id, "product deleted");
        Ok(())
    }
}
