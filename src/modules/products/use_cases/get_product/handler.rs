use crate::modules::products::core::errors::ApplicationError;
use crate::modules::products::core::ports::ProductRepository;
use crate::modules::products::core::product::Product;
use std::sync::Arc;

pub struct GetProductHandler<TRepository>
where
    TRepository: ProductRepository + ?Sized + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> GetProductHandler<TRepository>
where
    TRepository: ProductRepository + ?Sized + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, id: &str) -> Result<Product, ApplicationError> {
        self.repository
            .find(id)
            .await?
            .ok_or(ApplicationError::NotFound)
    }
}
