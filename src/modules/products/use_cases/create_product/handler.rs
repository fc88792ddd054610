use crate::modules::products::core::errors::ApplicationError;
use crate::modules::products::core::ports::ProductRepository;
use crate::modules::products::core::product::Product;
use crate::modules::products::core::validation::{ProductPayload, validate_draft};
use std::sync::Arc;
use uuid::Uuid;

pub struct CreateProductHandler<TRepository>
where
    TRepository: ProductRepository + ?Sized + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> CreateProductHandler<TRepository>
where
    TRepository: ProductRepository + ?Sized + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, payload: ProductPayload) -> Result<Product, ApplicationError> {
        let draft = validate_draft(payload)?;
        let product = Product::from_draft(Uuid::new_v4().to_string(), draft);

        self.repository.insert(product.clone()).await?;
        tracing::info!(product_id = %product.id, "product created");
        Ok(product)
    }
}
