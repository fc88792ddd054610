use crate::modules::products::core::errors::ApplicationError;
use crate::modules::products::core::filters::ProductFilter;
use crate::modules::products::core::ports::ProductRepository;
use crate::modules::products::core::product::Product;
use serde::Deserialize;
use std::sync::Arc;

/// Raw listing query, string typed as received.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListProducts {
    #[serde(rename = "minPrice")]
    pub min_price: Option<String>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<String>,
    pub active: Option<String>,
}

pub struct ListProductsHandler<TRepository>
where
    TRepository: ProductRepository + ?Sized + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> ListProductsHandler<TRepository>
where
    TRepository: ProductRepository + ?Sized + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListProducts) -> Result<Vec<Product>, ApplicationError> {
        let filter = ProductFilter::parse(
            query.min_price.as_deref(),
            query.max_price.as_deref(),
            query.active.as_deref(),
        )?;

        let mut products = self.repository.list().await?;
        products.retain(|p| filter.matches(p));
        Ok(products)
    }
}
