use crate::modules::products::core::ports::ProductRepository;
use crate::modules::products::use_cases::create_product::handler::CreateProductHandler;
use crate::modules::products::use_cases::delete_product::handler::DeleteProductHandler;
use crate::modules::products::use_cases::get_product::handler::GetProductHandler;
use crate::modules::products::use_cases::list_products::handler::ListProductsHandler;
use crate::modules::products::use_cases::patch_product::handler::PatchProductHandler;
use crate::modules::products::use_cases::replace_product::handler::ReplaceProductHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub list_products: Arc<ListProductsHandler<dyn ProductRepository>>,
    pub get_product: Arc<GetProductHandler<dyn ProductRepository>>,
    pub create_product: Arc<CreateProductHandler<dyn ProductRepository>>,
    pub replace_product: Arc<ReplaceProductHandler<dyn ProductRepository>>,
    pub patch_product: Arc<PatchProductHandler<dyn ProductRepository>>,
    pub delete_product: Arc<DeleteProductHandler<dyn ProductRepository>>,
}

impl AppState {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self {
            list_products: Arc::new(ListProductsHandler::new(repository.clone())),
            get_product: Arc::new(GetProductHandler::new(repository.clone())),
            create_product: Arc::new(CreateProductHandler::new(repository.clone())),
            replace_product: Arc::new(ReplaceProductHandler::new(repository.clone())),
            patch_product: Arc::new(PatchProductHandler::new(repository.clone())),
            delete_product: Arc::new(DeleteProductHandler::new(repository)),
        }
    }
}
