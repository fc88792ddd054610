use thiserror::Error;

use crate::modules::products::core::filters::FilterError;
use crate::modules::products::core::ports::RepositoryError;
use crate::modules::products::core::validation::ValidationError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("product not found")]
    NotFound,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
