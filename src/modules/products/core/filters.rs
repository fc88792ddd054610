use thiserror::Error;

use crate::modules::products::core::product::Product;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    #[error("invalid minPrice")]
    InvalidMinPrice,

    #[error("invalid maxPrice")]
    InvalidMaxPrice,

    #[error("invalid active filter")]
    InvalidActive,
}

/// Parsed listing constraints. All present constraints must hold.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProductFilter {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub active: Option<bool>,
}

impl ProductFilter {
    /// Builds a filter from raw query values, checking min price, max price
    /// and active in that order.
    pub fn parse(
        min_price: Option<&str>,
        max_price: Option<&str>,
        active: Option<&str>,
    ) -> Result<Self, FilterError> {
        let min_price = min_price
            .map(|raw| parse_price(raw).ok_or(FilterError::InvalidMinPrice))
            .transpose()?;
        let max_price = max_price
            .map(|raw| parse_price(raw).ok_or(FilterError::InvalidMaxPrice))
            .transpose()?;
        let active = active
            .map(|raw| match raw {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(FilterError::InvalidActive),
            })
            .transpose()?;

        Ok(Self {
            min_price,
            max_price,
            active,
        })
    }

    pub fn matches(&self, product: &Product) -> bool {
        let price = product.price_value();
        self.min_price.is_none_or(|min| price >= min)
            && self.max_price.is_none_or(|max| price <= max)
            && self.active.is_none_or(|active| product.active == active)
    }
}

fn parse_price(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
