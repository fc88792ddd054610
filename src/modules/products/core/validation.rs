use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};
use thiserror::Error;

use crate::modules::products::core::product::{ProductChanges, ProductDraft};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid name")]
    InvalidName,

    #[error("invalid price")]
    InvalidPrice,

    #[error("invalid stock")]
    InvalidStock,

    #[error("invalid active")]
    InvalidActive,

    #[error("invalid JSON body")]
    InvalidBody,
}

/// Loosely typed request body. Each recognised key is kept as raw JSON so
/// that type mismatches surface as field errors instead of decode errors.
/// Unknown keys are dropped.
#[derive(Debug, Default, Deserialize)]
pub struct ProductPayload {
    #[serde(default, rename = "nombre", alias = "name", deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, rename = "precio", alias = "price", deserialize_with = "present")]
    pub price: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub stock: Option<Value>,
    #[serde(default, rename = "activo", alias = "active", deserialize_with = "present")]
    pub active: Option<Value>,
}

// A key sent as `null` is still a submitted key.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl ProductPayload {
    pub fn from_value(body: Value) -> Result<Self, ValidationError> {
        if !body.is_object() {
            return Err(ValidationError::InvalidBody);
        }
        serde_json::from_value(body).map_err(|_| ValidationError::InvalidBody)
    }
}

/// Checks a full record in the order name, price, stock, active and reports
/// the first failure only.
pub fn validate_draft(payload: ProductPayload) -> Result<ProductDraft, ValidationError> {
    Ok(ProductDraft {
        name: check_name(payload.name)?,
        price: check_amount(payload.price, ValidationError::InvalidPrice)?,
        stock: check_amount(payload.stock, ValidationError::InvalidStock)?,
        active: check_active(payload.active)?,
    })
}

/// Checks only the submitted fields, in the same order as [`validate_draft`].
pub fn validate_changes(payload: ProductPayload) -> Result<ProductChanges, ValidationError> {
    let name = payload.name.map(|v| check_name(Some(v))).transpose()?;
    let price = payload
        .price
        .map(|v| check_amount(Some(v), ValidationError::InvalidPrice))
        .transpose()?;
    let stock = payload
        .stock
        .map(|v| check_amount(Some(v), ValidationError::InvalidStock))
        .transpose()?;
    let active = payload.active.map(|v| check_active(Some(v))).transpose()?;

    Ok(ProductChanges {
        name,
        price,
        stock,
        active,
    })
}

fn check_name(value: Option<Value>) -> Result<String, ValidationError> {
    match value {
        Some(Value::String(name)) if !name.trim().is_empty() => Ok(name.trim().to_string()),
        _ => Err(ValidationError::InvalidName),
    }
}

fn check_amount(value: Option<Value>, error: ValidationError) -> Result<Number, ValidationError> {
    match value {
        Some(Value::Number(n)) if n.as_f64().is_some_and(|v| v.is_finite() && v >= 0.0) => Ok(n),
        _ => Err(error),
    }
}

fn check_active(value: Option<Value>) -> Result<bool, ValidationError> {
    match value {
        Some(Value::Bool(active)) => Ok(active),
        _ => Err(ValidationError::InvalidActive),
    }
}
