use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A stored catalog record. Field names on the wire follow the catalog's
/// original JSON contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: Number,
    pub stock: Number,
    #[serde(rename = "activo")]
    pub active: bool,
}

/// A fully validated candidate record, ready to be stored under some id.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: Number,
    pub stock: Number,
    pub active: bool,
}

/// Validated field assignments for a partial update. `None` leaves the
/// stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<Number>,
    pub stock: Option<Number>,
    pub active: Option<bool>,
}

impl Product {
    pub fn from_draft(id: impl Into<String>, draft: ProductDraft) -> Self {
        Self {
            id: id.into(),
            name: draft.name,
            price: draft.price,
            stock: draft.stock,
            active: draft.active,
        }
    }

    /// Overwrites every data field, keeping the id.
    pub fn replace_with(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.price = draft.price;
        self.stock = draft.stock;
        self.active = draft.active;
    }

    pub fn apply(&mut self, changes: ProductChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(stock) = changes.stock {
            self.stock = stock;
        }
        if let Some(active) = changes.active {
            self.active = active;
        }
    }

    pub fn price_value(&self) -> f64 {
        self.price.as_f64().unwrap_or(0.0)
    }
}
