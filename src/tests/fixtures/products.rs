// Shared product fixtures for unit and e2e tests.

use crate::modules::products::adapters::outbound::products_in_memory::InMemoryProducts;
use crate::modules::products::core::ports::ProductRepository;
use crate::modules::products::core::product::{Product, ProductDraft};
use crate::modules::products::core::validation::ProductPayload;
use serde_json::{Number, Value};
use uuid::Uuid;

pub struct ProductDraftBuilder {
    inner: ProductDraft,
}

impl Default for ProductDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ProductDraftBuilder {
    pub fn new() -> Self {
        Self {
            inner: ProductDraft {
                name: "Pen".to_string(),
                price: number(Value::from(1.5)),
                stock: Number::from(100),
                active: true,
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn price(mut self, v: Value) -> Self {
        self.inner.price = number(v);
        self
    }

    pub fn stock(mut self, v: Value) -> Self {
        self.inner.stock = number(v);
        self
    }

    pub fn active(mut self, v: bool) -> Self {
        self.inner.active = v;
        self
    }

    pub fn build(self) -> ProductDraft {
        self.inner
    }
}

fn number(v: Value) -> Number {
    match v {
        Value::Number(n) => n,
        other => panic!("expected a JSON number, got {other}"),
    }
}

pub fn payload(body: Value) -> ProductPayload {
    ProductPayload::from_value(body).expect("fixture payload must be an object")
}

/// Inserts `(name, price, active)` rows with generated ids and returns them in
/// insertion order.
pub async fn seed_products(
    repository: &InMemoryProducts,
    rows: &[(&str, Value, bool)],
) -> Vec<Product> {
    let mut seeded = Vec::with_capacity(rows.len());
    for (name, price, active) in rows {
        let draft = ProductDraftBuilder::new()
            .name(*name)
            .price(price.clone())
            .active(*active)
            .build();
        let product = Product::from_draft(Uuid::new_v4().to_string(), draft);
        repository
            .insert(product.clone())
            .await
            .expect("seed insert failed");
        seeded.push(product);
    }
    seeded
}
