use serde_json::json;

use crate::modules::products::core::errors::ApplicationError;
use crate::modules::products::core::product::Product;
use crate::modules::products::core::validation::ProductPayload;
use crate::shell::state::AppState;

/// Creates the demo records through the regular create path.
pub async fn seed_demo_products(state: &AppState) -> Result<Vec<Product>, ApplicationError> {
    let rows = [
        json!({"nombre": "Pen", "precio": 1.5, "stock": 100, "activo": true}),
        json!({"nombre": "Notebook", "precio": 3.25, "stock": 40, "activo": true}),
    ];

    let mut seeded = Vec::with_capacity(rows.len());
    for row in rows {
        let payload = ProductPayload::from_value(row)?;
        seeded.push(state.create_product.handle(payload).await?);
    }
    Ok(seeded)
}
