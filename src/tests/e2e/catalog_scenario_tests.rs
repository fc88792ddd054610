use crate::modules::products::adapters::outbound::products_in_memory::InMemoryProducts;
use crate::modules::products::core::ports::ProductRepository;
use crate::shell::seed::seed_demo_products;
use crate::shell::state::AppState;
use crate::tests::fixtures::http::{app, empty_request, json_request, send};
use axum::http::{Method, StatusCode};
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;

#[rstest]
#[tokio::test]
async fn seeded_catalog_survives_a_delete_and_relists() {
    let repository = Arc::new(InMemoryProducts::new());
    let seeded = seed_demo_products(&AppState::new(repository.clone()))
        .await
        .unwrap();
    let first_id = seeded[0].id.clone();

    let (status, _, active) = send(
        app(repository.clone()),
        empty_request(Method::GET, "/products?active=true"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(active.as_array().unwrap().len(), 2);

    let uri = format!("/products/{first_id}");
    let (status, _, _) = send(app(repository.clone()), empty_request(Method::DELETE, &uri)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _, _) = send(app(repository.clone()), empty_request(Method::GET, &uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, remaining) =
        send(app(repository.clone()), empty_request(Method::GET, "/products")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(remaining.as_array().unwrap().len(), 1);
    assert_eq!(remaining[0]["nombre"], json!("Notebook"));
}

#[rstest]
#[tokio::test]
async fn created_product_is_retrievable_with_identical_fields() {
    let repository = Arc::new(InMemoryProducts::new());

    let (status, _, created) = send(
        app(repository.clone()),
        json_request(
            Method::POST,
            "/products",
            r#"{"name":"  Stapler ","price":12.5,"stock":3,"active":false}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let id = created["id"].as_str().unwrap();
    let (status, _, fetched) = send(
        app(repository.clone()),
        empty_request(Method::GET, &format!("/products/{id}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
    assert_eq!(fetched["nombre"], json!("Stapler"));
}

#[rstest]
#[tokio::test]
async fn invariants_hold_across_a_mixed_sequence() {
    let repository = Arc::new(InMemoryProducts::new());
    let requests = [
        json_request(Method::POST, "/products", r#"{"nombre":"Pen","precio":1,"stock":1,"activo":true}"#),
        json_request(Method::POST, "/products", r#"{"nombre":" ","precio":1,"stock":1,"activo":true}"#),
        json_request(Method::PUT, "/products/x", r#"{"nombre":"Lamp","precio":-5,"stock":1,"activo":true}"#),
        json_request(Method::PUT, "/products/y", r#"{"nombre":"Lamp","precio":5,"stock":0,"activo":true}"#),
        json_request(Method::PATCH, "/products/y", r#"{"stock":-1}"#),
        json_request(Method::PATCH, "/products/y", r#"{"nombre":""}"#),
        json_request(Method::PATCH, "/products/y", r#"{"precio":7.5}"#),
        empty_request(Method::GET, "/products?minPrice=abc"),
    ];
    for request in requests {
        send(app(repository.clone()), request).await;
    }

    let stored = repository.list().await.unwrap();
    assert_eq!(stored.len(), 2);
    for product in &stored {
        assert!(!product.name.trim().is_empty());
        assert!(product.price.as_f64().unwrap() >= 0.0);
        assert!(product.stock.as_f64().unwrap() >= 0.0);
    }
    assert_eq!(stored[1].id, "y");
    assert_eq!(stored[1].price_value(), 7.5);
}

#[rstest]
#[tokio::test]
async fn min_and_max_price_return_the_intersection() {
    let repository = Arc::new(InMemoryProducts::new());
    for (name, price) in [("A", 1), ("B", 5), ("C", 10), ("D", 15)] {
        let body = json!({"nombre": name, "precio": price, "stock": 1, "activo": true});
        send(
            app(repository.clone()),
            json_request(Method::POST, "/products", body.to_string()),
        )
        .await;
    }

    let (_, _, listed) = send(
        app(repository.clone()),
        empty_request(Method::GET, "/products?minPrice=5&maxPrice=10"),
    )
    .await;

    let names: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|p: &Value| p["nombre"].as_str())
        .collect();
    assert_eq!(names, vec!["B", "C"]);
}
