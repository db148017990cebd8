//! Shared helpers for the HTTP integration tests

#![allow(dead_code)]

use axum_test::TestServer;
use grubdash::prelude::*;
use serde_json::{Value, json};

/// A server over an empty store with predictable ids (`id1`, `id2`, ...)
pub fn empty_server() -> TestServer {
    server_with(AppConfig::default())
}

/// A server seeded from `config`
pub fn server_with(config: AppConfig) -> TestServer {
    let app = ServerBuilder::new()
        .with_config(config)
        .with_id_generator(SequentialIdGenerator::new("id"))
        .build()
        .unwrap();
    TestServer::new(app)
}

pub fn taco() -> Value {
    json!({"data": {"name": "Taco", "description": "d", "price": 3, "image_url": "u"}})
}

pub fn new_order() -> Value {
    json!({"data": {"deliverTo": "A", "mobileNumber": "555", "dishes": [{"dishId": "x", "quantity": 2}]}})
}

/// Order update body with the given status
pub fn order_update(status: &str) -> Value {
    json!({"data": {
        "deliverTo": "B",
        "mobileNumber": "556",
        "status": status,
        "dishes": [{"dishId": "x", "quantity": 3}]
    }})
}

/// POST a body and return the created record's id
pub async fn create(server: &TestServer, path: &str, body: &Value) -> String {
    let response = server.post(path).json(body).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let body: Value = response.json();
    body["data"]["id"].as_str().unwrap().to_string()
}

/// Number of records a list endpoint returns
pub async fn count(server: &TestServer, path: &str) -> usize {
    let body: Value = server.get(path).await.json();
    body["data"].as_array().unwrap().len()
}
