//! Car resource tests driven through the router.

use axum::http::StatusCode;
use serde_json::json;

mod common;

use common::{delete, get, post, put};

#[tokio::test]
async fn list_cars_of_dealership() {
    let router = common::seeded_router();

    let res = get(&router, "/dealerships/1/cars").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.body,
        json!([
            { "id": 1, "model": "Renault Clio", "horsepower": 75, "price": 9000 },
            { "id": 2, "model": "Nissan Skyline R34", "horsepower": 280, "price": 40000 }
        ])
    );
}

#[tokio::test]
async fn new_dealership_has_no_cars() {
    let router = common::empty_router();

    post(&router, "/dealerships", json!({ "name": "D", "address": "A" })).await;
    let res = get(&router, "/dealerships/1/cars").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, json!([]));
}

#[tokio::test]
async fn create_car_with_mixed_keys() {
    let router = common::seeded_router();

    let res = post(
        &router,
        "/dealerships/1/cars",
        json!({ "model": "Mazda MX-5", "cv": 160, "precio": 15000 }),
    )
    .await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(
        res.body,
        json!({ "id": 3, "model": "Mazda MX-5", "horsepower": 160, "price": 15000 })
    );

    let res = get(&router, "/dealerships/1").await;
    assert_eq!(res.body["cars"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn create_car_keeps_fractional_price() {
    let router = common::seeded_router();

    let res = post(
        &router,
        "/dealerships/2/cars",
        json!({ "model": "Seat Ibiza", "horsepower": 95, "price": 13999.5 }),
    )
    .await;
    assert_eq!(res.body["id"], 3);
    assert_eq!(res.body["price"], 13999.5);
}

#[tokio::test]
async fn create_car_on_missing_dealership_is_404() {
    let router = common::seeded_router();

    let res = post(&router, "/dealerships/99/cars", json!({ "model": "X" })).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body, json!({ "error": "Dealership not found" }));
}

#[tokio::test]
async fn get_car_not_found_variants() {
    let router = common::seeded_router();

    let res = get(&router, "/dealerships/99/cars/1").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body, json!({ "error": "Dealership not found" }));

    let res = get(&router, "/dealerships/99/cars/abc").await;
    assert_eq!(res.body, json!({ "error": "Dealership not found" }));

    let res = get(&router, "/dealerships/1/cars/9").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body, json!({ "error": "Car not found" }));

    let res = get(&router, "/dealerships/1/cars/abc").await;
    assert_eq!(res.body, json!({ "error": "Car not found" }));
}

#[tokio::test]
async fn get_car_returns_it() {
    let router = common::seeded_router();

    let res = get(&router, "/dealerships/2/cars/1").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.body,
        json!({ "id": 1, "model": "Ford Fiesta", "horsepower": 90, "price": 10000 })
    );
}

#[tokio::test]
async fn update_car_overwrites_truthy_fields() {
    let router = common::seeded_router();

    let res = put(
        &router,
        "/dealerships/2/cars/2",
        json!({ "model": "Toyota Corolla GR", "precio": 14500 }),
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.body,
        json!({ "id": 2, "model": "Toyota Corolla GR", "horsepower": 130, "price": 14500 })
    );
}

#[tokio::test]
async fn update_car_ignores_zero_and_empty() {
    let router = common::seeded_router();

    let res = put(
        &router,
        "/dealerships/1/cars/1",
        json!({ "model": "", "horsepower": 0, "price": 0 }),
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.body,
        json!({ "id": 1, "model": "Renault Clio", "horsepower": 75, "price": 9000 })
    );

    let res = put(&router, "/dealerships/1/cars/1", json!({})).await;
    assert_eq!(res.body["price"], 9000);
}

#[tokio::test]
async fn update_car_not_found_variants() {
    let router = common::seeded_router();

    let res = put(&router, "/dealerships/5/cars/1", json!({ "model": "X" })).await;
    assert_eq!(res.body, json!({ "error": "Dealership not found" }));

    let res = put(&router, "/dealerships/1/cars/5", json!({ "model": "X" })).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body, json!({ "error": "Car not found" }));
}

#[tokio::test]
async fn delete_car_then_get_is_404() {
    let router = common::seeded_router();

    let res = delete(&router, "/dealerships/1/cars/1").await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);
    assert!(res.raw.is_empty());

    let res = get(&router, "/dealerships/1/cars/1").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body, json!({ "error": "Car not found" }));

    let res = get(&router, "/dealerships/1/cars").await;
    assert_eq!(res.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn delete_car_not_found_variants() {
    let router = common::seeded_router();

    let res = delete(&router, "/dealerships/3/cars/1").await;
    assert_eq!(res.body, json!({ "error": "Dealership not found" }));

    let res = delete(&router, "/dealerships/1/cars/3").await;
    assert_eq!(res.body, json!({ "error": "Car not found" }));
}

#[tokio::test]
async fn car_id_reuse_after_delete_is_preserved() {
    let router = common::seeded_router();

    delete(&router, "/dealerships/1/cars/1").await;
    let res = post(&router, "/dealerships/1/cars", json!({ "model": "Dacia Sandero" })).await;
    assert_eq!(res.body, json!({ "id": 2, "model": "Dacia Sandero" }));

    // The surviving car 2 is found first.
    let res = get(&router, "/dealerships/1/cars/2").await;
    assert_eq!(res.body["model"], "Nissan Skyline R34");
}

#[tokio::test]
async fn spanish_car_paths() {
    let router = common::seeded_router();

    let res = get(&router, "/concesionarios/2/coches/2").await;
    assert_eq!(res.body["model"], "Toyota Corolla");

    let res = delete(&router, "/concesionarios/2/coches/2").await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_car_creates_get_distinct_ids() {
    let router = common::empty_router();
    let res = post(&router, "/dealerships", json!({ "name": "D", "address": "A" })).await;
    assert_eq!(res.status, StatusCode::CREATED);

    let tasks: Vec<_> = (0..32)
        .map(|i| {
            let router = router.clone();
            tokio::spawn(async move {
                post(
                    &router,
                    "/dealerships/1/cars",
                    json!({ "model": format!("M{}", i), "horsepower": 100, "price": 1000 }),
                )
                .await
            })
        })
        .collect();

    let mut ids = Vec::new();
    for task in tasks {
        let res = task.await.unwrap();
        assert_eq!(res.status, StatusCode::CREATED);
        ids.push(res.body["id"].as_u64().unwrap());
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=32).collect::<Vec<u64>>());

    let res = get(&router, "/dealerships/1/cars").await;
    assert_eq!(res.body.as_array().unwrap().len(), 32);
}
