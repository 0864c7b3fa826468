mod common;

use axum::http::{Method, StatusCode};
use rust_decimal::Decimal;
use sea_orm::EntityTrait;
use serde_json::{json, Value};
use std::str::FromStr;

use common::TestApp;
use orderdesk_api::entities::order::Entity as OrderEntity;

fn amount(value: &Value) -> Decimal {
    Decimal::from_str(value.as_str().expect("amount should be a string")).expect("parse amount")
}

#[tokio::test]
async fn list_returns_base_seed_newest_id_first() {
    let app = TestApp::with_base_seed().await;

    let (status, body) = app.get("/api/v1/orders").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["total"], 5);
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 10);
    assert_eq!(body["total_pages"], 1);

    let orders = body["orders"].as_array().expect("orders array");
    assert_eq!(orders.len(), 5);

    // Default sort is id desc, so the last seeded row comes first
    assert_eq!(orders[0]["id"], "5");
    assert_eq!(orders[0]["order_number"], "#ORD1004");
    assert_eq!(orders[0]["customer"]["name"], "Jacquelyn Robel");
    assert_eq!(orders[0]["customer"]["email"], "jacquelyn.robel@example.com");
    assert_eq!(amount(&orders[0]["total_amount"]), Decimal::new(3950, 2));
    assert_eq!(orders[4]["order_number"], "#ORD1008");
}

#[tokio::test]
async fn list_paginates_with_ceiling_division() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/v1/orders?page=6&limit=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 55);
    assert_eq!(body["total_pages"], 6);
    assert_eq!(body["orders"].as_array().unwrap().len(), 5);

    // Out-of-range page is not an error: empty slice, same bookkeeping
    let (status, body) = app.get("/api/v1/orders?page=99&limit=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 55);
    assert_eq!(body["total_pages"], 6);
    assert!(body["orders"].as_array().unwrap().is_empty());

    // Limit is clamped to 100 and page to 1
    let (status, body) = app.get("/api/v1/orders?page=0&limit=500").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 100);
    assert_eq!(body["orders"].as_array().unwrap().len(), 55);
}

#[tokio::test]
async fn list_filters_by_status_with_synonyms() {
    let app = TestApp::new().await;

    let (_, body) = app.get("/api/v1/orders?status=Pending&limit=100").await;
    assert_eq!(body["total"], 19);
    for order in body["orders"].as_array().unwrap() {
        assert_eq!(order["status"], "Pending");
    }

    // UI-facing synonyms map onto stored values
    let (_, incomplete) = app.get("/api/v1/orders?status=incomplete&limit=100").await;
    assert_eq!(incomplete["total"], 19);

    let (_, finished) = app.get("/api/v1/orders?status=finished&limit=100").await;
    assert_eq!(finished["total"], 27);

    let (_, refunded) = app.get("/api/v1/orders?status=refunded&limit=100").await;
    assert_eq!(refunded["total"], 7);

    // Unrecognized values pass through and simply match nothing
    let (status, none) = app.get("/api/v1/orders?status=Bogus").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(none["total"], 0);
    assert!(none["orders"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn search_matches_name_and_number_case_insensitively() {
    let app = TestApp::with_base_seed().await;

    let (_, by_name) = app.get("/api/v1/orders?search=KIEHN").await;
    assert_eq!(by_name["total"], 1);
    assert_eq!(by_name["orders"][0]["order_number"], "#ORD1008");

    let (_, by_number) = app.get("/api/v1/orders?search=ord1005").await;
    assert_eq!(by_number["total"], 1);
    assert_eq!(by_number["orders"][0]["customer"]["name"], "Darin Deckow");

    // Search combines with the status filter via AND
    let (_, combined) = app.get("/api/v1/orders?status=Pending&search=kuhn").await;
    assert_eq!(combined["total"], 1);
    assert_eq!(combined["orders"][0]["order_number"], "#ORD1007");

    let (_, excluded) = app.get("/api/v1/orders?status=Completed&search=kuhn").await;
    assert_eq!(excluded["total"], 0);
}

#[tokio::test]
async fn sort_outside_allow_list_behaves_like_id_desc() {
    let app = TestApp::with_base_seed().await;

    let (_, sorted) = app
        .get("/api/v1/orders?sort_by=customer_name&sort_order=asc")
        .await;
    let names: Vec<&str> = sorted["orders"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["customer"]["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "Clint Hoppe",
            "Darin Deckow",
            "Denise Kuhn",
            "Esther Kiehn",
            "Jacquelyn Robel"
        ]
    );

    let (_, fallback) = app
        .get("/api/v1/orders?sort_by=no_such_column&sort_order=sideways")
        .await;
    let (_, explicit) = app.get("/api/v1/orders?sort_by=id&sort_order=desc").await;
    assert_eq!(fallback["orders"], explicit["orders"]);
}

#[tokio::test]
async fn get_returns_order_or_not_found() {
    let app = TestApp::with_base_seed().await;

    let (status, body) = app.get("/api/v1/orders/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "1");
    assert_eq!(body["order_number"], "#ORD1008");
    assert_eq!(body["customer"]["name"], "Esther Kiehn");
    assert_eq!(body["order_date"], "17 Dec 2024");
    assert_eq!(body["payment_status"], "Unpaid");

    let (status, body) = app.get("/api/v1/orders/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
    assert_eq!(body["message"], "Order not found");
}

#[tokio::test]
async fn create_assigns_id_number_date_and_defaults() {
    let app = TestApp::with_base_seed().await;

    let payload = json!({
        "customer": {
            "name": "Alice Johnson",
            "email": "alice.johnson@example.com"
        },
        "total_amount": "125.00",
        "status": "pending"
    });

    let (status, body) = app
        .request_json(Method::POST, "/api/v1/orders", Some(payload))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    assert_eq!(body["id"], "6");
    assert_eq!(body["order_number"], "#ORD1006");
    assert_eq!(body["status"], "pending");
    assert_eq!(body["payment_status"], "unpaid");
    assert_eq!(amount(&body["total_amount"]), Decimal::new(12500, 2));
    assert_eq!(body["customer"]["name"], "Alice Johnson");
    assert!(body["customer"].get("avatar").is_none());
    assert_eq!(body["created_at"], body["updated_at"]);
    assert!(!body["order_date"].as_str().unwrap().is_empty());

    // The created row is immediately readable
    let (status, fetched) = app.get("/api/v1/orders/6").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["order_number"], "#ORD1006");
}

#[tokio::test]
async fn update_changes_only_supplied_fields() {
    let app = TestApp::with_base_seed().await;

    let (_, before) = app.get("/api/v1/orders/1").await;

    let (status, body) = app
        .request_json(
            Method::PUT,
            "/api/v1/orders/1",
            Some(json!({"status": "Completed"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Completed");
    assert_eq!(body["order_number"], before["order_number"]);
    assert_eq!(body["customer"], before["customer"]);
    assert_eq!(body["total_amount"], before["total_amount"]);
    assert_eq!(body["created_at"], before["created_at"]);
    assert_ne!(body["updated_at"], before["updated_at"]);

    let (status, body) = app
        .request_json(
            Method::PUT,
            "/api/v1/orders/999",
            Some(json!({"status": "Completed"})),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Order not found");
}

#[tokio::test]
async fn empty_update_is_a_noop() {
    let app = TestApp::with_base_seed().await;

    let (_, before) = app.get("/api/v1/orders/2").await;

    let (status, after) = app
        .request_json(Method::PUT, "/api/v1/orders/2", Some(json!({})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(after, before);

    // updated_at in storage is untouched as well
    let (_, refetched) = app.get("/api/v1/orders/2").await;
    assert_eq!(refetched["updated_at"], before["updated_at"]);
}

#[tokio::test]
async fn updating_customer_replaces_all_nested_fields() {
    let app = TestApp::with_base_seed().await;

    let (status, body) = app
        .request_json(
            Method::PUT,
            "/api/v1/orders/3",
            Some(json!({
                "customer": {
                    "name": "Clint H.",
                    "email": "clint@example.com",
                    "avatar": "https://cdn.example.com/avatars/clint.png"
                }
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["customer"]["avatar"],
        "https://cdn.example.com/avatars/clint.png"
    );

    // A customer without an avatar clears the stored one
    let (_, body) = app
        .request_json(
            Method::PUT,
            "/api/v1/orders/3",
            Some(json!({
                "customer": {
                    "name": "Clint H.",
                    "email": "clint@example.com"
                }
            })),
        )
        .await;
    assert!(body["customer"].get("avatar").is_none());
    assert_eq!(body["customer"]["email"], "clint@example.com");
}

#[tokio::test]
async fn delete_removes_the_row() {
    let app = TestApp::with_base_seed().await;

    let response = app.request(Method::DELETE, "/api/v1/orders/5", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());

    let (status, _) = app.get("/api/v1/orders/5").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .request_json(Method::DELETE, "/api/v1/orders/5", None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let remaining = OrderEntity::find().all(&*app.db).await.unwrap();
    assert_eq!(remaining.len(), 4);
}

#[tokio::test]
async fn bulk_status_update_ignores_missing_ids() {
    let app = TestApp::with_base_seed().await;

    let (status, body) = app
        .request_json(
            Method::PUT,
            "/api/v1/orders/bulk/status",
            Some(json!({"order_ids": [1, 2, 999], "status": "Completed"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updated"], 2);

    let orders = body["orders"].as_array().unwrap();
    assert_eq!(orders.len(), 2);
    for order in orders {
        assert_eq!(order["status"], "Completed");
    }

    // Both seed Pending rows were moved to Completed
    let (_, stats) = app.get("/api/v1/orders/stats").await;
    assert_eq!(stats["pending"], 0);
    assert_eq!(stats["shipped"], 4);
    assert_eq!(stats["refunded"], 1);
    assert_eq!(stats["total"], 5);
}

#[tokio::test]
async fn bulk_status_update_with_no_ids_affects_nothing() {
    let app = TestApp::with_base_seed().await;

    let (status, body) = app
        .request_json(
            Method::PUT,
            "/api/v1/orders/bulk/status",
            Some(json!({"order_ids": [], "status": "Completed"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updated"], 0);
    assert!(body["orders"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn bulk_duplicate_copies_fields_and_suffixes_number() {
    let app = TestApp::with_base_seed().await;

    let (status, body) = app
        .request_json(
            Method::POST,
            "/api/v1/orders/bulk/duplicate",
            Some(json!({"order_ids": [1, 777]})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["duplicated"], 1);

    let copies = body["orders"].as_array().unwrap();
    assert_eq!(copies.len(), 1);
    assert_eq!(copies[0]["id"], "6");
    assert_eq!(copies[0]["order_number"], "#ORD1008 (Copy)");
    assert_eq!(copies[0]["source_id"], "1");

    let (_, source) = app.get("/api/v1/orders/1").await;
    let (_, copy) = app.get("/api/v1/orders/6").await;
    assert_eq!(copy["order_number"], "#ORD1008 (Copy)");
    assert_eq!(copy["customer"], source["customer"]);
    assert_eq!(copy["order_date"], source["order_date"]);
    assert_eq!(copy["status"], source["status"]);
    assert_eq!(copy["total_amount"], source["total_amount"]);
    assert_eq!(copy["payment_status"], source["payment_status"]);

    let (_, list) = app.get("/api/v1/orders").await;
    assert_eq!(list["total"], 6);
}

#[tokio::test]
async fn bulk_delete_reports_count_and_echoes_ids() {
    let app = TestApp::with_base_seed().await;

    let (status, body) = app
        .request_json(
            Method::DELETE,
            "/api/v1/orders/bulk",
            Some(json!({"order_ids": [1, 2, 999]})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], 2);
    assert_eq!(body["order_ids"], json!([1, 2, 999]));

    let (_, list) = app.get("/api/v1/orders").await;
    assert_eq!(list["total"], 3);
}

#[tokio::test]
async fn stats_counts_the_three_fixed_buckets() {
    let app = TestApp::with_base_seed().await;

    let (status, stats) = app.get("/api/v1/orders/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        stats,
        json!({"total": 5, "pending": 2, "shipped": 2, "refunded": 1})
    );
}

#[tokio::test]
async fn stats_ignore_statuses_outside_the_buckets() {
    let app = TestApp::with_base_seed().await;

    let (status, _) = app
        .request_json(
            Method::PUT,
            "/api/v1/orders/1",
            Some(json!({"status": "Archived"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, stats) = app.get("/api/v1/orders/stats").await;
    assert_eq!(stats["total"], 5);
    assert_eq!(stats["pending"], 1);
    assert_eq!(stats["shipped"], 2);
    assert_eq!(stats["refunded"], 1);
}

#[tokio::test]
async fn full_seed_counts_add_up() {
    let app = TestApp::new().await;

    let (_, stats) = app.get("/api/v1/orders/stats").await;
    assert_eq!(stats["total"], 55);
    assert_eq!(stats["pending"], 19);
    assert_eq!(stats["shipped"], 29);
    assert_eq!(stats["refunded"], 7);
}
