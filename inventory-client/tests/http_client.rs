//! HTTP client integration tests.
//!
//! Starts an axum server that speaks the inventory wire format and
//! exercises it through `HttpInventoryClient`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use inventory_client::{ApiError, ClientConfig, HttpInventoryClient, InventoryApi};
use inventory_core::{ItemDraft, QueryParams};
use serde_json::{json, Value};

#[derive(Default)]
struct Recorded {
    queries: Mutex<Vec<Option<String>>>,
    bodies: Mutex<Vec<Value>>,
    failing: AtomicBool,
}

type Shared = Arc<Recorded>;

async fn list_items(State(rec): State<Shared>, RawQuery(query): RawQuery) -> Response {
    rec.queries.lock().unwrap().push(query);
    if rec.failing.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }
    Json(json!({
        "items": [
            {
                "id": "1",
                "item_name": "Hammer",
                "category": "Tools",
                "price": "12.50",
                "last_updated_dt": "2025-01-03T09:15:00+08:00"
            },
            {
                "id": 2,
                "name": "Gloves",
                "category": "Safety",
                "price": 3,
                "last_updated_dt": "2025-01-04T10:00:00+08:00"
            },
            {
                "id": "3",
                "item_name": "Tape",
                "category": "Tools",
                "price": 1.5,
                "last_updated_dt": "2025-01-05T11:00:00+08:00"
            }
        ],
        "total_price": 17.0
    }))
    .into_response()
}

async fn create_item(State(rec): State<Shared>, Json(body): Json<Value>) -> Json<Value> {
    rec.bodies.lock().unwrap().push(body);
    Json(json!({ "id": "new-1", "status": "success" }))
}

async fn update_price(
    State(rec): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if id == "missing" {
        return (StatusCode::NOT_FOUND, "no such item").into_response();
    }
    let price = body["price"].clone();
    rec.bodies.lock().unwrap().push(body);
    Json(json!({ "status": "success", "updated_price": price })).into_response()
}

async fn delete_item(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "missing" => (StatusCode::NOT_FOUND, "no such item").into_response(),
        "silent" => StatusCode::NO_CONTENT.into_response(),
        _ => Json(json!({ "status": "success", "deleted_id": id })).into_response(),
    }
}

/// Bind to port 0 and return the base URL with the shared recorder.
async fn start_server() -> (String, Shared) {
    let rec = Shared::default();
    let app = Router::new()
        .route("/items/", get(list_items).post(create_item))
        .route("/items/:id/price/", put(update_price))
        .route("/items/:id/", axum::routing::delete(delete_item))
        .with_state(rec.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), rec)
}

fn client(base: &str) -> HttpInventoryClient {
    HttpInventoryClient::new(ClientConfig::new(base)).unwrap()
}

#[tokio::test]
async fn list_normalizes_items_and_stats() {
    let (base, rec) = start_server().await;
    let listing = client(&base).try_list_items(None).await.unwrap();

    assert_eq!(listing.items.len(), 3);
    assert_eq!(listing.items[0].name, "Hammer");
    assert_eq!(listing.items[0].price, 12.5);
    assert_eq!(listing.items[1].id, "2");
    assert_eq!(listing.items[1].name, "Gloves");
    assert_eq!(listing.stats.total_items, 3);
    assert_eq!(listing.stats.total_value, 17.0);

    assert_eq!(rec.queries.lock().unwrap().as_slice(), &[None]);
}

#[tokio::test]
async fn upper_bound_only_omits_dt_from() {
    let (base, rec) = start_server().await;
    let filter = QueryParams::from_search(None, "", "2025-03-01 12:30:00").unwrap();

    client(&base).try_list_items(Some(&filter)).await.unwrap();

    let queries = rec.queries.lock().unwrap();
    let query = queries[0].as_deref().unwrap();
    assert!(query.starts_with("dt_to=2025-03-01"), "query was {query}");
    assert!(!query.contains("dt_from"));
    assert!(!query.contains("category"));
}

#[tokio::test]
async fn category_filter_is_sent() {
    let (base, rec) = start_server().await;
    let filter = QueryParams::new().category("Tools");

    client(&base).try_list_items(Some(&filter)).await.unwrap();

    let queries = rec.queries.lock().unwrap();
    assert_eq!(queries[0].as_deref(), Some("category=Tools"));
}

#[tokio::test]
async fn categories_are_distinct_and_sorted() {
    let (base, _rec) = start_server().await;
    let categories = client(&base).list_categories().await;

    let categories: Vec<_> = categories.into_iter().collect();
    assert_eq!(categories, vec!["Safety".to_string(), "Tools".to_string()]);
}

#[tokio::test]
async fn create_posts_draft_and_fills_response() {
    let (base, rec) = start_server().await;
    let draft = ItemDraft::parse("Widget", "Tools", "9.99").unwrap();

    let item = client(&base).create_item(&draft).await.unwrap();

    assert_eq!(item.id, "new-1");
    assert_eq!(item.name, "Widget");
    assert_eq!(item.category, "Tools");
    assert_eq!(item.price, 9.99);
    assert_eq!(
        rec.bodies.lock().unwrap()[0],
        json!({ "name": "Widget", "category": "Tools", "price": 9.99 })
    );
}

#[tokio::test]
async fn update_price_sends_price_only() {
    let (base, rec) = start_server().await;

    let item = client(&base).update_item_price("abc", 0.01).await.unwrap();

    assert_eq!(item.id, "abc");
    assert_eq!(item.price, 0.01);
    assert_eq!(rec.bodies.lock().unwrap()[0], json!({ "price": 0.01 }));
}

#[tokio::test]
async fn delete_reports_deleted_id() {
    let (base, _rec) = start_server().await;

    let deleted = client(&base).delete_item("abc").await.unwrap();

    assert_eq!(deleted.status, "success");
    assert_eq!(deleted.deleted_id, "abc");
}

#[tokio::test]
async fn delete_without_body_succeeds() {
    let (base, _rec) = start_server().await;

    let deleted = client(&base).delete_item("silent").await.unwrap();

    assert_eq!(deleted.status, "success");
    assert_eq!(deleted.deleted_id, "silent");
}

#[tokio::test]
async fn writes_surface_status_errors() {
    let (base, _rec) = start_server().await;
    let client = client(&base);

    let err = client.update_item_price("missing", 1.0).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 404, .. }));

    let err = client.delete_item("missing").await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 404, .. }));
}

#[tokio::test]
async fn failed_listing_is_fail_soft() {
    let (base, rec) = start_server().await;
    rec.failing.store(true, Ordering::SeqCst);
    let client = client(&base);

    assert!(client.try_list_items(None).await.is_err());

    let listing = client.list_items(None).await;
    assert!(listing.is_empty());
    assert_eq!(listing.stats.total_items, 0);
    assert_eq!(listing.stats.total_value, 0.0);
    assert!(client.list_categories().await.is_empty());
}

#[tokio::test]
async fn unreachable_server_is_fail_soft() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client(&format!("http://{addr}"));
    let listing = client.list_items(None).await;

    assert!(listing.is_empty());
    assert!(matches!(
        client.try_list_items(None).await,
        Err(ApiError::Transport(_))
    ));
}
