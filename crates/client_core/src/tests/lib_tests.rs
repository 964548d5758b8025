use super::*;
use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use serde_json::json;
use tokio::net::TcpListener;

async fn spawn_api(router: Router) -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn fetch_orders_decodes_the_data_array() {
    let body = json!({
        "data": [
            {
                "id": 1,
                "marketplace_order_id": "SO-1024",
                "customer_name": "Asha Verma",
                "order_date": "2024-05-14T10:30:00Z",
                "total_amount": "2499.00",
                "marketplace": "Amazon",
                "status": "Processing"
            },
            {
                "id": 2,
                "marketplace_order_id": "SO-2048",
                "customer_name": "Rohit Malhotra",
                "order_date": "2024-05-13T08:15:00Z",
                "total_amount": "1299.50",
                "marketplace": "Flipkart",
                "status": "Shipped"
            }
        ]
    });
    let router = Router::new().route(
        "/orders.php",
        get(move || {
            let body = body.clone();
            async move { axum::Json(body) }
        }),
    );
    let api = OrdersApi::new(spawn_api(router).await);

    let orders = api.fetch_orders().await.expect("fetch");

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].marketplace_order_id, "SO-1024");
    assert_eq!(orders[0].total_amount.to_string(), "2499.00");
    assert_eq!(orders[1].status, shared::domain::OrderStatus::Shipped);
}

#[tokio::test]
async fn missing_data_field_is_an_empty_collection() {
    let router = Router::new().route(
        "/orders.php",
        get(|| async { axum::Json(json!({ "note": "no orders key" })) }),
    );
    let api = OrdersApi::new(spawn_api(router).await);

    let orders = api.fetch_orders().await.expect("fetch");

    assert!(orders.is_empty());
}

#[tokio::test]
async fn error_status_surfaces_the_server_message() {
    let router = Router::new().route(
        "/orders.php",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                axum::Json(json!({ "message": "DB down" })),
            )
        }),
    );
    let api = OrdersApi::new(spawn_api(router).await);

    let err = api.fetch_orders().await.expect_err("should fail");

    assert_eq!(
        err,
        FetchError::Api {
            status: 500,
            message: "DB down".to_string(),
        }
    );
    assert_eq!(err.to_string(), "DB down");
}

#[tokio::test]
async fn error_status_without_json_body_falls_back_to_generic_message() {
    let router = Router::new().route(
        "/orders.php",
        get(|| async { (StatusCode::BAD_GATEWAY, "upstream timeout") }),
    );
    let api = OrdersApi::new(spawn_api(router).await);

    let err = api.fetch_orders().await.expect_err("should fail");

    assert_eq!(
        err,
        FetchError::Api {
            status: 502,
            message: "Failed to fetch orders".to_string(),
        }
    );
}

#[tokio::test]
async fn non_json_success_body_is_malformed() {
    let router = Router::new().route(
        "/orders.php",
        get(|| async {
            (
                [(header::CONTENT_TYPE, "text/html")],
                "<html>Fatal error</html>",
            )
                .into_response()
        }),
    );
    let api = OrdersApi::new(spawn_api(router).await);

    let err = api.fetch_orders().await.expect_err("should fail");

    assert!(matches!(err, FetchError::MalformedResponse(_)));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_error() {
    // Bind then drop so the port is known-dead.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    let api = OrdersApi::new(format!("http://{addr}"));

    let err = api.fetch_orders().await.expect_err("should fail");

    assert!(matches!(err, FetchError::Network(_)));
}

#[tokio::test]
async fn endpoint_path_tolerates_trailing_slash() {
    let api = OrdersApi::new("http://localhost/market/bedquest-api/");
    assert_eq!(
        api.orders_endpoint(),
        "http://localhost/market/bedquest-api/orders.php"
    );
}
