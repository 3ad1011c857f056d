mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, test_data, TestContext};
use delivery_api::types::order::OrderRes;
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_order_creation_starts_pending_with_order_number() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let customer = client.create_test_customer().await;
    let restaurant = client.create_test_restaurant("Pizzaria Bella", dec!(5.00)).await;

    let req = test::TestRequest::post()
        .uri("/orders")
        .set_json(test_data::sample_order(customer.id, restaurant.id, dec!(35.90)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let order: OrderRes = test::read_body_json(resp).await;
    assert_eq!(order.status, "PENDENTE");
    assert_eq!(order.order_number.len(), 15);
    assert!(order
        .order_number
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    assert!(order.placed_at <= chrono::Utc::now());
    assert_eq!(order.total_value, dec!(35.90));

    // and it is reachable through both lookups
    let by_id = ctx.db.get_order(order.id).await.unwrap();
    let by_number = ctx.db.get_order_by_number(&order.order_number).await.unwrap();
    assert_eq!(by_id.id, by_number.id);
}

#[tokio::test]
async fn test_order_creation_with_unknown_references_persists_nothing() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let customer = client.create_test_customer().await;
    let restaurant = client.create_test_restaurant("Cantina", dec!(3.50)).await;

    let req = test::TestRequest::post()
        .uri("/orders")
        .set_json(test_data::sample_order(9999, restaurant.id, dec!(20.00)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/orders")
        .set_json(test_data::sample_order(customer.id, 9999, dec!(20.00)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let pending = ctx.db.list_orders_by_status("PENDENTE").await.unwrap();
    assert!(pending.is_empty());
}

#[tokio::test]
async fn test_order_creation_rejects_empty_items_and_non_positive_total() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let customer = client.create_test_customer().await;
    let restaurant = client.create_test_restaurant("Cantina", dec!(3.50)).await;

    let mut payload = test_data::sample_order(customer.id, restaurant.id, dec!(20.00));
    payload.items = "   ".to_string();
    let req = test::TestRequest::post()
        .uri("/orders")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let payload = test_data::sample_order(customer.id, restaurant.id, dec!(0));
    let req = test::TestRequest::post()
        .uri("/orders")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_status_update_is_permissive_until_terminal() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let customer = client.create_test_customer().await;
    let restaurant = client.create_test_restaurant("Cantina", dec!(3.50)).await;
    let order = client
        .create_test_order(customer.id, restaurant.id, dec!(42.00))
        .await;

    // any non-terminal jump is allowed, even backwards
    for status in ["CONFIRMADO", "PENDENTE", "SAIU_PARA_ENTREGA", "ENTREGUE"] {
        let req = test::TestRequest::patch()
            .uri(&format!("/orders/{}/status", order.id))
            .set_json(serde_json::json!({ "status": status }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "jump to {} failed", status);
    }

    // delivered is terminal now
    let req = test::TestRequest::patch()
        .uri(&format!("/orders/{}/status", order.id))
        .set_json(serde_json::json!({ "status": "CONFIRMADO" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "Não é possível alterar o status de um pedido que já foi entregue"
    );
}

#[tokio::test]
async fn test_status_update_rejects_blank_and_unknown_status() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let customer = client.create_test_customer().await;
    let restaurant = client.create_test_restaurant("Cantina", dec!(3.50)).await;
    let order = client
        .create_test_order(customer.id, restaurant.id, dec!(42.00))
        .await;

    let req = test::TestRequest::patch()
        .uri(&format!("/orders/{}/status", order.id))
        .set_json(serde_json::json!({ "status": "  " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Status não pode ser nulo ou vazio");

    let req = test::TestRequest::patch()
        .uri(&format!("/orders/{}/status", order.id))
        .set_json(serde_json::json!({ "status": "bogus" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Status inválido: bogus");
}

#[tokio::test]
async fn test_cancel_succeeds_once_then_conflicts() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let customer = client.create_test_customer().await;
    let restaurant = client.create_test_restaurant("Cantina", dec!(3.50)).await;
    let order = client
        .create_test_order(customer.id, restaurant.id, dec!(42.00))
        .await;

    let req = test::TestRequest::delete()
        .uri(&format!("/orders/{}", order.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cancelled: OrderRes = test::read_body_json(resp).await;
    assert_eq!(cancelled.status, "CANCELADO");

    let req = test::TestRequest::delete()
        .uri(&format!("/orders/{}", order.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Este pedido já está cancelado.");
}

#[tokio::test]
async fn test_cancel_of_delivered_order_is_rejected_and_leaves_status() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let customer = client.create_test_customer().await;
    let restaurant = client.create_test_restaurant("Cantina", dec!(3.50)).await;
    let order = client
        .create_test_order(customer.id, restaurant.id, dec!(42.00))
        .await;
    ctx.db
        .update_order_status(order.id, "ENTREGUE")
        .await
        .unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/orders/{}", order.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Não é possível cancelar um pedido já entregue.");

    let unchanged = ctx.db.get_order(order.id).await.unwrap();
    assert_eq!(unchanged.status, entity::order::OrderStatus::Entregue);
}

#[tokio::test]
async fn test_list_by_status_is_case_insensitive() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let customer = client.create_test_customer().await;
    let restaurant = client.create_test_restaurant("Cantina", dec!(3.50)).await;
    client
        .create_test_order(customer.id, restaurant.id, dec!(10.00))
        .await;
    client
        .create_test_order(customer.id, restaurant.id, dec!(12.00))
        .await;

    let req = test::TestRequest::get()
        .uri("/orders/status/pendente")
        .to_request();
    let lower: Vec<OrderRes> = test::read_body_json(test::call_service(&app, req).await).await;

    let req = test::TestRequest::get()
        .uri("/orders/status/PENDENTE")
        .to_request();
    let upper: Vec<OrderRes> = test::read_body_json(test::call_service(&app, req).await).await;

    let mut lower_ids: Vec<i64> = lower.iter().map(|o| o.id).collect();
    let mut upper_ids: Vec<i64> = upper.iter().map(|o| o.id).collect();
    lower_ids.sort_unstable();
    upper_ids.sort_unstable();
    assert_eq!(lower_ids.len(), 2);
    assert_eq!(lower_ids, upper_ids);

    let req = test::TestRequest::get()
        .uri("/orders/status/bogus")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_by_customer_only_returns_their_orders() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let customer_a = client.create_test_customer().await;
    let customer_b = client.create_test_customer().await;
    let restaurant = client.create_test_restaurant("Cantina", dec!(3.50)).await;
    let order_a = client
        .create_test_order(customer_a.id, restaurant.id, dec!(10.00))
        .await;
    client
        .create_test_order(customer_b.id, restaurant.id, dec!(12.00))
        .await;

    let req = test::TestRequest::get()
        .uri(&format!("/orders/customer/{}", customer_a.id))
        .to_request();
    let orders: Vec<OrderRes> = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, order_a.id);
}
