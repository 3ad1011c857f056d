mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};
use delivery_api::types::report::SalesReport;
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_sales_by_restaurant_id_sums_and_counts() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let customer = client.create_test_customer().await;
    let bella = client.create_test_restaurant("Pizzaria Bella", dec!(5.00)).await;
    client
        .create_test_order(customer.id, bella.id, dec!(35.90))
        .await;
    client
        .create_test_order(customer.id, bella.id, dec!(38.90))
        .await;

    let req = test::TestRequest::get()
        .uri(&format!("/reports/sales/{}", bella.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let report: SalesReport = test::read_body_json(resp).await;
    assert_eq!(report.restaurant_name, "Pizzaria Bella");
    assert_eq!(report.total_sales, dec!(74.80));
    assert_eq!(report.order_count, 2);
}

#[tokio::test]
async fn test_restaurant_with_no_orders_reports_zero() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let quiet = client.create_test_restaurant("Cantina Vazia", dec!(2.00)).await;

    let req = test::TestRequest::get()
        .uri(&format!("/reports/sales/{}", quiet.id))
        .to_request();
    let report: SalesReport = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(report.total_sales, dec!(0));
    assert_eq!(report.order_count, 0);
}

#[tokio::test]
async fn test_sales_report_covers_every_restaurant_and_every_order() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let customer = client.create_test_customer().await;
    let bella = client.create_test_restaurant("Pizzaria Bella", dec!(5.00)).await;
    let sushi = client.create_test_restaurant("Sushi Kan", dec!(8.00)).await;
    client.create_test_restaurant("Cantina Vazia", dec!(2.00)).await;

    client
        .create_test_order(customer.id, bella.id, dec!(35.90))
        .await;
    client
        .create_test_order(customer.id, bella.id, dec!(38.90))
        .await;
    client
        .create_test_order(customer.id, sushi.id, dec!(120.00))
        .await;

    let req = test::TestRequest::get().uri("/reports/sales").to_request();
    let rows: Vec<SalesReport> = test::read_body_json(test::call_service(&app, req).await).await;

    assert_eq!(rows.len(), 3);
    let total: rust_decimal::Decimal = rows.iter().map(|r| r.total_sales).sum();
    assert_eq!(total, dec!(194.80));

    let by_name = |name: &str| rows.iter().find(|r| r.restaurant_name == name).unwrap();
    assert_eq!(by_name("Pizzaria Bella").order_count, 2);
    assert_eq!(by_name("Sushi Kan").order_count, 1);
    assert_eq!(by_name("Cantina Vazia").order_count, 0);
    assert_eq!(by_name("Cantina Vazia").total_sales, dec!(0));
}

#[tokio::test]
async fn test_sales_by_unknown_restaurant_is_not_found() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/reports/sales/9999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
