use actix_web::{web, App};
use delivery_api::db::postgres_service::PostgresService;
use entity::{customer, order, restaurant};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::test_data;

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(delivery_api::routes::configure_routes)
    }

    #[allow(dead_code)]
    pub async fn create_test_customer(&self) -> customer::Model {
        self.db
            .create_customer(test_data::sample_customer())
            .await
            .expect("Failed to create customer")
    }

    #[allow(dead_code)]
    pub async fn create_test_restaurant(&self, name: &str, fee: Decimal) -> restaurant::Model {
        self.db
            .create_restaurant(test_data::sample_restaurant(name, fee))
            .await
            .expect("Failed to create restaurant")
    }

    #[allow(dead_code)]
    pub async fn create_test_order(
        &self,
        customer_id: i64,
        restaurant_id: i64,
        total: Decimal,
    ) -> order::Model {
        self.db
            .create_order(test_data::sample_order(customer_id, restaurant_id, total))
            .await
            .expect("Failed to create order")
    }
}
