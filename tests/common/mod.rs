use delivery_api::db::postgres_service::PostgresService;
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let postgres = Postgres::default();
        let container = postgres
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

// Test data helpers
pub mod test_data {
    use delivery_api::types::customer::RCustomerCreate;
    use delivery_api::types::order::ROrderCreate;
    use delivery_api::types::product::RProductCreate;
    use delivery_api::types::restaurant::RRestaurantCreate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    pub fn sample_customer() -> RCustomerCreate {
        RCustomerCreate {
            name: "João Silva".to_string(),
            email: format!("joao-{}@email.com", Uuid::new_v4()),
            phone: Some("11 99999-0000".to_string()),
            address: Some("Rua das Flores, 100".to_string()),
        }
    }

    #[allow(dead_code)]
    pub fn sample_customer_with_email(email: &str) -> RCustomerCreate {
        RCustomerCreate {
            name: "João Silva".to_string(),
            email: email.to_string(),
            phone: None,
            address: None,
        }
    }

    pub fn sample_restaurant(name: &str, delivery_fee: Decimal) -> RRestaurantCreate {
        RRestaurantCreate {
            name: name.to_string(),
            category: "Pizzaria".to_string(),
            address: "Av. Paulista, 1000".to_string(),
            phone: Some("11 3333-4444".to_string()),
            delivery_fee,
        }
    }

    #[allow(dead_code)]
    pub fn sample_product(restaurant_id: i64) -> RProductCreate {
        RProductCreate {
            name: "Pizza Margherita".to_string(),
            description: Some("Molho, mussarela e manjericão".to_string()),
            price: dec!(35.90),
            category: Some("Pizza".to_string()),
            restaurant_id,
        }
    }

    #[allow(dead_code)]
    pub fn sample_order(customer_id: i64, restaurant_id: i64, total: Decimal) -> ROrderCreate {
        ROrderCreate {
            customer_id,
            restaurant_id,
            items: "1x Pizza Margherita".to_string(),
            total_value: total,
            notes: None,
        }
    }
}
