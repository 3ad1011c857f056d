pub use sea_orm_migration::prelude::*;

mod m20250102_000001_create_customer_table;
mod m20250102_000002_create_restaurant_table;
mod m20250102_000003_create_product_table;
mod m20250102_000004_create_order_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250102_000001_create_customer_table::Migration),
            Box::new(m20250102_000002_create_restaurant_table::Migration),
            Box::new(m20250102_000003_create_product_table::Migration),
            Box::new(m20250102_000004_create_order_table::Migration),
        ]
    }
}
