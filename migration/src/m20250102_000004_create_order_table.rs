use sea_orm_migration::prelude::*;

use crate::m20250102_000001_create_customer_table::Customer;
use crate::m20250102_000002_create_restaurant_table::Restaurant;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .col(
                        ColumnDef::new(Order::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(Order::OrderNumber)
                            .string_len(15)
                            .not_null()
                            .unique_key()
                    )
                    .col(
                        ColumnDef::new(Order::PlacedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Order::Status)
                            .string_len(20)
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Order::TotalValue)
                            .decimal_len(10, 2)
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Order::Items)
                            .text()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Order::Notes)
                            .string()
                    )
                    .col(
                        ColumnDef::new(Order::CustomerId)
                            .big_integer()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Order::RestaurantId)
                            .big_integer()
                            .not_null()
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_customer")
                            .from(Order::Table, Order::CustomerId)
                            .to(Customer::Table, Customer::Id)
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_restaurant")
                            .from(Order::Table, Order::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id)
                    )
                    .to_owned()
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Order::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Order {
    #[sea_orm(iden = "orders")]
    Table,
    Id,
    OrderNumber,
    PlacedAt,
    Status,
    TotalValue,
    Items,
    Notes,
    CustomerId,
    RestaurantId,
}
