use sea_orm_migration::prelude::*;

use crate::m20250102_000002_create_restaurant_table::Restaurant;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .col(
                        ColumnDef::new(Product::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(Product::Name)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Product::Description)
                            .string()
                    )
                    .col(
                        ColumnDef::new(Product::Price)
                            .decimal_len(10, 2)
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Product::Category)
                            .string()
                    )
                    .col(
                        ColumnDef::new(Product::Available)
                            .boolean()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Product::RestaurantId)
                            .big_integer()
                            .not_null()
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_restaurant")
                            .from(Product::Table, Product::RestaurantId)
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
                    .table(Product::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Product {
    Table,
    Id,
    Name,
    Description,
    Price,
    Category,
    Available,
    RestaurantId,
}
