use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restaurant::Table)
                    .col(
                        ColumnDef::new(Restaurant::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(Restaurant::Name)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Restaurant::Category)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Restaurant::Address)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Restaurant::Phone)
                            .string()
                    )
                    .col(
                        ColumnDef::new(Restaurant::DeliveryFee)
                            .decimal_len(10, 2)
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Restaurant::Rating)
                            .double()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Restaurant::Active)
                            .boolean()
                            .not_null()
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
                    .table(Restaurant::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Restaurant {
    Table,
    Id,
    Name,
    Category,
    Address,
    Phone,
    DeliveryFee,
    Rating,
    Active,
}
