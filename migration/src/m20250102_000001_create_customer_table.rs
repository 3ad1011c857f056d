use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .col(
                        ColumnDef::new(Customer::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(Customer::Name)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Customer::Email)
                            .string()
                            .not_null()
                            .unique_key()
                    )
                    .col(
                        ColumnDef::new(Customer::Phone)
                            .string()
                    )
                    .col(
                        ColumnDef::new(Customer::Address)
                            .string()
                    )
                    .col(
                        ColumnDef::new(Customer::RegisteredAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Customer::Active)
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
                    .table(Customer::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Customer {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Address,
    RegisteredAt,
    Active,
}
