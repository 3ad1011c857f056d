use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::report::SalesReport;
use entity::{order, restaurant};
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, EntityTrait, FromQueryResult, QueryFilter, QueryOrder, QuerySelect, Select,
};

/// Raw aggregation row; SUM over zero orders comes back NULL.
#[derive(FromQueryResult)]
struct SalesRow {
    restaurant_name: String,
    total_sales: Option<Decimal>,
    order_count: i64,
}

impl From<SalesRow> for SalesReport {
    fn from(row: SalesRow) -> Self {
        SalesReport {
            restaurant_name: row.restaurant_name,
            total_sales: row.total_sales.unwrap_or(Decimal::ZERO),
            order_count: row.order_count,
        }
    }
}

impl PostgresService {
    // LEFT JOIN keeps restaurants with zero orders in the report;
    // COUNT(orders.id) ignores the NULLs the join produces for them.
    fn sales_query() -> Select<restaurant::Entity> {
        restaurant::Entity::find()
            .select_only()
            .column_as(restaurant::Column::Name, "restaurant_name")
            .column_as(order::Column::TotalValue.sum(), "total_sales")
            .column_as(order::Column::Id.count(), "order_count")
            .left_join(order::Entity)
            .group_by(restaurant::Column::Id)
            .group_by(restaurant::Column::Name)
    }

    /// One row per restaurant, ordered by restaurant name.
    pub async fn sales_by_restaurant(&self) -> Result<Vec<SalesReport>, AppError> {
        let rows = Self::sales_query()
            .order_by_asc(restaurant::Column::Name)
            .into_model::<SalesRow>()
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(SalesReport::from).collect())
    }

    pub async fn sales_by_restaurant_id(&self, restaurant_id: i64) -> Result<SalesReport, AppError> {
        let row = Self::sales_query()
            .filter(restaurant::Column::Id.eq(restaurant_id))
            .into_model::<SalesRow>()
            .one(&self.db)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Restaurante não encontrado: {}", restaurant_id))
            })?;
        Ok(row.into())
    }
}
