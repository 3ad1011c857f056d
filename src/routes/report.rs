use crate::db::postgres_service::PostgresService;
use crate::types::report::SalesReport;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use std::sync::Arc;

#[get("/sales")]
pub async fn sales(db: web::Data<Arc<PostgresService>>) -> ApiResult<Vec<SalesReport>> {
    Ok(ApiResponse::Ok(db.sales_by_restaurant().await?))
}

#[get("/sales/{restaurant_id}")]
pub async fn sales_by_restaurant(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i64>,
) -> ApiResult<SalesReport> {
    Ok(ApiResponse::Ok(
        db.sales_by_restaurant_id(path.into_inner()).await?,
    ))
}
