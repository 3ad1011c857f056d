use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::restaurant::RestaurantRes;
use actix_web::{delete, web};
use std::sync::Arc;

/// Soft delete: flips the active flag in both directions.
#[delete("/{id}")]
pub async fn toggle(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i64>,
) -> ApiResult<RestaurantRes> {
    let restaurant = db.toggle_restaurant_active(path.into_inner()).await?;
    Ok(ApiResponse::Ok(restaurant.into()))
}
