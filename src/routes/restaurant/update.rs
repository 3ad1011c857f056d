use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::restaurant::{RRestaurantUpdate, RestaurantRes};
use actix_web::{put, web};
use std::sync::Arc;

#[put("/{id}")]
pub async fn update(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i64>,
    body: web::Json<RRestaurantUpdate>,
) -> ApiResult<RestaurantRes> {
    let restaurant = db
        .update_restaurant(path.into_inner(), body.into_inner())
        .await?;
    Ok(ApiResponse::Ok(restaurant.into()))
}
