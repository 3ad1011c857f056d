use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::restaurant::{RRestaurantCreate, RestaurantRes};
use actix_web::{post, web};
use std::sync::Arc;

#[post("")]
pub async fn create(
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RRestaurantCreate>,
) -> ApiResult<RestaurantRes> {
    let restaurant = db.create_restaurant(body.into_inner()).await?;
    Ok(ApiResponse::Created(restaurant.into()))
}
