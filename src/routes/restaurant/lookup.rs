use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::restaurant::RestaurantRes;
use actix_web::{get, web};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
}

#[get("/search")]
pub async fn search(
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<SearchQuery>,
) -> ApiResult<Vec<RestaurantRes>> {
    let name = query
        .into_inner()
        .name
        .ok_or_else(|| AppError::Validation("Informe o parâmetro 'name'".to_string()))?;
    let restaurants = db.search_restaurants_by_name(&name).await?;
    Ok(ApiResponse::Ok(
        restaurants.into_iter().map(RestaurantRes::from).collect(),
    ))
}

#[get("/category/{category}")]
pub async fn by_category(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
) -> ApiResult<Vec<RestaurantRes>> {
    let restaurants = db.search_restaurants_by_category(&path.into_inner()).await?;
    Ok(ApiResponse::Ok(
        restaurants.into_iter().map(RestaurantRes::from).collect(),
    ))
}

#[get("")]
pub async fn list_active(db: web::Data<Arc<PostgresService>>) -> ApiResult<Vec<RestaurantRes>> {
    let restaurants = db.list_active_restaurants().await?;
    Ok(ApiResponse::Ok(
        restaurants.into_iter().map(RestaurantRes::from).collect(),
    ))
}

#[get("/{id}")]
pub async fn get_by_id(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i64>,
) -> ApiResult<RestaurantRes> {
    let restaurant = db.get_restaurant(path.into_inner()).await?;
    Ok(ApiResponse::Ok(restaurant.into()))
}
