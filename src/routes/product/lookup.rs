use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::product::ProductRes;
use crate::types::response::{ApiResponse, ApiResult};
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
) -> ApiResult<Vec<ProductRes>> {
    let name = query
        .into_inner()
        .name
        .ok_or_else(|| AppError::Validation("Informe o parâmetro 'name'".to_string()))?;
    let products = db.search_products_by_name(&name).await?;
    Ok(ApiResponse::Ok(
        products.into_iter().map(ProductRes::from).collect(),
    ))
}

#[get("/restaurant/{restaurant_id}")]
pub async fn by_restaurant(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i64>,
) -> ApiResult<Vec<ProductRes>> {
    let products = db
        .list_available_products_by_restaurant(path.into_inner())
        .await?;
    Ok(ApiResponse::Ok(
        products.into_iter().map(ProductRes::from).collect(),
    ))
}

#[get("")]
pub async fn list_available(db: web::Data<Arc<PostgresService>>) -> ApiResult<Vec<ProductRes>> {
    let products = db.list_available_products().await?;
    Ok(ApiResponse::Ok(
        products.into_iter().map(ProductRes::from).collect(),
    ))
}

#[get("/{id}")]
pub async fn get_by_id(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i64>,
) -> ApiResult<ProductRes> {
    let product = db.get_product(path.into_inner()).await?;
    Ok(ApiResponse::Ok(product.into()))
}
