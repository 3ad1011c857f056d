use crate::db::postgres_service::PostgresService;
use crate::types::product::{ProductRes, RProductUpdate};
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{put, web};
use std::sync::Arc;

#[put("/{id}")]
pub async fn update(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i64>,
    body: web::Json<RProductUpdate>,
) -> ApiResult<ProductRes> {
    let product = db
        .update_product(path.into_inner(), body.into_inner())
        .await?;
    Ok(ApiResponse::Ok(product.into()))
}
