use crate::db::postgres_service::PostgresService;
use crate::types::product::ProductRes;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{delete, web};
use std::sync::Arc;

/// "Remove" marks the product unavailable; the row stays.
#[delete("/{id}")]
pub async fn remove(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i64>,
) -> ApiResult<ProductRes> {
    let product = db.make_product_unavailable(path.into_inner()).await?;
    Ok(ApiResponse::Ok(product.into()))
}
