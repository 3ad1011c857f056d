use crate::db::postgres_service::PostgresService;
use crate::types::product::{ProductRes, RProductCreate};
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{post, web};
use std::sync::Arc;

#[post("")]
pub async fn create(
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RProductCreate>,
) -> ApiResult<ProductRes> {
    let product = db.create_product(body.into_inner()).await?;
    Ok(ApiResponse::Created(product.into()))
}
