use crate::db::postgres_service::PostgresService;
use crate::types::customer::{CustomerRes, RCustomerUpdate};
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{put, web};
use std::sync::Arc;

#[put("/{id}")]
pub async fn update(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i64>,
    body: web::Json<RCustomerUpdate>,
) -> ApiResult<CustomerRes> {
    let customer = db
        .update_customer(path.into_inner(), body.into_inner())
        .await?;
    Ok(ApiResponse::Ok(customer.into()))
}
