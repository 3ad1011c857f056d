use crate::db::postgres_service::PostgresService;
use crate::types::order::OrderRes;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{delete, web};
use std::sync::Arc;

/// DELETE on an order cancels it; the record itself is never removed.
#[delete("/{id}")]
pub async fn cancel(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i64>,
) -> ApiResult<OrderRes> {
    let order = db.cancel_order(path.into_inner()).await?;
    Ok(ApiResponse::Ok(order.into()))
}
