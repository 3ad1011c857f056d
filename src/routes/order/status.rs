use crate::db::postgres_service::PostgresService;
use crate::types::order::{OrderRes, RStatusUpdate};
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{patch, web};
use std::sync::Arc;

#[patch("/{id}/status")]
pub async fn update_status(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i64>,
    body: web::Json<RStatusUpdate>,
) -> ApiResult<OrderRes> {
    let order = db
        .update_order_status(path.into_inner(), &body.status)
        .await?;
    Ok(ApiResponse::Ok(order.into()))
}
