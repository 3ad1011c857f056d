use crate::db::postgres_service::PostgresService;
use crate::types::order::{OrderRes, ROrderCreate};
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{post, web};
use std::sync::Arc;

#[post("")]
pub async fn create(
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<ROrderCreate>,
) -> ApiResult<OrderRes> {
    let order = db.create_order(body.into_inner()).await?;
    Ok(ApiResponse::Created(order.into()))
}
