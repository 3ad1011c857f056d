use crate::db::postgres_service::PostgresService;
use crate::types::customer::{CustomerRes, RCustomerCreate};
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{post, web};
use std::sync::Arc;

#[post("")]
pub async fn create(
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RCustomerCreate>,
) -> ApiResult<CustomerRes> {
    let customer = db.create_customer(body.into_inner()).await?;
    Ok(ApiResponse::Created(customer.into()))
}
