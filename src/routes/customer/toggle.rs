use crate::db::postgres_service::PostgresService;
use crate::types::customer::CustomerRes;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{delete, web};
use std::sync::Arc;

/// Soft delete: deactivates an active customer, reactivates an inactive one.
#[delete("/{id}")]
pub async fn toggle(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i64>,
) -> ApiResult<CustomerRes> {
    let customer = db.toggle_customer_active(path.into_inner()).await?;
    Ok(ApiResponse::Ok(customer.into()))
}
