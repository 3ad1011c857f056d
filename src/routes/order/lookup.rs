use crate::db::postgres_service::PostgresService;
use crate::types::order::OrderRes;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use std::sync::Arc;

#[get("/number/{number}")]
pub async fn get_by_number(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
) -> ApiResult<OrderRes> {
    let order = db.get_order_by_number(&path.into_inner()).await?;
    Ok(ApiResponse::Ok(order.into()))
}

#[get("/customer/{customer_id}")]
pub async fn list_by_customer(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i64>,
) -> ApiResult<Vec<OrderRes>> {
    let orders = db.list_orders_by_customer(path.into_inner()).await?;
    Ok(ApiResponse::Ok(
        orders.into_iter().map(OrderRes::from).collect(),
    ))
}

/// Status comes in as text and is parsed case-insensitively;
/// an unknown value is a 400, not an empty list.
#[get("/status/{status}")]
pub async fn list_by_status(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
) -> ApiResult<Vec<OrderRes>> {
    let orders = db.list_orders_by_status(&path.into_inner()).await?;
    Ok(ApiResponse::Ok(
        orders.into_iter().map(OrderRes::from).collect(),
    ))
}

#[get("/{id}")]
pub async fn get_by_id(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i64>,
) -> ApiResult<OrderRes> {
    let order = db.get_order(path.into_inner()).await?;
    Ok(ApiResponse::Ok(order.into()))
}
