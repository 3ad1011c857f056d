use crate::db::postgres_service::PostgresService;
use crate::types::customer::CustomerRes;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
}

#[get("/search")]
pub async fn search(
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<SearchQuery>,
) -> ApiResult<Vec<CustomerRes>> {
    let name = query
        .into_inner()
        .name
        .ok_or_else(|| AppError::Validation("Informe o parâmetro 'name'".to_string()))?;
    let customers = db.search_customers_by_name(&name).await?;
    Ok(ApiResponse::Ok(
        customers.into_iter().map(CustomerRes::from).collect(),
    ))
}

#[get("/email/{email}")]
pub async fn get_by_email(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
) -> ApiResult<CustomerRes> {
    let customer = db.get_customer_by_email(&path.into_inner()).await?;
    Ok(ApiResponse::Ok(customer.into()))
}

#[get("")]
pub async fn list_active(db: web::Data<Arc<PostgresService>>) -> ApiResult<Vec<CustomerRes>> {
    let customers = db.list_active_customers().await?;
    Ok(ApiResponse::Ok(
        customers.into_iter().map(CustomerRes::from).collect(),
    ))
}

#[get("/{id}")]
pub async fn get_by_id(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i64>,
) -> ApiResult<CustomerRes> {
    let customer = db.get_customer(path.into_inner()).await?;
    Ok(ApiResponse::Ok(customer.into()))
}
