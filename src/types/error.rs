use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // referenced entity id/number does not resolve
    #[error("{0}")]
    NotFound(String),
    // malformed or missing input, duplicate unique field
    #[error("{0}")]
    Validation(String),
    // entity exists but the operation is illegal in its current state
    #[error("{0}")]
    BusinessRule(String),

    // infra things
    #[error(transparent)]
    Db(DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a, 'b> {
    error: &'a str,
    message: &'b str,
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BusinessRule(_) => "BUSINESS_RULE",
            Self::Db(_) => "DB_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
    fn from_db(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(msg) => AppError::NotFound(msg),
            _ => AppError::Db(err),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::BusinessRule(_) => StatusCode::CONFLICT,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.kind(),
            message: &self.to_string(),
        })
    }
}
