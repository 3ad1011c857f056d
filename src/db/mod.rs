use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::ColumnTrait;

pub mod customer;
pub mod order;
pub mod postgres_service;
pub mod product;
pub mod report;
pub mod restaurant;

/// Case-insensitive substring match: LOWER(col) LIKE '%needle%'.
pub(crate) fn contains_ci<C: ColumnTrait>(col: C, needle: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(col))).like(format!("%{}%", needle.to_lowercase()))
}
