use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One aggregated row of the sales report.
#[derive(Debug, Serialize, Deserialize)]
pub struct SalesReport {
    pub restaurant_name: String,
    pub total_sales: Decimal,
    pub order_count: i64,
}
