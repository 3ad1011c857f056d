use chrono::{DateTime, Utc};
use entity::order;
use rust_decimal::Decimal;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ROrderCreate {
    pub customer_id: i64,
    pub restaurant_id: i64,
    pub items: String,
    pub total_value: Decimal,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct RStatusUpdate {
    pub status: String,
}

#[derive(Serialize, Deserialize)]
pub struct OrderRes {
    pub id: i64,
    pub order_number: String,
    pub placed_at: DateTime<Utc>,
    /// Wire name of the status, e.g. "PENDENTE" or "SAIU_PARA_ENTREGA".
    pub status: String,
    pub total_value: Decimal,
    pub items: String,
    pub notes: Option<String>,
    pub customer_id: i64,
    pub restaurant_id: i64,
}

impl From<order::Model> for OrderRes {
    fn from(m: order::Model) -> Self {
        OrderRes {
            id: m.id,
            order_number: m.order_number,
            placed_at: m.placed_at,
            status: m.status.to_value(),
            total_value: m.total_value,
            items: m.items,
            notes: m.notes,
            customer_id: m.customer_id,
            restaurant_id: m.restaurant_id,
        }
    }
}
