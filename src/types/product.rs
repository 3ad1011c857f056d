use entity::product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct RProductCreate {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: Option<String>,
    pub restaurant_id: i64,
}

#[derive(Serialize, Deserialize)]
pub struct RProductUpdate {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: Option<String>,
    pub restaurant_id: i64,
}

#[derive(Serialize, Deserialize)]
pub struct ProductRes {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: Option<String>,
    pub available: bool,
    pub restaurant_id: i64,
}

impl From<product::Model> for ProductRes {
    fn from(m: product::Model) -> Self {
        ProductRes {
            id: m.id,
            name: m.name,
            description: m.description,
            price: m.price,
            category: m.category,
            available: m.available,
            restaurant_id: m.restaurant_id,
        }
    }
}
