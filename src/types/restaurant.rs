use entity::restaurant;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct RRestaurantCreate {
    pub name: String,
    pub category: String,
    pub address: String,
    pub phone: Option<String>,
    pub delivery_fee: Decimal,
}

/// Rating and active flag are deliberately absent; updates never touch them.
#[derive(Serialize, Deserialize)]
pub struct RRestaurantUpdate {
    pub name: String,
    pub category: String,
    pub address: String,
    pub phone: Option<String>,
    pub delivery_fee: Decimal,
}

#[derive(Serialize, Deserialize)]
pub struct RestaurantRes {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub address: String,
    pub phone: Option<String>,
    pub delivery_fee: Decimal,
    pub rating: f64,
    pub active: bool,
}

impl From<restaurant::Model> for RestaurantRes {
    fn from(m: restaurant::Model) -> Self {
        RestaurantRes {
            id: m.id,
            name: m.name,
            category: m.category,
            address: m.address,
            phone: m.phone,
            delivery_fee: m.delivery_fee,
            rating: m.rating,
            active: m.active,
        }
    }
}
