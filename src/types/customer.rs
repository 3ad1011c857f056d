use chrono::{DateTime, Utc};
use entity::customer;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct RCustomerCreate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct RCustomerUpdate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct CustomerRes {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub registered_at: DateTime<Utc>,
    pub active: bool,
}

impl From<customer::Model> for CustomerRes {
    fn from(m: customer::Model) -> Self {
        CustomerRes {
            id: m.id,
            name: m.name,
            email: m.email,
            phone: m.phone,
            address: m.address,
            registered_at: m.registered_at,
            active: m.active,
        }
    }
}
