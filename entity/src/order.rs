use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-facing identifier, immutable after creation.
    #[sea_orm(unique)]
    pub order_number: String,
    pub placed_at: DateTimeUtc,
    pub status: OrderStatus,
    pub total_value: Decimal,
    pub items: String,
    pub notes: Option<String>,
    pub customer_id: i64,   // FK -> customer.id
    pub restaurant_id: i64, // FK -> restaurant.id
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum OrderStatus {
    #[sea_orm(string_value = "PENDENTE")]
    Pendente,
    #[sea_orm(string_value = "CONFIRMADO")]
    Confirmado,
    #[sea_orm(string_value = "PREPARANDO")]
    Preparando,
    #[sea_orm(string_value = "SAIU_PARA_ENTREGA")]
    SaiuParaEntrega,
    #[sea_orm(string_value = "ENTREGUE")]
    Entregue,
    #[sea_orm(string_value = "CANCELADO")]
    Cancelado,
}

impl OrderStatus {
    /// Case-insensitive parse of the wire name ("pendente", "PENDENTE", ...).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "PENDENTE" => Some(Self::Pendente),
            "CONFIRMADO" => Some(Self::Confirmado),
            "PREPARANDO" => Some(Self::Preparando),
            "SAIU_PARA_ENTREGA" => Some(Self::SaiuParaEntrega),
            "ENTREGUE" => Some(Self::Entregue),
            "CANCELADO" => Some(Self::Cancelado),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pendente => "Pendente",
            Self::Confirmado => "Confirmado",
            Self::Preparando => "Preparando",
            Self::SaiuParaEntrega => "Saiu para entrega",
            Self::Entregue => "Entregue",
            Self::Cancelado => "Cancelado",
        }
    }

    /// ENTREGUE and CANCELADO admit no further transition.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Entregue | Self::Cancelado)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id"
    )]
    Customer,
    #[sea_orm(
        belongs_to = "super::restaurant::Entity",
        from = "Column::RestaurantId",
        to = "super::restaurant::Column::Id"
    )]
    Restaurant,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::restaurant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Restaurant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::OrderStatus;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(OrderStatus::parse("pendente"), Some(OrderStatus::Pendente));
        assert_eq!(OrderStatus::parse("PENDENTE"), Some(OrderStatus::Pendente));
        assert_eq!(
            OrderStatus::parse("  saiu_para_entrega "),
            Some(OrderStatus::SaiuParaEntrega)
        );
        assert_eq!(OrderStatus::parse("bogus"), None);
    }

    #[test]
    fn only_delivered_and_cancelled_are_terminal() {
        assert!(OrderStatus::Entregue.is_terminal());
        assert!(OrderStatus::Cancelado.is_terminal());
        assert!(!OrderStatus::Pendente.is_terminal());
        assert!(!OrderStatus::SaiuParaEntrega.is_terminal());
    }
}
