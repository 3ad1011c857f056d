use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::order::ROrderCreate;
use crate::utils::order_number::new_order_number;
use chrono::Utc;
use entity::order::{ActiveModel as OrderActive, Column, Entity as Order, Model as OrderModel, OrderStatus};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl PostgresService {
    /// Creates an order in PENDENTE. Both referenced records are resolved
    /// before anything is written, so a failed create persists nothing.
    pub async fn create_order(&self, payload: ROrderCreate) -> Result<OrderModel, AppError> {
        self.get_customer(payload.customer_id).await?;
        self.get_restaurant(payload.restaurant_id).await?;
        if payload.items.trim().is_empty() {
            return Err(AppError::Validation(
                "O pedido deve conter ao menos um item".to_string(),
            ));
        }
        if payload.total_value <= Decimal::ZERO {
            return Err(AppError::Validation(
                "Valor total deve ser maior que zero".to_string(),
            ));
        }
        Ok(OrderActive {
            order_number: Set(new_order_number()),
            placed_at: Set(Utc::now()),
            status: Set(OrderStatus::Pendente),
            total_value: Set(payload.total_value),
            items: Set(payload.items),
            notes: Set(payload.notes),
            customer_id: Set(payload.customer_id),
            restaurant_id: Set(payload.restaurant_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn get_order(&self, id: i64) -> Result<OrderModel, AppError> {
        Order::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Pedido não encontrado: {}", id)))
    }

    pub async fn get_order_by_number(&self, number: &str) -> Result<OrderModel, AppError> {
        Order::find()
            .filter(Column::OrderNumber.eq(number))
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Pedido não encontrado: {}", number)))
    }

    pub async fn list_orders_by_customer(
        &self,
        customer_id: i64,
    ) -> Result<Vec<OrderModel>, AppError> {
        Ok(Order::find()
            .filter(Column::CustomerId.eq(customer_id))
            .all(&self.db)
            .await?)
    }

    pub async fn list_orders_by_status(&self, raw: &str) -> Result<Vec<OrderModel>, AppError> {
        let status = parse_status(raw)?;
        Ok(Order::find()
            .filter(Column::Status.eq(status))
            .all(&self.db)
            .await?)
    }

    /// Permissive transition graph: any non-terminal order may jump to any
    /// status, including a terminal one. Only ENTREGUE and CANCELADO are
    /// locked down.
    pub async fn update_order_status(&self, id: i64, raw: &str) -> Result<OrderModel, AppError> {
        let order = self.get_order(id).await?;
        let new_status = parse_status(raw)?;
        if order.status.is_terminal() {
            return Err(AppError::BusinessRule(format!(
                "Não é possível alterar o status de um pedido que já foi {}",
                order.status.label().to_lowercase()
            )));
        }
        let mut am: OrderActive = order.into();
        am.status = Set(new_status);
        Ok(am.update(&self.db).await?)
    }

    /// Cancellation is a constrained transition, not a delete.
    pub async fn cancel_order(&self, id: i64) -> Result<OrderModel, AppError> {
        let order = self.get_order(id).await?;
        match order.status {
            OrderStatus::Entregue => Err(AppError::BusinessRule(
                "Não é possível cancelar um pedido já entregue.".to_string(),
            )),
            OrderStatus::Cancelado => Err(AppError::BusinessRule(
                "Este pedido já está cancelado.".to_string(),
            )),
            _ => {
                let mut am: OrderActive = order.into();
                am.status = Set(OrderStatus::Cancelado);
                Ok(am.update(&self.db).await?)
            }
        }
    }
}

fn parse_status(raw: &str) -> Result<OrderStatus, AppError> {
    if raw.trim().is_empty() {
        return Err(AppError::Validation(
            "Status não pode ser nulo ou vazio".to_string(),
        ));
    }
    OrderStatus::parse(raw).ok_or_else(|| AppError::Validation(format!("Status inválido: {}", raw)))
}
