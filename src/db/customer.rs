use crate::db::contains_ci;
use crate::db::postgres_service::PostgresService;
use crate::types::customer::{RCustomerCreate, RCustomerUpdate};
use crate::types::error::AppError;
use chrono::Utc;
use entity::customer::{ActiveModel as CustomerActive, Column, Entity as Customer, Model as CustomerModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

impl PostgresService {
    /// Uniqueness spans active and inactive customers; `exclude` skips the
    /// record's own row on update.
    pub async fn customer_email_taken(
        &self,
        email: &str,
        exclude: Option<i64>,
    ) -> Result<bool, AppError> {
        let mut query = Customer::find().filter(Column::Email.eq(email));
        if let Some(id) = exclude {
            query = query.filter(Column::Id.ne(id));
        }
        Ok(query.count(&self.db).await? > 0)
    }

    pub async fn create_customer(&self, payload: RCustomerCreate) -> Result<CustomerModel, AppError> {
        validate_customer(&payload.name, &payload.email)?;
        if self.customer_email_taken(&payload.email, None).await? {
            return Err(AppError::Validation(format!(
                "Email já cadastrado: {}",
                payload.email
            )));
        }
        Ok(CustomerActive {
            name: Set(payload.name),
            email: Set(payload.email),
            phone: Set(payload.phone),
            address: Set(payload.address),
            registered_at: Set(Utc::now()),
            active: Set(true),
            ..Default::default()
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn get_customer(&self, id: i64) -> Result<CustomerModel, AppError> {
        Customer::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Cliente não encontrado: {}", id)))
    }

    pub async fn get_customer_by_email(&self, email: &str) -> Result<CustomerModel, AppError> {
        Customer::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Cliente não encontrado com email: {}", email)))
    }

    pub async fn list_active_customers(&self) -> Result<Vec<CustomerModel>, AppError> {
        Ok(Customer::find()
            .filter(Column::Active.eq(true))
            .all(&self.db)
            .await?)
    }

    pub async fn update_customer(
        &self,
        id: i64,
        payload: RCustomerUpdate,
    ) -> Result<CustomerModel, AppError> {
        validate_customer(&payload.name, &payload.email)?;
        let existing = self.get_customer(id).await?;
        if self.customer_email_taken(&payload.email, Some(id)).await? {
            return Err(AppError::Validation(format!(
                "Email já cadastrado: {}",
                payload.email
            )));
        }
        let mut am: CustomerActive = existing.into();
        am.name = Set(payload.name);
        am.email = Set(payload.email);
        am.phone = Set(payload.phone);
        am.address = Set(payload.address);
        Ok(am.update(&self.db).await?)
    }

    /// Soft delete: flips the active flag both ways, never removes the row.
    pub async fn toggle_customer_active(&self, id: i64) -> Result<CustomerModel, AppError> {
        let existing = self.get_customer(id).await?;
        let next = !existing.active;
        let mut am: CustomerActive = existing.into();
        am.active = Set(next);
        Ok(am.update(&self.db).await?)
    }

    pub async fn search_customers_by_name(&self, name: &str) -> Result<Vec<CustomerModel>, AppError> {
        Ok(Customer::find()
            .filter(contains_ci(Column::Name, name))
            .all(&self.db)
            .await?)
    }
}

fn validate_customer(name: &str, email: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("Nome não pode ser vazio".to_string()));
    }
    if email.trim().is_empty() {
        return Err(AppError::Validation("Email não pode ser vazio".to_string()));
    }
    Ok(())
}
