use crate::db::contains_ci;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::restaurant::{RRestaurantCreate, RRestaurantUpdate};
use entity::restaurant::{
    ActiveModel as RestaurantActive, Column, Entity as Restaurant, Model as RestaurantModel,
};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl PostgresService {
    pub async fn create_restaurant(
        &self,
        payload: RRestaurantCreate,
    ) -> Result<RestaurantModel, AppError> {
        validate_restaurant(&payload.name, &payload.address, payload.delivery_fee)?;
        Ok(RestaurantActive {
            name: Set(payload.name),
            category: Set(payload.category),
            address: Set(payload.address),
            phone: Set(payload.phone),
            delivery_fee: Set(payload.delivery_fee),
            rating: Set(0.0),
            active: Set(true),
            ..Default::default()
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn get_restaurant(&self, id: i64) -> Result<RestaurantModel, AppError> {
        Restaurant::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Restaurante não encontrado: {}", id)))
    }

    pub async fn list_active_restaurants(&self) -> Result<Vec<RestaurantModel>, AppError> {
        Ok(Restaurant::find()
            .filter(Column::Active.eq(true))
            .all(&self.db)
            .await?)
    }

    /// Rating and active flag are preserved; updates never write them.
    pub async fn update_restaurant(
        &self,
        id: i64,
        payload: RRestaurantUpdate,
    ) -> Result<RestaurantModel, AppError> {
        validate_restaurant(&payload.name, &payload.address, payload.delivery_fee)?;
        let existing = self.get_restaurant(id).await?;
        let mut am: RestaurantActive = existing.into();
        am.name = Set(payload.name);
        am.category = Set(payload.category);
        am.address = Set(payload.address);
        am.phone = Set(payload.phone);
        am.delivery_fee = Set(payload.delivery_fee);
        Ok(am.update(&self.db).await?)
    }

    pub async fn toggle_restaurant_active(&self, id: i64) -> Result<RestaurantModel, AppError> {
        let existing = self.get_restaurant(id).await?;
        let next = !existing.active;
        let mut am: RestaurantActive = existing.into();
        am.active = Set(next);
        Ok(am.update(&self.db).await?)
    }

    pub async fn search_restaurants_by_name(
        &self,
        name: &str,
    ) -> Result<Vec<RestaurantModel>, AppError> {
        Ok(Restaurant::find()
            .filter(contains_ci(Column::Name, name))
            .all(&self.db)
            .await?)
    }

    pub async fn search_restaurants_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<RestaurantModel>, AppError> {
        Ok(Restaurant::find()
            .filter(contains_ci(Column::Category, category))
            .all(&self.db)
            .await?)
    }
}

fn validate_restaurant(name: &str, address: &str, delivery_fee: Decimal) -> Result<(), AppError> {
    if name.trim().chars().count() < 2 {
        return Err(AppError::Validation(
            "Nome deve ter pelo menos 2 caracteres".to_string(),
        ));
    }
    if address.trim().is_empty() {
        return Err(AppError::Validation(
            "Endereço não pode ser vazio".to_string(),
        ));
    }
    if delivery_fee < Decimal::ZERO {
        return Err(AppError::Validation(
            "Taxa de entrega não pode ser negativa".to_string(),
        ));
    }
    Ok(())
}
