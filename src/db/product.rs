use crate::db::contains_ci;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::product::{RProductCreate, RProductUpdate};
use entity::product::{ActiveModel as ProductActive, Column, Entity as Product, Model as ProductModel};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl PostgresService {
    pub async fn create_product(&self, payload: RProductCreate) -> Result<ProductModel, AppError> {
        validate_product(&payload.name, payload.price)?;
        // owning restaurant must resolve before anything is written
        self.get_restaurant(payload.restaurant_id).await?;
        Ok(ProductActive {
            name: Set(payload.name),
            description: Set(payload.description),
            price: Set(payload.price),
            category: Set(payload.category),
            available: Set(true),
            restaurant_id: Set(payload.restaurant_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn get_product(&self, id: i64) -> Result<ProductModel, AppError> {
        Product::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Produto não encontrado: {}", id)))
    }

    pub async fn list_available_products(&self) -> Result<Vec<ProductModel>, AppError> {
        Ok(Product::find()
            .filter(Column::Available.eq(true))
            .all(&self.db)
            .await?)
    }

    pub async fn list_available_products_by_restaurant(
        &self,
        restaurant_id: i64,
    ) -> Result<Vec<ProductModel>, AppError> {
        Ok(Product::find()
            .filter(Column::RestaurantId.eq(restaurant_id))
            .filter(Column::Available.eq(true))
            .all(&self.db)
            .await?)
    }

    /// Update may reassign the owning restaurant; the new owner must exist.
    pub async fn update_product(
        &self,
        id: i64,
        payload: RProductUpdate,
    ) -> Result<ProductModel, AppError> {
        validate_product(&payload.name, payload.price)?;
        let existing = self.get_product(id).await?;
        self.get_restaurant(payload.restaurant_id).await?;
        let mut am: ProductActive = existing.into();
        am.name = Set(payload.name);
        am.description = Set(payload.description);
        am.price = Set(payload.price);
        am.category = Set(payload.category);
        am.restaurant_id = Set(payload.restaurant_id);
        Ok(am.update(&self.db).await?)
    }

    /// "Remove" a product: mark it unavailable, keep the row.
    pub async fn make_product_unavailable(&self, id: i64) -> Result<ProductModel, AppError> {
        let existing = self.get_product(id).await?;
        let mut am: ProductActive = existing.into();
        am.available = Set(false);
        Ok(am.update(&self.db).await?)
    }

    pub async fn search_products_by_name(&self, name: &str) -> Result<Vec<ProductModel>, AppError> {
        Ok(Product::find()
            .filter(contains_ci(Column::Name, name))
            .all(&self.db)
            .await?)
    }
}

fn validate_product(name: &str, price: Decimal) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("Nome não pode ser vazio".to_string()));
    }
    if price <= Decimal::ZERO {
        return Err(AppError::Validation(
            "Preço deve ser maior que zero".to_string(),
        ));
    }
    Ok(())
}
