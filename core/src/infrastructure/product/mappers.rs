use crate::{domain::product::entities::Product, entity::products};

impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            name: model.name,
            ingredients: model.ingredients,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}
