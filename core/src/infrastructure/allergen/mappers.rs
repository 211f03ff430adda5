use crate::{domain::allergen::entities::Allergen, entity::allergens};

impl From<allergens::Model> for Allergen {
    fn from(model: allergens::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            name: model.name,
            substances: model.substances,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}
