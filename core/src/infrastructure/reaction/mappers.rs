use crate::{domain::reaction::entities::Reaction, entity::reactions};

impl From<reactions::Model> for Reaction {
    fn from(model: reactions::Model) -> Self {
        Self {
            id: model.id,
            product_id: model.product_id,
            allergen_id: model.allergen_id,
            user_id: model.user_id,
            reactive_ingredient: model.reactive_ingredient,
            reactive_substances: model.reactive_substances,
            created_at: model.created_at.to_utc(),
        }
    }
}
