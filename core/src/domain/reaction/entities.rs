use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// One derived match: a product implicates an allergen category through a
/// specific ingredient token and the substance tokens it matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Reaction {
    pub id: Uuid,
    pub product_id: Uuid,
    pub allergen_id: Uuid,
    pub user_id: Uuid,
    /// The matched ingredient token, uppercased.
    pub reactive_ingredient: String,
    /// The matched substance tokens, joined with `;`.
    pub reactive_substances: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ReactionConfig {
    pub product_id: Uuid,
    pub allergen_id: Uuid,
    pub user_id: Uuid,
    pub reactive_ingredient: String,
    pub reactive_substances: String,
}

impl Reaction {
    pub fn new(config: ReactionConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            product_id: config.product_id,
            allergen_id: config.allergen_id,
            user_id: config.user_id,
            reactive_ingredient: config.reactive_ingredient,
            reactive_substances: config.reactive_substances,
            created_at: now,
        }
    }
}
