use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// An allergen category: a label plus a comma-space separated list of
/// trigger substances. The category is implicated by a product whenever one
/// of its substance tokens contains an ingredient token of that product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Allergen {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub substances: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Allergen {
    pub fn new(user_id: Uuid, name: String, substances: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            name,
            substances,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, name: Option<String>, substances: Option<String>) {
        let (now, _) = generate_timestamp();

        if let Some(n) = name {
            self.name = n;
        }
        if let Some(s) = substances {
            self.substances = s;
        }
        self.updated_at = now;
    }
}
