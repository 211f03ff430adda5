use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn update_profile(
        &mut self,
        first_name: Option<String>,
        last_name: Option<String>,
        address: Option<String>,
        phone: Option<String>,
    ) {
        let (now, _) = crate::domain::common::generate_timestamp();

        if let Some(f) = first_name {
            self.first_name = f;
        }
        if let Some(l) = last_name {
            self.last_name = l;
        }
        if let Some(a) = address {
            self.address = a;
        }
        if let Some(p) = phone {
            self.phone = p;
        }
        self.updated_at = now;
    }
}
