use uuid::Uuid;

use crate::domain::user::entities::User;

/// The authenticated caller, resolved by the auth layer before any core
/// operation runs. Core code never reads an ambient current user; the owner
/// id is always passed down explicitly from here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    User(User),
}

impl Identity {
    pub fn user_id(&self) -> Uuid {
        match self {
            Identity::User(user) => user.id,
        }
    }
}

pub struct UpdateProfileInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}
