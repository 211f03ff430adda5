use std::sync::Arc;

use pantryguard_core::{
    application::PantryguardService, infrastructure::user::PostgresUserRepository,
};

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: PantryguardService,
    pub user_repository: Arc<PostgresUserRepository>,
}

impl AppState {
    pub fn new(
        args: Arc<Args>,
        service: PantryguardService,
        user_repository: PostgresUserRepository,
    ) -> Self {
        Self {
            args,
            service,
            user_repository: Arc::new(user_repository),
        }
    }
}
