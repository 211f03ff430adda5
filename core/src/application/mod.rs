use crate::{
    domain::common::{PantryguardConfig, services::Service},
    infrastructure::{
        allergen::PostgresAllergenRepository,
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
        product::PostgresProductRepository,
        reaction::PostgresReactionRepository,
        user::PostgresUserRepository,
    },
};

pub type PantryguardService = Service<
    PostgresUserRepository,
    PostgresProductRepository,
    PostgresAllergenRepository,
    PostgresReactionRepository,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: PantryguardConfig) -> Result<PantryguardService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;
    let db = postgres.get_db();

    Ok(Service::new(
        PostgresUserRepository::new(db.clone()),
        PostgresProductRepository::new(db.clone()),
        PostgresAllergenRepository::new(db.clone()),
        PostgresReactionRepository::new(db.clone()),
        PostgresHealthCheckRepository::new(db),
    ))
}
