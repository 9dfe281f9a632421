//! Database connection and migration bootstrap.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::{config::Config, error::Error};

/// Connect to the database and bring the schema up to date.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "database connection established"
    );

    Migrator::up(&db, None).await?;

    Ok(db)
}
