use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use tracing::{debug, error, info, trace};

use crate::schemas::AppState;

/// Connect to the database and run pending migrations.
///
/// SQLite URLs should carry `?mode=rwc` so a missing file is created.
pub async fn connect_and_migrate(database_url: &str) -> Result<DatabaseConnection> {
    trace!("Attempting to connect to database");
    let db = match Database::connect(database_url).await {
        Ok(connection) => {
            info!("Successfully connected to database");
            connection
        }
        Err(e) => {
            error!("Failed to connect to database '{}': {}", database_url, e);
            return Err(e.into());
        }
    };

    info!("Running database migrations");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run database migrations: {}", e);
        return Err(e.into());
    }
    debug!("All pending migrations have been applied");

    Ok(db)
}

/// Initialize application state with a migrated database
pub async fn initialize_app_state_with_url(database_url: &str) -> Result<AppState> {
    debug!("Database URL: {}", database_url);
    let db = connect_and_migrate(database_url).await?;
    Ok(AppState { db })
}
