/// Embedded schema-script runner
///
/// Each Bureau application owns its schema and embeds it with
/// `sqlx::migrate!` from its own `migrations/` directory; this module
/// applies that migrator at startup.
///
/// # Example
///
/// ```ignore
/// static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
///
/// let pool = create_pool(DatabaseConfig::default()).await?;
/// run_migrations(&pool, &MIGRATOR).await?;
/// ```

use sqlx::migrate::Migrator;
use sqlx::SqlitePool;
use tracing::{info, warn};

/// Applies all pending schema scripts from the given migrator
///
/// # Errors
///
/// Returns an error if a script is malformed or fails to execute.
pub async fn run_migrations(
    pool: &SqlitePool,
    migrator: &Migrator,
) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Applying database schema");

    match migrator.run(pool).await {
        Ok(()) => {
            info!("Database schema is up to date");
            Ok(())
        }
        Err(e) => {
            warn!("Schema migration failed: {}", e);
            Err(e)
        }
    }
}
