/// Database layer for the Bureau applications
///
/// This module provides connection pooling and schema bootstrap for the
/// SQLite databases each application owns.
///
/// # Modules
///
/// - `pool`: SQLite connection pool management with a startup health check
/// - `migrations`: embedded schema-script runner
///
/// # Example
///
/// ```no_run
/// use bureau_shared::db::pool::{create_pool, DatabaseConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: std::env::var("DATABASE_URL")?,
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///     Ok(())
/// }
/// ```

pub mod migrations;
pub mod pool;
