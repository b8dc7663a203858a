//! Database connection setup.

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::errors::domain::{DomainError, InfraErrorKind};

/// Connect to the database behind `url` with the standard pool settings.
pub async fn connect_db(url: &str) -> Result<DatabaseConnection, DomainError> {
    let mut opts = ConnectOptions::new(url.to_owned());
    opts.max_connections(10)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .sqlx_logging(false);

    let db = Database::connect(opts).await.map_err(|e| {
        DomainError::infra(
            InfraErrorKind::DbUnavailable,
            format!("Failed to connect to database: {e}"),
        )
    })?;

    info!("Database connection established");
    Ok(db)
}
