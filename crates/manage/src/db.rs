//! Database connectivity.

use sea_orm::{ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement};
use settings::DatabaseConfig;

use crate::errors::ManageResult;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Connect using the resolved database settings.
    pub async fn connect(config: &DatabaseConfig) -> ManageResult<Self> {
        let url = config.url()?;
        Ok(Self::connect_url(&url).await?)
    }

    /// Connect to an explicit URL.
    pub async fn connect_url(url: &str) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(url).await?;
        Ok(Self { connection })
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}
