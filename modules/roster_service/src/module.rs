//! Module wiring and lifecycle
//!
//! Owns nothing global: the caller opens the database connection, hands it to
//! [`RosterModule::init`], and closes it after the server has stopped.

use crate::config::{ApiConfig, DatabaseConfig};
use crate::domain::Service;
use crate::infra::storage::{Migrator, SeaOrmGroupRepository, SeaOrmStudentRepository};
use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// Roster service module
pub struct RosterModule {
    service: Arc<Service>,
}

impl RosterModule {
    /// Build repositories and the domain service on top of `conn`
    pub fn init(conn: &DatabaseConnection, api: &ApiConfig) -> Self {
        let conn = Arc::new(conn.clone());

        let student_repo = Arc::new(SeaOrmStudentRepository::new(conn.clone()));
        let group_repo = Arc::new(SeaOrmGroupRepository::new(conn));
        let service = Arc::new(Service::new(student_repo, group_repo, api.max_page_size));

        tracing::info!("Roster service initialized");
        Self { service }
    }

    /// Domain service shared by all handlers
    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// REST routes for this module
    pub fn router(&self) -> axum::Router {
        crate::api::rest::routes::register_routes(axum::Router::new(), self.service())
    }
}

/// Open the connection pool described by `config`
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.connection_url());
    options
        .max_connections(config.max_connections)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.connect_timeout)
        .test_before_acquire(true)
        .sqlx_logging(config.sql_logging);

    tracing::info!(url = %config.redacted_url(), "Connecting to database");
    Database::connect(options)
        .await
        .with_context(|| format!("failed to connect to {}", config.redacted_url()))
}

/// Apply pending schema migrations
pub async fn migrate(conn: &DatabaseConnection) -> Result<()> {
    Migrator::up(conn, None)
        .await
        .context("failed to run roster migrations")?;
    tracing::info!("Roster service migrations completed");
    Ok(())
}
