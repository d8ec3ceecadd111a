use crate::models::anime::{Anime, AnimeFields};
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

/// Sole owner of the database connection. The pool underneath is safe for
/// concurrent use, so handlers share one `Store` clone with no extra
/// locking.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        // sqlite needs the database file (and its directory) to exist up
        // front; server backends manage their own storage.
        if let Some(path_str) = db_url.strip_prefix("sqlite:") {
            if !path_str.starts_with(":memory:") {
                if let Some(parent) = Path::new(path_str).parent() {
                    tokio::fs::create_dir_all(parent).await.ok();
                }
                if !Path::new(path_str).exists() {
                    std::fs::File::create(path_str)?;
                }
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn anime_repo(&self) -> repositories::anime::AnimeRepository {
        repositories::anime::AnimeRepository::new(self.conn.clone())
    }

    /// Inserts a record and returns the id the database assigned to it.
    pub async fn add_anime(&self, fields: &AnimeFields) -> Result<i32> {
        self.anime_repo().insert(fields).await
    }

    pub async fn get_anime(&self, id: i32) -> Result<Option<Anime>> {
        self.anime_repo().get(id).await
    }

    pub async fn list_anime(&self) -> Result<Vec<Anime>> {
        self.anime_repo().list_all().await
    }

    pub async fn update_anime(&self, id: i32, fields: &AnimeFields) -> Result<()> {
        self.anime_repo().update(id, fields).await
    }

    pub async fn remove_anime(&self, id: i32) -> Result<bool> {
        self.anime_repo().remove(id).await
    }
}
