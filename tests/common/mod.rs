//! Helpers for integration tests.

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::NamedTempFile;
use zoomplay::db::{DbPool, establish_connection_pool};
use zoomplay::domain::catalog::{CatalogKind, NewCatalogItem};
use zoomplay::domain::types::{ImageUrl, ItemName, VideoUrl};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

#[allow(dead_code)]
pub fn new_item(kind: CatalogKind, name: &str) -> NewCatalogItem {
    NewCatalogItem {
        kind,
        name: ItemName::new(name).expect("valid name"),
        image_url: ImageUrl::new(format!("https://img.example/{name}.jpg")).expect("valid image"),
        video_url: VideoUrl::new(format!("https://video.example/{name}.mp4"))
            .expect("valid video"),
    }
}
