use crate::db::{DbConnection, DbPool};
use crate::domain::catalog::{CatalogItem, CatalogKind, NewCatalogItem};
use crate::domain::types::CatalogItemId;

pub mod catalog;
pub mod errors;

pub use errors::{RepositoryError, RepositoryResult};

/// Number of rows shown per kind on the "latest additions" page.
pub const RECENT_ITEMS_LIMIT: usize = 2;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing or searching catalog items.
#[derive(Debug, Clone)]
pub struct CatalogListQuery {
    /// Table to read from.
    pub kind: CatalogKind,
    /// Substring the item name must contain. Empty strings match everything.
    pub search: Option<String>,
    /// Return only the `n` newest rows, newest first.
    pub recent: Option<usize>,
}

impl CatalogListQuery {
    pub fn new(kind: CatalogKind) -> Self {
        Self {
            kind,
            search: None,
            recent: None,
        }
    }
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
    pub fn recent(mut self, limit: usize) -> Self {
        self.recent = Some(limit);
        self
    }

    /// The search string, if it would actually filter anything.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }
}

/// Read-only operations for movies and series.
pub trait CatalogReader {
    /// List items matching the supplied query parameters.
    fn list_items(&self, query: CatalogListQuery) -> RepositoryResult<Vec<CatalogItem>>;
    /// Retrieve an item by its kind and identifier.
    fn get_item_by_id(
        &self,
        kind: CatalogKind,
        id: CatalogItemId,
    ) -> RepositoryResult<Option<CatalogItem>>;
    /// Number of rows stored for a kind.
    fn count_items(&self, kind: CatalogKind) -> RepositoryResult<usize>;
}

/// Write operations for movies and series. Rows are never updated once stored.
pub trait CatalogWriter {
    /// Persist a new item and return its assigned identifier.
    fn create_item(&self, item: &NewCatalogItem) -> RepositoryResult<CatalogItemId>;
}
