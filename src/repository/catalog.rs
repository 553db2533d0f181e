use diesel::prelude::*;

use crate::domain::catalog::{CatalogItem, CatalogKind, NewCatalogItem};
use crate::domain::types::CatalogItemId;
use crate::models::catalog::{CatalogRow, NewMovieRow, NewSeriesRow};
use crate::repository::{
    CatalogListQuery, CatalogReader, CatalogWriter, DieselRepository, RepositoryResult,
};

/// Wraps `term` in `%` and escapes `LIKE` wildcards so it matches literally.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

// `filmes` and `series` share a shape but are distinct Diesel table types.
macro_rules! load_rows {
    ($table:ident, $query:expr, $conn:expr) => {{
        use crate::schema::$table;

        let mut items = $table::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(term) = $query.search_term() {
            items = items.filter($table::nome.like(like_pattern(term)).escape('\\'));
        }
        if let Some(limit) = $query.recent {
            items = items.order($table::id.desc()).limit(limit as i64);
        }
        items.load::<CatalogRow>($conn)?
    }};
}

impl CatalogReader for DieselRepository {
    fn list_items(&self, query: CatalogListQuery) -> RepositoryResult<Vec<CatalogItem>> {
        let mut conn = self.conn()?;

        let rows = match query.kind {
            CatalogKind::Movie => load_rows!(filmes, query, &mut conn),
            CatalogKind::Series => load_rows!(series, query, &mut conn),
        };

        let items = rows
            .into_iter()
            .map(|row| row.into_domain(query.kind))
            .collect::<Result<Vec<CatalogItem>, _>>()?;

        Ok(items)
    }

    fn get_item_by_id(
        &self,
        kind: CatalogKind,
        id: CatalogItemId,
    ) -> RepositoryResult<Option<CatalogItem>> {
        use crate::schema::{filmes, series};

        let mut conn = self.conn()?;

        let row = match kind {
            CatalogKind::Movie => filmes::table
                .filter(filmes::id.eq(id.get()))
                .first::<CatalogRow>(&mut conn)
                .optional()?,
            CatalogKind::Series => series::table
                .filter(series::id.eq(id.get()))
                .first::<CatalogRow>(&mut conn)
                .optional()?,
        };

        let item = row.map(|row| row.into_domain(kind)).transpose()?;
        Ok(item)
    }

    fn count_items(&self, kind: CatalogKind) -> RepositoryResult<usize> {
        use crate::schema::{filmes, series};

        let mut conn = self.conn()?;

        let total = match kind {
            CatalogKind::Movie => filmes::table.count().get_result::<i64>(&mut conn)?,
            CatalogKind::Series => series::table.count().get_result::<i64>(&mut conn)?,
        };

        Ok(total as usize)
    }
}

impl CatalogWriter for DieselRepository {
    fn create_item(&self, item: &NewCatalogItem) -> RepositoryResult<CatalogItemId> {
        use crate::schema::{filmes, series};

        let mut conn = self.conn()?;

        let id = match item.kind {
            CatalogKind::Movie => diesel::insert_into(filmes::table)
                .values(NewMovieRow::from(item.clone()))
                .returning(filmes::id)
                .get_result::<i32>(&mut conn)?,
            CatalogKind::Series => diesel::insert_into(series::table)
                .values(NewSeriesRow::from(item.clone()))
                .returning(series::id)
                .get_result::<i32>(&mut conn)?,
        };

        Ok(CatalogItemId::new(id)?)
    }
}
