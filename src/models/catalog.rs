use diesel::prelude::*;

use crate::domain::catalog::{CatalogItem as DomainCatalogItem, CatalogKind, NewCatalogItem};
use crate::domain::types::{ImageUrl, ItemName, TypeConstraintError, VideoUrl};

/// Row shape shared by the `filmes` and `series` tables.
///
/// `Queryable` maps columns by position, so the same struct loads from either
/// table; the kind is attached when converting into the domain type. Text
/// columns are returned exactly as stored.
#[derive(Debug, Clone, Queryable)]
pub struct CatalogRow {
    pub id: i32,
    pub nome: String,
    pub imagem_url: String,
    pub video_url: String,
}

impl CatalogRow {
    pub fn into_domain(self, kind: CatalogKind) -> Result<DomainCatalogItem, TypeConstraintError> {
        Ok(DomainCatalogItem {
            id: self.id.try_into()?,
            kind,
            name: ItemName::from_stored(self.nome),
            image_url: ImageUrl::from_stored(self.imagem_url),
            video_url: VideoUrl::from_stored(self.video_url),
        })
    }
}

/// Insertable form of a row in the `filmes` table.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::filmes)]
pub struct NewMovieRow {
    pub nome: String,
    pub imagem_url: String,
    pub video_url: String,
}

/// Insertable form of a row in the `series` table.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::series)]
pub struct NewSeriesRow {
    pub nome: String,
    pub imagem_url: String,
    pub video_url: String,
}

impl From<NewCatalogItem> for NewMovieRow {
    fn from(item: NewCatalogItem) -> Self {
        Self {
            nome: item.name.into_inner(),
            imagem_url: item.image_url.into_inner(),
            video_url: item.video_url.into_inner(),
        }
    }
}

impl From<NewCatalogItem> for NewSeriesRow {
    fn from(item: NewCatalogItem) -> Self {
        Self {
            nome: item.name.into_inner(),
            imagem_url: item.image_url.into_inner(),
            video_url: item.video_url.into_inner(),
        }
    }
}
