use serde::Serialize;

use crate::domain::catalog::CatalogItem;

/// Catalog item flattened for templates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogItemDto {
    pub id: i32,
    pub kind: &'static str,
    pub name: String,
    pub image_url: String,
    pub video_url: String,
    pub play_url: String,
}

impl From<CatalogItem> for CatalogItemDto {
    fn from(value: CatalogItem) -> Self {
        let kind = value.kind.path_segment();
        Self {
            id: value.id.get(),
            kind,
            play_url: format!("/play/{kind}/{}", value.id),
            name: value.name.into_inner(),
            image_url: value.image_url.into_inner(),
            video_url: value.video_url.into_inner(),
        }
    }
}

/// Movies and series shown side by side on the home and releases pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CatalogPageDto {
    pub movies: Vec<CatalogItemDto>,
    pub series: Vec<CatalogItemDto>,
    pub search: String,
}
