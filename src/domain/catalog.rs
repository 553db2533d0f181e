use serde::{Deserialize, Serialize};

use crate::domain::types::{CatalogItemId, ImageUrl, ItemName, VideoUrl};

/// Selects which backing table a catalog operation targets.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    Movie,
    Series,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 2] = [CatalogKind::Movie, CatalogKind::Series];

    /// Resolves the segment used in `/play/{kind}/{id}` URLs.
    ///
    /// Unknown segments yield `None`, which callers report as "not found".
    pub fn from_path_segment(segment: &str) -> Option<Self> {
        match segment {
            "filme" => Some(Self::Movie),
            "serie" => Some(Self::Series),
            _ => None,
        }
    }

    /// Path segment used to build play links for this kind.
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Movie => "filme",
            Self::Series => "serie",
        }
    }

    /// Name of the SQL table holding rows of this kind.
    pub const fn table_name(self) -> &'static str {
        match self {
            Self::Movie => "filmes",
            Self::Series => "series",
        }
    }
}

/// A movie or series row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    pub id: CatalogItemId,
    pub kind: CatalogKind,
    pub name: ItemName,
    pub image_url: ImageUrl,
    pub video_url: VideoUrl,
}

/// Data required to insert a new [`CatalogItem`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCatalogItem {
    pub kind: CatalogKind,
    pub name: ItemName,
    pub image_url: ImageUrl,
    pub video_url: VideoUrl,
}
