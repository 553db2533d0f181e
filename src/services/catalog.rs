use crate::domain::catalog::{CatalogKind, NewCatalogItem};
use crate::domain::types::{CatalogItemId, ImageUrl, ItemName, VideoUrl};
use crate::dto::catalog::{CatalogItemDto, CatalogPageDto};
use crate::repository::{CatalogListQuery, CatalogReader, CatalogWriter, RECENT_ITEMS_LIMIT};

use super::{ServiceError, ServiceResult};

/// Rows inserted by [`seed_examples`]: (kind, name, image url, video url).
const EXAMPLE_ITEMS: [(CatalogKind, &str, &str, &str); 4] = [
    (
        CatalogKind::Movie,
        "Filme Exemplo 1",
        "https://via.placeholder.com/300x450?text=Filme+1",
        "https://www.w3schools.com/html/mov_bbb.mp4",
    ),
    (
        CatalogKind::Movie,
        "Filme Exemplo 2",
        "https://via.placeholder.com/300x450?text=Filme+2",
        "https://www.w3schools.com/html/movie.mp4",
    ),
    (
        CatalogKind::Series,
        "Série Exemplo 1",
        "https://via.placeholder.com/300x450?text=Série+1",
        "https://www.w3schools.com/html/mov_bbb.mp4",
    ),
    (
        CatalogKind::Series,
        "Série Exemplo 2",
        "https://via.placeholder.com/300x450?text=Série+2",
        "https://www.w3schools.com/html/movie.mp4",
    ),
];

fn load<R>(repo: &R, query: CatalogListQuery) -> ServiceResult<Vec<CatalogItemDto>>
where
    R: CatalogReader,
{
    let kind = query.kind;
    match repo.list_items(query) {
        Ok(items) => Ok(items.into_iter().map(CatalogItemDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list {}: {e}", kind.table_name());
            Err(ServiceError::Internal)
        }
    }
}

/// Home page: every movie and series, or only those whose name contains
/// `search` when it is non-empty.
pub fn show_index<R>(search: &str, repo: &R) -> ServiceResult<CatalogPageDto>
where
    R: CatalogReader,
{
    let movies = load(repo, CatalogListQuery::new(CatalogKind::Movie).search(search))?;
    let series = load(repo, CatalogListQuery::new(CatalogKind::Series).search(search))?;

    Ok(CatalogPageDto {
        movies,
        series,
        search: search.to_string(),
    })
}

/// All rows of one kind in storage order.
pub fn show_kind<R>(kind: CatalogKind, repo: &R) -> ServiceResult<Vec<CatalogItemDto>>
where
    R: CatalogReader,
{
    load(repo, CatalogListQuery::new(kind))
}

/// The newest movies and series, newest first.
pub fn show_releases<R>(repo: &R) -> ServiceResult<CatalogPageDto>
where
    R: CatalogReader,
{
    let movies = load(
        repo,
        CatalogListQuery::new(CatalogKind::Movie).recent(RECENT_ITEMS_LIMIT),
    )?;
    let series = load(
        repo,
        CatalogListQuery::new(CatalogKind::Series).recent(RECENT_ITEMS_LIMIT),
    )?;

    Ok(CatalogPageDto {
        movies,
        series,
        search: String::new(),
    })
}

/// Looks up the item behind `/play/{kind}/{id}`.
///
/// Unknown kinds and non-positive ids are reported as [`ServiceError::NotFound`],
/// same as a missing row.
pub fn show_item<R>(kind: &str, id: i32, repo: &R) -> ServiceResult<CatalogItemDto>
where
    R: CatalogReader,
{
    let Some(kind) = CatalogKind::from_path_segment(kind) else {
        log::debug!("Unknown catalog kind requested: {kind}");
        return Err(ServiceError::NotFound);
    };
    let Ok(id) = CatalogItemId::new(id) else {
        return Err(ServiceError::NotFound);
    };

    match repo.get_item_by_id(kind, id) {
        Ok(Some(item)) => Ok(item.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get {} item {id}: {e}", kind.table_name());
            Err(ServiceError::Internal)
        }
    }
}

/// Inserts the example movies and series when the catalog is empty.
///
/// Returns the number of rows inserted, zero when any row already exists.
pub fn seed_examples<R>(repo: &R) -> ServiceResult<usize>
where
    R: CatalogReader + CatalogWriter,
{
    for kind in CatalogKind::ALL {
        match repo.count_items(kind) {
            Ok(0) => {}
            Ok(_) => return Ok(0),
            Err(e) => {
                log::error!("Failed to count {}: {e}", kind.table_name());
                return Err(ServiceError::Internal);
            }
        }
    }

    let mut inserted = 0;
    for (kind, name, image_url, video_url) in EXAMPLE_ITEMS {
        let item = NewCatalogItem {
            kind,
            name: ItemName::new(name)?,
            image_url: ImageUrl::new(image_url)?,
            video_url: VideoUrl::new(video_url)?,
        };
        match repo.create_item(&item) {
            Ok(id) => {
                log::debug!("Seeded {} row {id}: {name}", kind.table_name());
                inserted += 1;
            }
            Err(e) => {
                log::error!("Failed to seed {}: {e}", kind.table_name());
                return Err(ServiceError::Internal);
            }
        }
    }

    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::CatalogItem;
    use crate::repository::test::TestRepository;

    fn item(kind: CatalogKind, id: i32, name: &str) -> CatalogItem {
        CatalogItem {
            id: CatalogItemId::new(id).unwrap(),
            kind,
            name: ItemName::new(name).unwrap(),
            image_url: ImageUrl::new(format!("https://img.example/{id}.jpg")).unwrap(),
            video_url: VideoUrl::new(format!("https://video.example/{id}.mp4")).unwrap(),
        }
    }

    fn sample_repo() -> TestRepository {
        TestRepository::new(vec![
            item(CatalogKind::Movie, 1, "Filme Exemplo 1"),
            item(CatalogKind::Movie, 2, "Filme Exemplo 2"),
            item(CatalogKind::Movie, 3, "Outro Filme"),
            item(CatalogKind::Series, 1, "Série Exemplo 1"),
        ])
    }

    fn names(items: &[CatalogItemDto]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn empty_search_lists_everything() {
        let repo = sample_repo();
        let page = show_index("", &repo).unwrap();
        assert_eq!(page.movies, show_kind(CatalogKind::Movie, &repo).unwrap());
        assert_eq!(page.series.len(), 1);
    }

    #[test]
    fn search_filters_both_kinds() {
        let repo = sample_repo();
        let page = show_index("exemplo", &repo).unwrap();
        assert_eq!(names(&page.movies), ["Filme Exemplo 1", "Filme Exemplo 2"]);
        assert_eq!(names(&page.series), ["Série Exemplo 1"]);
        assert_eq!(page.search, "exemplo");
    }

    #[test]
    fn releases_are_newest_first_and_capped() {
        let repo = sample_repo();
        let page = show_releases(&repo).unwrap();
        assert_eq!(names(&page.movies), ["Outro Filme", "Filme Exemplo 2"]);
        assert_eq!(page.series.len(), 1);
    }

    #[test]
    fn play_returns_the_requested_item() {
        let repo = sample_repo();
        let dto = show_item("filme", 1, &repo).unwrap();
        assert_eq!(dto.name, "Filme Exemplo 1");
        assert_eq!(dto.play_url, "/play/filme/1");

        let dto = show_item("serie", 1, &repo).unwrap();
        assert_eq!(dto.kind, "serie");
    }

    #[test]
    fn play_reports_not_found() {
        let repo = sample_repo();
        assert_eq!(show_item("filme", 999, &repo), Err(ServiceError::NotFound));
        assert_eq!(show_item("filme", 0, &repo), Err(ServiceError::NotFound));
        assert_eq!(show_item("anime", 1, &repo), Err(ServiceError::NotFound));
    }

    #[test]
    fn repository_failures_are_internal() {
        let repo = TestRepository::failing();
        assert_eq!(show_index("", &repo), Err(ServiceError::Internal));
        assert_eq!(show_item("serie", 1, &repo), Err(ServiceError::Internal));
    }

    #[test]
    fn seeding_runs_once() {
        let repo = TestRepository::default();
        assert_eq!(seed_examples(&repo).unwrap(), 4);
        assert_eq!(seed_examples(&repo).unwrap(), 0);

        let movies = show_kind(CatalogKind::Movie, &repo).unwrap();
        assert_eq!(names(&movies), ["Filme Exemplo 1", "Filme Exemplo 2"]);
        assert_eq!(show_item("filme", 1, &repo).unwrap().name, "Filme Exemplo 1");
    }
}
