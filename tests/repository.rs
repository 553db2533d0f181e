use diesel::prelude::*;
use zoomplay::domain::catalog::CatalogKind;
use zoomplay::domain::types::CatalogItemId;
use zoomplay::repository::{
    CatalogListQuery, CatalogReader, CatalogWriter, DieselRepository, RECENT_ITEMS_LIMIT,
};
use zoomplay::schema::filmes;
use zoomplay::services::catalog::seed_examples;

mod common;

use common::new_item;

fn names(items: &[zoomplay::domain::catalog::CatalogItem]) -> Vec<&str> {
    items.iter().map(|i| i.name.as_str()).collect()
}

#[test]
fn inserted_rows_are_found_by_kind_and_id() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let movie_id = repo
        .create_item(&new_item(CatalogKind::Movie, "Filme Exemplo 1"))
        .expect("should create movie");
    let series_id = repo
        .create_item(&new_item(CatalogKind::Series, "Série Exemplo 1"))
        .expect("should create series");
    assert_eq!(movie_id, 1);
    assert_eq!(series_id, 1);

    let movie = repo
        .get_item_by_id(CatalogKind::Movie, movie_id)
        .expect("lookup should succeed")
        .expect("movie should exist");
    assert_eq!(movie.name.as_str(), "Filme Exemplo 1");
    assert_eq!(movie.kind, CatalogKind::Movie);
    assert_eq!(movie.video_url.as_str(), "https://video.example/Filme Exemplo 1.mp4");

    let series = repo
        .get_item_by_id(CatalogKind::Series, series_id)
        .expect("lookup should succeed")
        .expect("series should exist");
    assert_eq!(series.name.as_str(), "Série Exemplo 1");

    let missing = repo
        .get_item_by_id(CatalogKind::Movie, CatalogItemId::new(999).unwrap())
        .expect("lookup should succeed");
    assert!(missing.is_none());
}

#[test]
fn search_matches_substrings_and_empty_search_lists_all() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    for name in ["Filme Exemplo 1", "Outro Filme", "100% Ação"] {
        repo.create_item(&new_item(CatalogKind::Movie, name))
            .expect("should create movie");
    }

    let all = repo
        .list_items(CatalogListQuery::new(CatalogKind::Movie))
        .expect("should list");
    assert_eq!(names(&all), ["Filme Exemplo 1", "Outro Filme", "100% Ação"]);

    let empty = repo
        .list_items(CatalogListQuery::new(CatalogKind::Movie).search(""))
        .expect("should list");
    assert_eq!(empty, all);

    let filmes = repo
        .list_items(CatalogListQuery::new(CatalogKind::Movie).search("filme"))
        .expect("should search");
    assert_eq!(names(&filmes), ["Filme Exemplo 1", "Outro Filme"]);

    let percent = repo
        .list_items(CatalogListQuery::new(CatalogKind::Movie).search("%"))
        .expect("should search");
    assert_eq!(names(&percent), ["100% Ação"]);

    let series = repo
        .list_items(CatalogListQuery::new(CatalogKind::Series).search("filme"))
        .expect("should search");
    assert!(series.is_empty());
}

#[test]
fn recent_rows_are_newest_first_and_capped() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    for name in ["A", "B", "C"] {
        repo.create_item(&new_item(CatalogKind::Series, name))
            .expect("should create series");
    }

    let recent = repo
        .list_items(CatalogListQuery::new(CatalogKind::Series).recent(RECENT_ITEMS_LIMIT))
        .expect("should list recent");
    assert_eq!(names(&recent), ["C", "B"]);
    assert!(recent[0].id > recent[1].id);
}

#[test]
fn seeding_fills_an_empty_catalog_once() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    assert_eq!(seed_examples(&repo).expect("should seed"), 4);
    assert_eq!(seed_examples(&repo).expect("should skip"), 0);
    assert_eq!(repo.count_items(CatalogKind::Movie).unwrap(), 2);
    assert_eq!(repo.count_items(CatalogKind::Series).unwrap(), 2);
}

#[test]
fn stored_rows_are_listed_verbatim() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    repo.create_item(&new_item(CatalogKind::Movie, "Filme Exemplo 1"))
        .expect("should create movie");

    let mut conn = test_db.pool().get().expect("should get connection");
    diesel::insert_into(filmes::table)
        .values((
            filmes::nome.eq(""),
            filmes::imagem_url.eq(" poster.jpg "),
            filmes::video_url.eq("video.mp4"),
        ))
        .execute(&mut conn)
        .expect("should insert raw row");

    let all = repo
        .list_items(CatalogListQuery::new(CatalogKind::Movie))
        .expect("blank names should not break the listing");
    assert_eq!(names(&all), ["Filme Exemplo 1", ""]);
    assert_eq!(all[1].image_url.as_str(), " poster.jpg ");
}
