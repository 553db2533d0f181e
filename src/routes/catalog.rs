use actix_web::{HttpResponse, Responder, get, post, web};
use tera::Tera;

use crate::domain::catalog::CatalogKind;
use crate::dto::catalog::CatalogPageDto;
use crate::forms::catalog::SearchForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, not_found, render_template};
use crate::services::{ServiceError, ServiceResult};
use crate::services::catalog::{
    show_index as show_index_service, show_item as show_item_service,
    show_kind as show_kind_service, show_releases as show_releases_service,
};

fn render_page(
    tera: &Tera,
    template: &str,
    current_page: &str,
    result: ServiceResult<CatalogPageDto>,
) -> HttpResponse {
    match result {
        Ok(page) => {
            let mut context = base_context(current_page);
            context.insert("filmes", &page.movies);
            context.insert("series", &page.series);
            context.insert("search", &page.search);
            render_template(tera, template, &context)
        }
        Err(err) => {
            log::error!("Failed to render {current_page} page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/")]
pub async fn index(
    params: web::Query<SearchForm>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let term = params.into_inner().into_term();
    let result = show_index_service(&term, repo.get_ref());
    render_page(&tera, "index.html", "index", result)
}

/// Search box submission. A missing or unreadable body searches for nothing.
#[post("/")]
pub async fn search_catalog(
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
    form: Option<web::Form<SearchForm>>,
) -> impl Responder {
    let term = form.map(web::Form::into_inner).unwrap_or_default().into_term();
    let result = show_index_service(&term, repo.get_ref());
    render_page(&tera, "index.html", "index", result)
}

fn render_kind(tera: &Tera, repo: &DieselRepository, kind: CatalogKind) -> HttpResponse {
    let (template, key) = match kind {
        CatalogKind::Movie => ("filmes.html", "filmes"),
        CatalogKind::Series => ("series.html", "series"),
    };
    match show_kind_service(kind, repo) {
        Ok(items) => {
            let mut context = base_context(key);
            context.insert(key, &items);
            render_template(tera, template, &context)
        }
        Err(err) => {
            log::error!("Failed to render {key} page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/filmes")]
pub async fn show_movies(
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_kind(&tera, repo.get_ref(), CatalogKind::Movie)
}

#[get("/series")]
pub async fn show_series(
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_kind(&tera, repo.get_ref(), CatalogKind::Series)
}

#[get("/lancamentos")]
pub async fn show_releases(
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let result = show_releases_service(repo.get_ref());
    render_page(&tera, "lancamentos.html", "lancamentos", result)
}

#[get("/play/{kind}/{item_id}")]
pub async fn play(
    path: web::Path<(String, String)>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let (kind, item_id) = path.into_inner();
    if item_id.is_empty() || !item_id.bytes().all(|b| b.is_ascii_digit()) {
        return not_found();
    }
    let Ok(item_id) = item_id.parse::<i32>() else {
        return not_found();
    };

    match show_item_service(&kind, item_id, repo.get_ref()) {
        Ok(item) => {
            let mut context = base_context("play");
            context.insert("item", &item);
            render_template(&tera, "play.html", &context)
        }
        Err(ServiceError::NotFound) => not_found(),
        Err(err) => {
            log::error!("Failed to render play page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
