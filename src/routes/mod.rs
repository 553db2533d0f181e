use actix_web::{HttpResponse, web};
use tera::{Context, Tera};

pub mod catalog;

/// Body of every 404 answered by the catalog.
pub const NOT_FOUND_MESSAGE: &str = "Conteúdo não encontrado";

/// Registers every catalog route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(catalog::index)
        .service(catalog::search_catalog)
        .service(catalog::show_movies)
        .service(catalog::show_series)
        .service(catalog::show_releases)
        .service(catalog::play);
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render template '{template}': {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn base_context(current_page: &str) -> Context {
    let mut context = Context::new();
    context.insert("current_page", current_page);
    context
}

pub fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/plain; charset=utf-8")
        .body(NOT_FOUND_MESSAGE)
}
