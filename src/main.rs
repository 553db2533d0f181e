use std::io;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use tera::Tera;

use zoomplay::db::{establish_connection_pool, run_migrations};
use zoomplay::models::config::ServerConfig;
use zoomplay::repository::DieselRepository;
use zoomplay::routes;
use zoomplay::services::catalog::seed_examples;

fn startup_error(context: &str, err: impl std::fmt::Display) -> io::Error {
    log::error!("{context}: {err}");
    io::Error::other(format!("{context}: {err}"))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let mut server_config =
        ServerConfig::load().map_err(|e| startup_error("Failed to load configuration", e))?;
    if let Ok(database_url) = std::env::var("DATABASE_URL") {
        server_config.database_url = database_url;
    }

    let pool = establish_connection_pool(&server_config.database_url)
        .map_err(|e| startup_error("Failed to establish database connection pool", e))?;

    let applied =
        run_migrations(&pool).map_err(|e| startup_error("Failed to run migrations", e))?;
    log::info!("Applied {applied} pending migration(s)");

    let repo = DieselRepository::new(pool);

    if server_config.seed_examples {
        let seeded = seed_examples(&repo)
            .map_err(|e| startup_error("Failed to seed example catalog", e))?;
        if seeded > 0 {
            log::info!("Seeded {seeded} example catalog item(s)");
        }
    }

    let tera = Tera::new(&format!("{}/**/*.html", server_config.templates_dir))
        .map_err(|e| startup_error("Failed to load templates", e))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting server on {}:{}",
        server_config.address,
        server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(tera.clone()))
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
