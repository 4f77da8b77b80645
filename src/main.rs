mod web;

use std::sync::Arc;

use actix_files::Files;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use tracing_subscriber::EnvFilter;

use dronesite::config::SiteConfig;
use dronesite::db::Database;
use dronesite::routing::{ContentStore, ResolverConfig, RouteResolver, SystemClock};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = SiteConfig::from_env().map_err(std::io::Error::other)?;

    let db = Database::new(&cfg.database_url)
        .await
        .map_err(std::io::Error::other)?;

    let store: Arc<dyn ContentStore> = Arc::new(db);
    let resolver = Arc::new(RouteResolver::new(
        store,
        Arc::new(SystemClock),
        ResolverConfig::from(&cfg),
    ));

    resolver.published_paths().refresh().await;
    log::info!(
        "Loaded {} published custom page paths",
        resolver.published_paths().published_paths().len()
    );

    let state = Data::new(web::AppState { resolver });
    let static_dir = cfg.static_dir.clone();

    log::info!("Listening on {}", cfg.bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("X-Frame-Options", "DENY")),
            )
            .configure(web::handlers::configure)
            .service(Files::new("/static", static_dir.clone()).prefer_utf8(true))
            .configure(web::handlers::configure_catch_all)
    })
    .bind(cfg.bind_addr.as_str())?
    .run()
    .await
}
