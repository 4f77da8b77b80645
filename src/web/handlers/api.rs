use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use dronesite::routing::{customizable_paths, protected_paths};

/// Route-protection decision for admin link generation: editors may only
/// target the `customizable` paths with a custom page.
#[derive(Debug, Serialize)]
pub struct RouteCatalog {
    pub customizable: Vec<&'static str>,
    pub protected: Vec<&'static str>,
}

#[get("/api/routes")]
pub async fn route_catalog() -> impl Responder {
    HttpResponse::Ok().json(RouteCatalog {
        customizable: customizable_paths().collect(),
        protected: protected_paths().collect(),
    })
}

#[get("/healthz")]
pub async fn healthz() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("ok")
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(route_catalog).service(healthz);
}
