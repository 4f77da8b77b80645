use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use askama::Template;

use dronesite::models::{EntityKind, EntityRecord};
use dronesite::routing::{ProductPage, SolutionPage};

use crate::web::templates::ListingItem;

pub fn render<T: Template>(t: T) -> HttpResponse {
    render_with_status(StatusCode::OK, t)
}

pub fn render_with_status<T: Template>(status: StatusCode, t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Template error: {}", e);
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(format!("Template error: {e}"))
        }
    }
}

/// Listing entries for a product or solution family: active database
/// records first, then hardcoded pages not yet migrated.
pub fn listing_items(kind: EntityKind, records: &[EntityRecord]) -> Vec<ListingItem> {
    let prefix = kind.route_prefix();

    let mut items: Vec<ListingItem> = records
        .iter()
        .map(|record| ListingItem {
            title: record.title().to_string(),
            href: format!("{prefix}/{}", record.slug()),
            summary: record.summary().unwrap_or_default().to_string(),
        })
        .collect();

    let hardcoded: Vec<(&str, &str)> = match kind {
        EntityKind::Product => ProductPage::ALL.iter().map(|p| (p.slug(), p.title())).collect(),
        EntityKind::Solution => SolutionPage::ALL.iter().map(|s| (s.slug(), s.title())).collect(),
    };

    for (slug, title) in hardcoded {
        if records.iter().any(|record| record.slug() == slug) {
            continue;
        }
        items.push(ListingItem {
            title: title.to_string(),
            href: format!("{prefix}/{slug}"),
            summary: String::new(),
        });
    }

    items
}
