use actix_web::http::StatusCode;
use actix_web::{get, web, HttpRequest, HttpResponse, Responder};

use dronesite::models::{EntityKind, EntityRecord};
use dronesite::routing::{RenderTarget, RouteResolver, StaticPage, STATIC_ROUTES};

use crate::web::helpers::{listing_items, render, render_with_status};
use crate::web::state::AppState;
use crate::web::templates::{
    AdminShellTemplate, AuthTemplate, BlogIndexTemplate, BlogPostTemplate, CustomPageTemplate,
    EntityPageTemplate, FallbackDetailTemplate, HomeTemplate, InfoTemplate, ListingItem,
    ListingTemplate, NotFoundTemplate,
};

#[get("/{tail:.*}")]
pub async fn resolve_page(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let path = req.path().to_string();

    match state.resolver.resolve(&path).await {
        RenderTarget::CustomPage(page) => render(CustomPageTemplate {
            title: page.title,
            layout: page.template.to_string(),
            content: page.content,
        }),
        RenderTarget::EntityPage(record) => render_entity(&record),
        RenderTarget::StaticComponent(page) => render_static(&state.resolver, page).await,
        RenderTarget::BlogPost(post) => render(BlogPostTemplate { post }),
        RenderTarget::NotFound => not_found(path),
    }
}

fn not_found(path: String) -> HttpResponse {
    render_with_status(StatusCode::NOT_FOUND, NotFoundTemplate { path })
}

fn family_title(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Solution => "Soluções",
        EntityKind::Product => "Produtos",
    }
}

fn render_entity(record: &EntityRecord) -> HttpResponse {
    let kind = record.kind();
    render(EntityPageTemplate {
        title: record.title().to_string(),
        family_title: family_title(kind).to_string(),
        family_href: kind.route_prefix().to_string(),
        summary: record.summary().unwrap_or_default().to_string(),
        description: record.description().to_string(),
        hero_image_url: record.hero_image_url().unwrap_or_default().to_string(),
        highlights: record.highlights(),
    })
}

async fn active_entities(resolver: &RouteResolver, kind: EntityKind) -> Vec<EntityRecord> {
    match resolver.store().list_active_entities(kind).await {
        Ok(records) => records,
        Err(e) => {
            log::warn!("Listing active {} records failed: {}", kind, e);
            Vec::new()
        }
    }
}

async fn render_static(resolver: &RouteResolver, page: StaticPage) -> HttpResponse {
    match page {
        StaticPage::Home => {
            let solutions = active_entities(resolver, EntityKind::Solution).await;
            let products = active_entities(resolver, EntityKind::Product).await;
            render(HomeTemplate {
                solutions: listing_items(EntityKind::Solution, &solutions),
                products: listing_items(EntityKind::Product, &products),
            })
        }
        StaticPage::Products | StaticPage::Solutions => {
            let kind = if page == StaticPage::Products {
                EntityKind::Product
            } else {
                EntityKind::Solution
            };
            let records = active_entities(resolver, kind).await;
            render(ListingTemplate {
                title: page.title().to_string(),
                items: listing_items(kind, &records),
            })
        }
        StaticPage::Product(_) | StaticPage::Solution(_) => {
            let kind = match page {
                StaticPage::Product(_) => EntityKind::Product,
                _ => EntityKind::Solution,
            };
            render(FallbackDetailTemplate {
                title: page.title().to_string(),
                family_title: family_title(kind).to_string(),
                family_href: kind.route_prefix().to_string(),
            })
        }
        StaticPage::About | StaticPage::Contact | StaticPage::PrivacyPolicy | StaticPage::TermsOfUse => {
            render(InfoTemplate {
                title: page.title().to_string(),
                paragraphs: info_paragraphs(page),
            })
        }
        StaticPage::BlogIndex => {
            let posts = match resolver.store().list_published_blog_posts().await {
                Ok(posts) => posts,
                Err(e) => {
                    log::warn!("Listing blog posts failed: {}", e);
                    Vec::new()
                }
            };
            render(BlogIndexTemplate { posts })
        }
        StaticPage::Auth => render(AuthTemplate),
        StaticPage::Admin(_) => render(AdminShellTemplate {
            title: page.title().to_string(),
            sections: STATIC_ROUTES
                .iter()
                .filter(|route| matches!(route.page, StaticPage::Admin(_)))
                .map(|route| ListingItem {
                    title: route.page.title().to_string(),
                    href: route.path.to_string(),
                    summary: String::new(),
                })
                .collect(),
        }),
    }
}

fn info_paragraphs(page: StaticPage) -> Vec<&'static str> {
    match page {
        StaticPage::About => vec![
            "Somos distribuidores oficiais de drones profissionais para inspeção, mapeamento, agricultura e segurança.",
            "Nossa equipe oferece treinamento, suporte técnico e assistência em todo o Brasil.",
        ],
        StaticPage::Contact => vec![
            "Fale com um especialista pelo e-mail contato@dronesite.com.br.",
            "Atendimento de segunda a sexta, das 9h às 18h.",
        ],
        StaticPage::PrivacyPolicy => vec![
            "Coletamos apenas os dados necessários para responder às suas solicitações.",
            "Você pode solicitar a exclusão dos seus dados a qualquer momento pelo nosso canal de contato.",
        ],
        StaticPage::TermsOfUse => vec![
            "O conteúdo deste site é informativo e pode ser alterado sem aviso prévio.",
            "Especificações técnicas dos equipamentos são fornecidas pelos fabricantes.",
        ],
        _ => Vec::new(),
    }
}
