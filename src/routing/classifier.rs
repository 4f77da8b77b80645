use serde::Serialize;

use crate::models::{EntityKind, EntityRecord};
use crate::routing::{blog_post_slug, protected_route, static_route, StaticPage};

/// An asynchronous input that may not have arrived yet.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Lookup<T> {
    #[default]
    Pending,
    Ready(T),
}

impl<T> Lookup<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Everything the classifier knows about a path besides the path itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteFacts {
    /// Active solution/product row for the trailing slug. Only consulted for
    /// entity routes.
    pub active_entity: Lookup<Option<EntityRecord>>,
    /// Whether the published-path cache lists the path.
    pub published_custom_page: Lookup<bool>,
}

impl RouteFacts {
    pub fn pending() -> Self {
        Self::default()
    }

    pub fn ready(active_entity: Option<EntityRecord>, published_custom_page: bool) -> Self {
        Self {
            active_entity: Lookup::Ready(active_entity),
            published_custom_page: Lookup::Ready(published_custom_page),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Resolution {
    CustomPage { path: String },
    EntityPage { record: EntityRecord },
    StaticComponent { page: StaticPage },
    BlogPost { slug: String },
    NotFound,
    /// A branch that decides the outcome is still waiting on its input.
    Loading,
}

impl Resolution {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Priority-ordered decision over already-gathered facts:
///
/// 1. exact protected route: its static page
/// 2. blog post path: blog post lookup
/// 3. anything else inside a protected subtree: not found
/// 4. entity route with an active record: entity page
/// 5. path listed as a published custom page: custom page
/// 6. registered static route (including hardcoded entity fallbacks)
/// 7. not found
///
/// Steps 1-3 need no asynchronous data and resolve even when every fact is
/// still pending.
pub fn classify(path: &str, facts: RouteFacts) -> Resolution {
    let protected = protected_route(path);

    if let Some(route) = protected.filter(|route| route.path == path) {
        return Resolution::StaticComponent { page: route.page };
    }

    if let Some(slug) = blog_post_slug(path) {
        return Resolution::BlogPost {
            slug: slug.to_string(),
        };
    }

    if protected.is_some() {
        return Resolution::NotFound;
    }

    if let Some((kind, slug)) = EntityKind::from_path(path) {
        match facts.active_entity {
            Lookup::Pending => return Resolution::Loading,
            Lookup::Ready(Some(record))
                if record.is_active() && record.kind() == kind && record.slug() == slug =>
            {
                return Resolution::EntityPage { record };
            }
            Lookup::Ready(_) => {}
        }
    }

    match facts.published_custom_page {
        Lookup::Pending => return Resolution::Loading,
        Lookup::Ready(true) => {
            return Resolution::CustomPage {
                path: path.to_string(),
            };
        }
        Lookup::Ready(false) => {}
    }

    match static_route(path) {
        Some(route) => Resolution::StaticComponent { page: route.page },
        None => Resolution::NotFound,
    }
}
