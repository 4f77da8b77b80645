use std::sync::Arc;
use std::time::Duration;

use crate::config::SiteConfig;
use crate::log_err;
use crate::models::{BlogPost, CustomPage, EntityKind, EntityRecord};
use crate::routing::{
    classify, CachePolicy, Clock, ContentStore, EntityProbe, PublishedPathCache, Resolution,
    RetryPolicy, RouteFacts, StaticPage,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverConfig {
    pub published_paths: CachePolicy,
    pub entity_probe_ttl: Duration,
    pub retry: RetryPolicy,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            published_paths: CachePolicy::default(),
            entity_probe_ttl: Duration::from_secs(5 * 60),
            retry: RetryPolicy::default(),
        }
    }
}

impl From<&SiteConfig> for ResolverConfig {
    fn from(cfg: &SiteConfig) -> Self {
        let retry = RetryPolicy::new(cfg.fetch_attempts, cfg.fetch_backoff);
        Self {
            published_paths: CachePolicy {
                ttl: cfg.published_paths_ttl,
                failure_ttl: cfg.published_paths_failure_ttl,
                retry,
            },
            entity_probe_ttl: cfg.entity_probe_ttl,
            retry,
        }
    }
}

/// A resolved page together with the data it renders.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderTarget {
    CustomPage(CustomPage),
    EntityPage(EntityRecord),
    StaticComponent(StaticPage),
    BlogPost(BlogPost),
    NotFound,
}

/// Trailing slashes are dropped (except for the root) and an empty path is
/// the root.
pub fn normalize_request_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }

    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Gathers the facts for a request path, classifies it, and loads whatever
/// the chosen target needs.
pub struct RouteResolver {
    store: Arc<dyn ContentStore>,
    published: PublishedPathCache,
    probe: EntityProbe,
    retry: RetryPolicy,
}

impl RouteResolver {
    pub fn new(store: Arc<dyn ContentStore>, clock: Arc<dyn Clock>, cfg: ResolverConfig) -> Self {
        Self {
            published: PublishedPathCache::new(Arc::clone(&store), Arc::clone(&clock), cfg.published_paths),
            probe: EntityProbe::new(Arc::clone(&store), clock, cfg.entity_probe_ttl, cfg.retry),
            store,
            retry: cfg.retry,
        }
    }

    pub fn store(&self) -> &Arc<dyn ContentStore> {
        &self.store
    }

    pub fn published_paths(&self) -> &PublishedPathCache {
        &self.published
    }

    pub fn entity_probe(&self) -> &EntityProbe {
        &self.probe
    }

    /// Classifies `path` without loading page content.
    pub async fn classify(&self, path: &str) -> Resolution {
        let resolution = classify(path, RouteFacts::pending());
        if !resolution.is_loading() {
            return resolution;
        }

        let facts = self.gather_facts(path).await;
        classify(path, facts)
    }

    pub async fn resolve(&self, raw_path: &str) -> RenderTarget {
        let path = normalize_request_path(raw_path);

        let resolution = match self.classify(&path).await {
            Resolution::CustomPage { path } => match self.fetch_custom_page(&path).await {
                Some(page) => return RenderTarget::CustomPage(page),
                // Unpublished since the snapshot was taken, or unreadable:
                // decide again as if no custom page existed. Reaching the
                // custom-page branch means no active entity applied.
                None => classify(&path, RouteFacts::ready(None, false)),
            },
            other => other,
        };

        match resolution {
            Resolution::EntityPage { record } => RenderTarget::EntityPage(record),
            Resolution::StaticComponent { page } => RenderTarget::StaticComponent(page),
            Resolution::BlogPost { slug } => match self.fetch_blog_post(&slug).await {
                Some(post) => RenderTarget::BlogPost(post),
                None => RenderTarget::NotFound,
            },
            Resolution::CustomPage { .. } | Resolution::NotFound | Resolution::Loading => {
                RenderTarget::NotFound
            }
        }
    }

    /// Runs the entity probe and the published-path cache concurrently; the
    /// classifier's priorities make the completion order irrelevant.
    async fn gather_facts(&self, path: &str) -> RouteFacts {
        let entity = async {
            match EntityKind::from_path(path) {
                Some((kind, slug)) => self.probe.probe_active_entity(kind, slug).await,
                None => None,
            }
        };

        let published = async {
            self.published.ensure_fresh().await;
            self.published.is_dynamic_route(path)
        };

        let (entity, published) = futures_util::join!(entity, published);
        RouteFacts::ready(entity, published)
    }

    async fn fetch_custom_page(&self, path: &str) -> Option<CustomPage> {
        let result = self
            .retry
            .run("get custom page", || self.store.get_published_page(path))
            .await;

        match result {
            Ok(page) => {
                if page.is_none() {
                    log::debug!("published path {path} has no published page; falling through");
                }
                page
            }
            Err(e) => {
                log_err!("get custom page", e, &serde_json::json!({ "path": path }));
                None
            }
        }
    }

    async fn fetch_blog_post(&self, slug: &str) -> Option<BlogPost> {
        let result = self
            .retry
            .run("get blog post", || self.store.get_published_blog_post(slug))
            .await;

        match result {
            Ok(post) => post,
            Err(e) => {
                log_err!("get blog post", e, &serde_json::json!({ "slug": slug }));
                None
            }
        }
    }

    /// Drops cached routing answers after content changes. Entity answers are
    /// dropped for the given slug only when one is named.
    pub fn invalidate(&self, entity: Option<(EntityKind, &str)>) {
        self.published.invalidate();
        match entity {
            Some((kind, slug)) => self.probe.forget(kind, slug),
            None => self.probe.clear(),
        }
    }
}
