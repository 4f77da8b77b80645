#![allow(dead_code)]

use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use dronesite::common::StoreError;
use dronesite::models::*;
use dronesite::routing::*;

const SQL_TIME_FMT: &str = "%Y-%m-%d %H:%M:%S%#z";

pub const TTL: Duration = Duration::from_secs(30 * 60);
pub const FAILURE_TTL: Duration = Duration::from_secs(30);
pub const ENTITY_TTL: Duration = Duration::from_secs(5 * 60);

pub fn parse_time(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_str(s, SQL_TIME_FMT)
        .expect("Invalid time format in test helper")
        .with_timezone(&Utc)
}

/// Number of upcoming calls that should fail; `u32::MAX` fails forever.
#[derive(Default)]
pub struct FailureBudget(AtomicU32);

impl FailureBudget {
    pub fn fail_next(&self, n: u32) {
        self.0.store(n, Ordering::SeqCst);
    }

    pub fn fail_always(&self) {
        self.fail_next(u32::MAX);
    }

    pub fn heal(&self) {
        self.fail_next(0);
    }

    fn should_fail(&self) -> bool {
        let remaining = self.0.load(Ordering::SeqCst);
        if remaining == 0 {
            return false;
        }
        if remaining != u32::MAX {
            self.0.store(remaining - 1, Ordering::SeqCst);
        }
        true
    }
}

fn simulated_outage() -> StoreError {
    StoreError::UnexpectedShape("simulated content store outage".to_string())
}

/// In-memory content store with switchable failures and call counters.
#[derive(Default)]
pub struct MemoryStore {
    pages: Mutex<Vec<CustomPage>>,
    entities: Mutex<Vec<EntityRecord>>,
    posts: Mutex<Vec<BlogPost>>,

    pub path_failures: FailureBudget,
    pub page_failures: FailureBudget,
    pub entity_failures: FailureBudget,

    pub path_calls: AtomicUsize,
    pub page_calls: AtomicUsize,
    pub entity_calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_page(&self, path: &str, published: bool) -> CustomPage {
        let page = seed_page(path, published);
        self.pages.lock().unwrap().push(page.clone());
        page
    }

    pub fn set_published(&self, path: &str, published: bool) {
        let mut pages = self.pages.lock().unwrap();
        let page = pages
            .iter_mut()
            .find(|p| p.path == path)
            .expect("page must exist");
        page.published = published;
    }

    pub fn add_solution(&self, slug: &str, active: bool) -> EntityRecord {
        let record = EntityRecord::Solution(seed_solution(slug, active));
        self.entities.lock().unwrap().push(record.clone());
        record
    }

    pub fn add_product(&self, slug: &str, active: bool) -> EntityRecord {
        let record = EntityRecord::Product(seed_product(slug, active));
        self.entities.lock().unwrap().push(record.clone());
        record
    }

    pub fn remove_entities(&self) {
        self.entities.lock().unwrap().clear();
    }

    pub fn add_post(&self, slug: &str, published: bool) -> BlogPost {
        let post = seed_post(slug, published);
        self.posts.lock().unwrap().push(post.clone());
        post
    }

    pub fn path_calls(&self) -> usize {
        self.path_calls.load(Ordering::SeqCst)
    }

    pub fn entity_calls(&self) -> usize {
        self.entity_calls.load(Ordering::SeqCst)
    }

    pub fn page_calls(&self) -> usize {
        self.page_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn list_published_paths(&self) -> Result<Vec<String>, StoreError> {
        self.path_calls.fetch_add(1, Ordering::SeqCst);
        if self.path_failures.should_fail() {
            return Err(simulated_outage());
        }

        Ok(self
            .pages
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.published)
            .map(|p| p.path.clone())
            .collect())
    }

    async fn get_published_page(&self, path: &str) -> Result<Option<CustomPage>, StoreError> {
        self.page_calls.fetch_add(1, Ordering::SeqCst);
        if self.page_failures.should_fail() {
            return Err(simulated_outage());
        }

        Ok(self
            .pages
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.path == path && p.published)
            .cloned())
    }

    async fn get_active_entity(
        &self,
        kind: EntityKind,
        slug: &str,
    ) -> Result<Option<EntityRecord>, StoreError> {
        self.entity_calls.fetch_add(1, Ordering::SeqCst);
        if self.entity_failures.should_fail() {
            return Err(simulated_outage());
        }

        Ok(self
            .entities
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.kind() == kind && e.slug() == slug && e.is_active())
            .cloned())
    }

    async fn list_active_entities(&self, kind: EntityKind) -> Result<Vec<EntityRecord>, StoreError> {
        Ok(self
            .entities
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.kind() == kind && e.is_active())
            .cloned()
            .collect())
    }

    async fn get_published_blog_post(&self, slug: &str) -> Result<Option<BlogPost>, StoreError> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.slug == slug && p.published)
            .cloned())
    }

    async fn list_published_blog_posts(&self) -> Result<Vec<BlogPost>, StoreError> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.published)
            .cloned()
            .collect())
    }
}

pub fn test_retry() -> RetryPolicy {
    RetryPolicy::new(3, Duration::ZERO)
}

pub fn test_cache_policy() -> CachePolicy {
    CachePolicy {
        ttl: TTL,
        failure_ttl: FAILURE_TTL,
        retry: test_retry(),
    }
}

pub fn test_resolver_config() -> ResolverConfig {
    ResolverConfig {
        published_paths: test_cache_policy(),
        entity_probe_ttl: ENTITY_TTL,
        retry: test_retry(),
    }
}

pub struct Harness {
    pub store: Arc<MemoryStore>,
    pub clock: Arc<ManualClock>,
    pub resolver: RouteResolver,
}

pub fn harness() -> Harness {
    let store = Arc::new(MemoryStore::new());
    let clock = Arc::new(ManualClock::new());
    let resolver = RouteResolver::new(store.clone(), clock.clone(), test_resolver_config());

    Harness {
        store,
        clock,
        resolver,
    }
}

pub fn seed_page(path: &str, published: bool) -> CustomPage {
    CustomPage {
        id: Uuid::new_v4(),
        path: path.to_string(),
        slug: path.rsplit('/').next().unwrap_or_default().to_string(),
        title: format!("Página {path}"),
        content: format!("<p>Conteúdo de {path}</p>"),
        published,
        template: PageTemplate::Default,
        order_index: 0,
        version: 1,
        created_at: parse_time("2026-01-04 22:15:06+00"),
        updated_at: parse_time("2026-01-04 22:15:06+00"),
    }
}

pub fn seed_solution(slug: &str, active: bool) -> SolutionRecord {
    SolutionRecord {
        id: Uuid::new_v4(),
        slug: slug.to_string(),
        title: format!("Solução {slug}"),
        subtitle: Some("Operações com drones".to_string()),
        description: "Descrição da solução".to_string(),
        hero_image_url: None,
        features: serde_json::json!(["Câmera térmica", "RTK"]),
        active,
        order_index: 0,
        created_at: parse_time("2026-01-02 18:41:18+00"),
        updated_at: parse_time("2026-01-02 18:41:18+00"),
    }
}

pub fn seed_product(slug: &str, active: bool) -> ProductRecord {
    ProductRecord {
        id: Uuid::new_v4(),
        slug: slug.to_string(),
        name: format!("Produto {slug}"),
        tagline: None,
        description: "Descrição do produto".to_string(),
        hero_image_url: None,
        specifications: serde_json::json!({ "autonomia": "42 min" }),
        active,
        order_index: 0,
        created_at: parse_time("2026-01-02 18:41:18+00"),
        updated_at: parse_time("2026-01-02 18:41:18+00"),
    }
}

pub fn seed_post(slug: &str, published: bool) -> BlogPost {
    BlogPost {
        id: Uuid::new_v4(),
        slug: slug.to_string(),
        title: format!("Post {slug}"),
        excerpt: None,
        content: "<p>Post</p>".to_string(),
        published,
        published_at: published.then(|| parse_time("2026-01-03 10:00:00+00")),
        created_at: parse_time("2026-01-03 10:00:00+00"),
    }
}
