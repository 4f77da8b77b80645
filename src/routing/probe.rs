use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::log_err;
use crate::models::{EntityKind, EntityRecord};
use crate::routing::{Clock, ContentStore, RetryPolicy};

const MAX_CACHED_PROBES: usize = 1024;

#[derive(Debug, Clone)]
struct CachedProbe {
    record: Option<EntityRecord>,
    fetched_at: Instant,
}

/// Answers "is there an active solution/product for this slug?", caching
/// each answer for a short window.
pub struct EntityProbe {
    store: Arc<dyn ContentStore>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    retry: RetryPolicy,
    cache: Mutex<HashMap<(EntityKind, String), CachedProbe>>,
}

impl EntityProbe {
    pub fn new(
        store: Arc<dyn ContentStore>,
        clock: Arc<dyn Clock>,
        ttl: Duration,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            store,
            clock,
            ttl,
            retry,
            cache: Mutex::new(HashMap::new()),
        }
    }

    fn cached(&self, kind: EntityKind, slug: &str) -> Option<Option<EntityRecord>> {
        let now = self.clock.now();
        let cache = self
            .cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        cache
            .get(&(kind, slug.to_string()))
            .filter(|hit| now.saturating_duration_since(hit.fetched_at) < self.ttl)
            .map(|hit| hit.record.clone())
    }

    fn remember(&self, kind: EntityKind, slug: &str, record: Option<EntityRecord>) {
        let now = self.clock.now();
        let mut cache = self
            .cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if cache.len() >= MAX_CACHED_PROBES {
            cache.retain(|_, hit| now.saturating_duration_since(hit.fetched_at) < self.ttl);
            if cache.len() >= MAX_CACHED_PROBES {
                cache.clear();
            }
        }

        cache.insert(
            (kind, slug.to_string()),
            CachedProbe {
                record,
                fetched_at: now,
            },
        );
    }

    /// Active record for `slug` in the table behind `kind`, or `None`.
    ///
    /// A fetch that still fails after the retry budget is logged and reported
    /// as `None`, so the caller falls back to the hardcoded component. Such
    /// failures are not cached.
    pub async fn probe_active_entity(&self, kind: EntityKind, slug: &str) -> Option<EntityRecord> {
        if let Some(hit) = self.cached(kind, slug) {
            return hit;
        }

        let result = self
            .retry
            .run("probe active entity", || self.store.get_active_entity(kind, slug))
            .await;

        match result {
            Ok(record) => {
                let record = record.filter(EntityRecord::is_active);
                self.remember(kind, slug, record.clone());
                record
            }
            Err(e) => {
                log_err!(
                    "probe active entity",
                    e,
                    &serde_json::json!({ "table": kind.table_name(), "slug": slug })
                );
                None
            }
        }
    }

    pub fn forget(&self, kind: EntityKind, slug: &str) {
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(&(kind, slug.to_string()));
    }

    pub fn clear(&self) {
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}
