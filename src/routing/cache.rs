use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use crate::log_err;
use crate::routing::{is_blog_post_path, is_protected_path, Clock, ContentStore, RetryPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    /// How long a successful snapshot is served before the next read refreshes it.
    pub ttl: Duration,
    /// How long the empty snapshot installed after a failed fetch is served.
    pub failure_ttl: Duration,
    pub retry: RetryPolicy,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(30 * 60),
            failure_ttl: Duration::from_secs(30),
            retry: RetryPolicy::default(),
        }
    }
}

#[derive(Debug)]
struct Snapshot {
    paths: Arc<HashSet<String>>,
    fetched_at: Instant,
    valid_for: Duration,
    failed: bool,
}

/// Process-wide snapshot of every published custom-page path.
///
/// Readers never see a partial set: each refresh builds a new snapshot and
/// swaps it in whole. Refreshes are serialized through `refresh_gate`, so
/// there is only ever one writer. A refresh that overlaps an `invalidate`
/// installs its result already stale.
pub struct PublishedPathCache {
    store: Arc<dyn ContentStore>,
    clock: Arc<dyn Clock>,
    policy: CachePolicy,
    snapshot: RwLock<Option<Arc<Snapshot>>>,
    refresh_gate: tokio::sync::Mutex<()>,
    generation: AtomicU64,
}

impl PublishedPathCache {
    pub fn new(store: Arc<dyn ContentStore>, clock: Arc<dyn Clock>, policy: CachePolicy) -> Self {
        Self {
            store,
            clock,
            policy,
            snapshot: RwLock::new(None),
            refresh_gate: tokio::sync::Mutex::new(()),
            generation: AtomicU64::new(0),
        }
    }

    fn current(&self) -> Option<Arc<Snapshot>> {
        self.snapshot
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn install(&self, snapshot: Snapshot) {
        *self
            .snapshot
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(Arc::new(snapshot));
    }

    /// True until the first fetch (successful or not) has completed.
    pub fn is_loading(&self) -> bool {
        self.current().is_none()
    }

    pub fn published_paths(&self) -> Arc<HashSet<String>> {
        self.current()
            .map(|snapshot| Arc::clone(&snapshot.paths))
            .unwrap_or_default()
    }

    pub fn last_refresh_failed(&self) -> bool {
        self.current().is_some_and(|snapshot| snapshot.failed)
    }

    pub fn is_dynamic_route(&self, path: &str) -> bool {
        let Some(snapshot) = self.current() else {
            return false;
        };

        if is_protected_path(path) || is_blog_post_path(path) {
            return false;
        }

        snapshot.paths.contains(path)
    }

    fn needs_refresh(&self) -> bool {
        match self.current() {
            None => true,
            Some(snapshot) => {
                self.clock.now().saturating_duration_since(snapshot.fetched_at) >= snapshot.valid_for
            }
        }
    }

    /// Refreshes the snapshot if it is missing or older than its validity
    /// window. Concurrent callers wait for the one refresh in flight.
    pub async fn ensure_fresh(&self) {
        if !self.needs_refresh() {
            return;
        }

        let _gate = self.refresh_gate.lock().await;
        if !self.needs_refresh() {
            return;
        }

        self.refresh_locked().await;
    }

    pub async fn refresh(&self) {
        let _gate = self.refresh_gate.lock().await;
        self.refresh_locked().await;
    }

    /// Marks the snapshot stale; the current paths keep being served until
    /// the next `ensure_fresh` replaces them.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);

        let mut guard = self
            .snapshot
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(snapshot) = guard.take() {
            *guard = Some(Arc::new(Snapshot {
                paths: Arc::clone(&snapshot.paths),
                fetched_at: snapshot.fetched_at,
                valid_for: Duration::ZERO,
                failed: snapshot.failed,
            }));
        }
    }

    async fn refresh_locked(&self) {
        let generation = self.generation.load(Ordering::SeqCst);

        let result = self
            .policy
            .retry
            .run("list published paths", || self.store.list_published_paths())
            .await;

        let snapshot = match result {
            Ok(paths) => {
                let paths: HashSet<String> = paths.into_iter().collect();
                log::debug!("published path cache refreshed with {} paths", paths.len());
                Snapshot {
                    paths: Arc::new(paths),
                    fetched_at: self.clock.now(),
                    valid_for: self.policy.ttl,
                    failed: false,
                }
            }
            Err(e) => {
                log_err!(
                    "list published paths",
                    e,
                    &serde_json::json!({ "table": "custom_pages" })
                );
                Snapshot {
                    paths: Arc::default(),
                    fetched_at: self.clock.now(),
                    valid_for: self.policy.failure_ttl,
                    failed: true,
                }
            }
        };

        if self.generation.load(Ordering::SeqCst) != generation {
            log::debug!("published path cache invalidated during refresh; next read refetches");
            self.install(Snapshot {
                valid_for: Duration::ZERO,
                ..snapshot
            });
            return;
        }

        self.install(snapshot);
    }
}
