use async_trait::async_trait;

use crate::common::StoreError;
use crate::models::{BlogPost, CustomPage, EntityKind, EntityRecord};

/// Reads the resolver needs from the content store. A missing row is
/// `Ok(None)`; `Err` is reserved for failures worth retrying or logging.
#[async_trait]
pub trait ContentStore: Send + Sync + 'static {
    async fn list_published_paths(&self) -> Result<Vec<String>, StoreError>;

    async fn get_published_page(&self, path: &str) -> Result<Option<CustomPage>, StoreError>;

    async fn get_active_entity(
        &self,
        kind: EntityKind,
        slug: &str,
    ) -> Result<Option<EntityRecord>, StoreError>;

    async fn list_active_entities(&self, kind: EntityKind) -> Result<Vec<EntityRecord>, StoreError>;

    async fn get_published_blog_post(&self, slug: &str) -> Result<Option<BlogPost>, StoreError>;

    async fn list_published_blog_posts(&self) -> Result<Vec<BlogPost>, StoreError>;
}
