use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

use std::time::Duration;

use crate::common::{GeneralError, StoreError};
use crate::db::{blog_posts, custom_pages, entities};
use crate::models::{BlogPost, CustomPage, EntityKind, EntityRecord};
use crate::routing::ContentStore;

#[derive(Clone)]
pub struct Database {
    pub pool: PgPool,
}

impl Database {
    pub async fn new(
        database_url: &str,
    ) -> Result<Self, GeneralError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `fetch_optional` already yields `None` for an empty result; this also
/// folds a stray `RowNotFound` into `None` so a missing row never counts as
/// a failure.
fn not_found_as_none<T>(result: Result<Option<T>, sqlx::Error>) -> Result<Option<T>, StoreError> {
    match result {
        Ok(row) => Ok(row),
        Err(sqlx::Error::RowNotFound) => Ok(None),
        Err(e) => Err(StoreError::from(e)),
    }
}

#[async_trait]
impl ContentStore for Database {
    async fn list_published_paths(&self) -> Result<Vec<String>, StoreError> {
        Ok(custom_pages::list_published_paths(&self.pool).await?)
    }

    async fn get_published_page(&self, path: &str) -> Result<Option<CustomPage>, StoreError> {
        not_found_as_none(custom_pages::get_published_page_by_path(&self.pool, path).await)
    }

    async fn get_active_entity(
        &self,
        kind: EntityKind,
        slug: &str,
    ) -> Result<Option<EntityRecord>, StoreError> {
        not_found_as_none(entities::get_active_entity(&self.pool, kind, slug).await)
    }

    async fn list_active_entities(&self, kind: EntityKind) -> Result<Vec<EntityRecord>, StoreError> {
        let records = match kind {
            EntityKind::Solution => entities::list_active_solutions(&self.pool)
                .await?
                .into_iter()
                .map(EntityRecord::Solution)
                .collect(),
            EntityKind::Product => entities::list_active_products(&self.pool)
                .await?
                .into_iter()
                .map(EntityRecord::Product)
                .collect(),
        };
        Ok(records)
    }

    async fn get_published_blog_post(&self, slug: &str) -> Result<Option<BlogPost>, StoreError> {
        not_found_as_none(blog_posts::get_published_blog_post(&self.pool, slug).await)
    }

    async fn list_published_blog_posts(&self) -> Result<Vec<BlogPost>, StoreError> {
        Ok(blog_posts::list_published_blog_posts(&self.pool).await?)
    }
}
