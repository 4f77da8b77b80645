use std::sync::Arc;

use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::{PageError, ValidationError};
use crate::db;
use crate::models::{CustomPage, CustomPageCreate, CustomPageUpdate, PageTemplate};
use crate::routing::{generate_slug, is_valid_slug, validate_dynamic_path, RouteResolver};

/// Author input for a new custom page, as submitted by the admin form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageDraft {
    pub title: String,
    pub slug: Option<String>,
    pub path: String,
    pub content: String,
    pub template: Option<PageTemplate>,
    pub order_index: Option<i32>,
}

/// Checks a draft before anything is written. A blank slug is derived from
/// the title.
pub fn validate_draft(draft: &PageDraft) -> Result<CustomPageCreate, ValidationError> {
    let title = draft.title.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    let slug = match draft.slug.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(slug) => slug.to_string(),
        None => generate_slug(title),
    };
    if !is_valid_slug(&slug) {
        return Err(ValidationError::InvalidSlug(slug));
    }

    let path = draft.path.trim();
    validate_dynamic_path(path)?;

    Ok(CustomPageCreate {
        path: path.to_string(),
        slug,
        title: title.to_string(),
        content: draft.content.clone(),
        template: draft.template.unwrap_or_default(),
        order_index: draft.order_index.unwrap_or(0),
    })
}

/// Same rules as [`validate_draft`] for the fields an update touches.
pub fn validate_update(update: &CustomPageUpdate) -> Result<CustomPageUpdate, ValidationError> {
    let title = update.title.as_deref().map(str::trim);
    if title.is_some_and(str::is_empty) {
        return Err(ValidationError::EmptyTitle);
    }

    let slug = update.slug.as_deref().map(str::trim);
    if let Some(slug) = slug {
        if !is_valid_slug(slug) {
            return Err(ValidationError::InvalidSlug(slug.to_string()));
        }
    }

    let path = update.path.as_deref().map(str::trim);
    if let Some(path) = path {
        validate_dynamic_path(path)?;
    }

    Ok(CustomPageUpdate {
        path: path.map(str::to_string),
        slug: slug.map(str::to_string),
        title: title.map(str::to_string),
        content: update.content.clone(),
        template: update.template,
        order_index: update.order_index,
    })
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some("23505"),
        _ => false,
    }
}

/// Writes custom pages and keeps the resolver's caches in step with them.
pub struct PageService {
    pool: PgPool,
    resolver: Arc<RouteResolver>,
}

impl PageService {
    pub fn new(pool: PgPool, resolver: Arc<RouteResolver>) -> Self {
        Self { pool, resolver }
    }

    pub async fn create(&self, draft: &PageDraft) -> Result<CustomPage, PageError> {
        let data = validate_draft(draft)?;

        let page = db::create_custom_page(&self.pool, &data)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    PageError::DuplicatePath(data.path.clone())
                } else {
                    PageError::Database(e)
                }
            })?;

        log::info!("created custom page {} at {}", page.id, page.path);
        self.resolver.invalidate(None);
        Ok(page)
    }

    pub async fn update(&self, id: Uuid, update: &CustomPageUpdate) -> Result<CustomPage, PageError> {
        let data = validate_update(update)?;

        let page = db::update_custom_page(&self.pool, id, &data)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    PageError::DuplicatePath(data.path.clone().unwrap_or_default())
                } else {
                    PageError::Database(e)
                }
            })?
            .ok_or(PageError::NotFound(id))?;

        self.resolver.invalidate(None);
        Ok(page)
    }

    pub async fn publish(&self, id: Uuid) -> Result<CustomPage, PageError> {
        self.set_published(id, true).await
    }

    pub async fn unpublish(&self, id: Uuid) -> Result<CustomPage, PageError> {
        self.set_published(id, false).await
    }

    async fn set_published(&self, id: Uuid, published: bool) -> Result<CustomPage, PageError> {
        let page = db::set_custom_page_published(&self.pool, id, published)
            .await?
            .ok_or(PageError::NotFound(id))?;

        log::info!(
            "custom page {} at {} is now {}",
            page.id,
            page.path,
            if published { "published" } else { "unpublished" }
        );
        self.resolver.invalidate(None);
        Ok(page)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), PageError> {
        if !db::delete_custom_page(&self.pool, id).await? {
            return Err(PageError::NotFound(id));
        }

        self.resolver.invalidate(None);
        Ok(())
    }
}
