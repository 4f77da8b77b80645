use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::PageTemplate;

/// Administrator-authored page served at an exact URL path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CustomPage {
    pub id: Uuid,
    pub path: String,
    pub slug: String,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub template: PageTemplate,
    pub order_index: i32,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomPageCreate {
    pub path: String,
    pub slug: String,
    pub title: String,
    pub content: String,
    pub template: PageTemplate,
    pub order_index: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomPageUpdate {
    pub path: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub template: Option<PageTemplate>,
    pub order_index: Option<i32>,
}

impl CustomPageUpdate {
    pub fn is_empty(&self) -> bool {
        self.path.is_none()
            && self.slug.is_none()
            && self.title.is_none()
            && self.content.is_none()
            && self.template.is_none()
            && self.order_index.is_none()
    }
}
