use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Typed content tables whose rows are rendered through the generic entity
/// template when an active row exists for a slug.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Solution,
    Product,
}

impl EntityKind {
    pub const ALL: [Self; 2] = [Self::Solution, Self::Product];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solution => "solution",
            Self::Product => "product",
        }
    }

    pub fn table_name(&self) -> &'static str {
        match self {
            Self::Solution => "solutions",
            Self::Product => "product_families",
        }
    }

    /// Listing path the detail pages of this family live under.
    pub fn route_prefix(&self) -> &'static str {
        match self {
            Self::Solution => "/solucoes",
            Self::Product => "/produtos",
        }
    }

    /// Splits `/produtos/<slug>` or `/solucoes/<slug>` into its family and
    /// slug. Deeper paths and the listing pages themselves are not entity
    /// routes.
    pub fn from_path(path: &str) -> Option<(Self, &str)> {
        Self::ALL.into_iter().find_map(|kind| {
            let slug = path
                .strip_prefix(kind.route_prefix())?
                .strip_prefix('/')?;
            (!slug.is_empty() && !slug.contains('/')).then_some((kind, slug))
        })
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SolutionRecord {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub hero_image_url: Option<String>,
    pub features: serde_json::Value,
    pub active: bool,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProductRecord {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub tagline: Option<String>,
    pub description: String,
    pub hero_image_url: Option<String>,
    pub specifications: serde_json::Value,
    pub active: bool,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An active solution or product row, as handed to the entity template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EntityRecord {
    Solution(SolutionRecord),
    Product(ProductRecord),
}

impl EntityRecord {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Solution(_) => EntityKind::Solution,
            Self::Product(_) => EntityKind::Product,
        }
    }

    pub fn slug(&self) -> &str {
        match self {
            Self::Solution(s) => &s.slug,
            Self::Product(p) => &p.slug,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Solution(s) => &s.title,
            Self::Product(p) => &p.name,
        }
    }

    pub fn summary(&self) -> Option<&str> {
        match self {
            Self::Solution(s) => s.subtitle.as_deref(),
            Self::Product(p) => p.tagline.as_deref(),
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::Solution(s) => &s.description,
            Self::Product(p) => &p.description,
        }
    }

    pub fn hero_image_url(&self) -> Option<&str> {
        match self {
            Self::Solution(s) => s.hero_image_url.as_deref(),
            Self::Product(p) => p.hero_image_url.as_deref(),
        }
    }

    pub fn is_active(&self) -> bool {
        match self {
            Self::Solution(s) => s.active,
            Self::Product(p) => p.active,
        }
    }

    /// Bullet items shown on the page: solution features or product specs.
    /// Accepts either an array of strings or an object of label/value pairs.
    pub fn highlights(&self) -> Vec<String> {
        let value = match self {
            Self::Solution(s) => &s.features,
            Self::Product(p) => &p.specifications,
        };

        match value {
            serde_json::Value::Array(items) => items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
            serde_json::Value::Object(map) => map
                .iter()
                .map(|(label, v)| match v.as_str() {
                    Some(s) => format!("{label}: {s}"),
                    None => format!("{label}: {v}"),
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}
