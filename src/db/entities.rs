use sqlx::PgPool;

use crate::models::{EntityKind, EntityRecord, ProductRecord, SolutionRecord};

pub async fn get_active_solution(pool: &PgPool, slug: &str) -> Result<Option<SolutionRecord>, sqlx::Error> {
    sqlx::query_as::<_, SolutionRecord>(
        r#"
        SELECT *
        FROM solutions
        WHERE slug = $1 AND active = true
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await
}

pub async fn get_active_product(pool: &PgPool, slug: &str) -> Result<Option<ProductRecord>, sqlx::Error> {
    sqlx::query_as::<_, ProductRecord>(
        r#"
        SELECT *
        FROM product_families
        WHERE slug = $1 AND active = true
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await
}

pub async fn get_active_entity(
    pool: &PgPool,
    kind: EntityKind,
    slug: &str,
) -> Result<Option<EntityRecord>, sqlx::Error> {
    match kind {
        EntityKind::Solution => Ok(get_active_solution(pool, slug).await?.map(EntityRecord::Solution)),
        EntityKind::Product => Ok(get_active_product(pool, slug).await?.map(EntityRecord::Product)),
    }
}

pub async fn list_active_solutions(pool: &PgPool) -> Result<Vec<SolutionRecord>, sqlx::Error> {
    sqlx::query_as::<_, SolutionRecord>(
        r#"
        SELECT *
        FROM solutions
        WHERE active = true
        ORDER BY order_index ASC, title ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn list_active_products(pool: &PgPool) -> Result<Vec<ProductRecord>, sqlx::Error> {
    sqlx::query_as::<_, ProductRecord>(
        r#"
        SELECT *
        FROM product_families
        WHERE active = true
        ORDER BY order_index ASC, name ASC
        "#,
    )
    .fetch_all(pool)
    .await
}
