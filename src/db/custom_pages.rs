use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{CustomPage, CustomPageCreate, CustomPageUpdate, PageTemplate};

pub async fn create_custom_page(pool: &PgPool, data: &CustomPageCreate) -> Result<CustomPage, sqlx::Error> {
    sqlx::query_as::<_, CustomPage>(
        r#"
        INSERT INTO custom_pages (path, slug, title, content, template, order_index)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(&data.path)
    .bind(&data.slug)
    .bind(&data.title)
    .bind(&data.content)
    .bind(data.template.as_str())
    .bind(data.order_index)
    .fetch_one(pool)
    .await
}

pub async fn get_custom_page_by_id(pool: &PgPool, id: Uuid) -> Result<Option<CustomPage>, sqlx::Error> {
    sqlx::query_as::<_, CustomPage>(
        r#"
        SELECT *
        FROM custom_pages
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn get_published_page_by_path(pool: &PgPool, path: &str) -> Result<Option<CustomPage>, sqlx::Error> {
    sqlx::query_as::<_, CustomPage>(
        r#"
        SELECT *
        FROM custom_pages
        WHERE path = $1 AND published = true
        "#,
    )
    .bind(path)
    .fetch_optional(pool)
    .await
}

pub async fn list_custom_pages(pool: &PgPool) -> Result<Vec<CustomPage>, sqlx::Error> {
    sqlx::query_as::<_, CustomPage>(
        r#"
        SELECT *
        FROM custom_pages
        ORDER BY order_index ASC, created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Only the `path` column of published pages; this is what the
/// published-path cache snapshots.
pub async fn list_published_paths(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        r#"
        SELECT path
        FROM custom_pages
        WHERE published = true
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn update_custom_page(
    pool: &PgPool,
    id: Uuid,
    data: &CustomPageUpdate,
) -> Result<Option<CustomPage>, sqlx::Error> {
    sqlx::query_as::<_, CustomPage>(
        r#"
        UPDATE custom_pages
        SET
            path = COALESCE($1, path),
            slug = COALESCE($2, slug),
            title = COALESCE($3, title),
            content = COALESCE($4, content),
            template = COALESCE($5, template),
            order_index = COALESCE($6, order_index),
            version = version + 1,
            updated_at = now()
        WHERE id = $7
        RETURNING *
        "#,
    )
    .bind(data.path.as_deref())
    .bind(data.slug.as_deref())
    .bind(data.title.as_deref())
    .bind(data.content.as_deref())
    .bind(data.template.as_ref().map(PageTemplate::as_str))
    .bind(data.order_index)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn set_custom_page_published(
    pool: &PgPool,
    id: Uuid,
    published: bool,
) -> Result<Option<CustomPage>, sqlx::Error> {
    sqlx::query_as::<_, CustomPage>(
        r#"
        UPDATE custom_pages
        SET
            published = $1,
            updated_at = now()
        WHERE id = $2
        RETURNING *
        "#,
    )
    .bind(published)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_custom_page(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM custom_pages
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
