use sqlx::PgPool;

use crate::models::BlogPost;

pub async fn get_published_blog_post(pool: &PgPool, slug: &str) -> Result<Option<BlogPost>, sqlx::Error> {
    sqlx::query_as::<_, BlogPost>(
        r#"
        SELECT *
        FROM blog_posts
        WHERE slug = $1 AND published = true
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await
}

pub async fn list_published_blog_posts(pool: &PgPool) -> Result<Vec<BlogPost>, sqlx::Error> {
    sqlx::query_as::<_, BlogPost>(
        r#"
        SELECT *
        FROM blog_posts
        WHERE published = true
        ORDER BY published_at DESC NULLS LAST, created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}
