use crate::domain::post::{CreatePostRequest, PageQuery, UpdatePostRequest};
use crate::domain::{DomainError, Post};
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, user_id: i64, req: CreatePostRequest) -> Result<Post, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Post, DomainError>;
    /// Newest first, ties broken by id so that consecutive pages never overlap.
    async fn find_page(&self, query: PageQuery) -> Result<Vec<Post>, DomainError>;
    async fn find_oldest(&self) -> Result<Option<Post>, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
    async fn update(&self, req: UpdatePostRequest) -> Result<Post, DomainError>;
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}

pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_post(row: &PgRow) -> Result<Post, DomainError> {
    Ok(Post {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        text: row.try_get("text")?,
        user_id: row.try_get("user_id")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, user_id: i64, req: CreatePostRequest) -> Result<Post, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO posts (title, text, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING id, title, text, user_id, created_at, updated_at
            "#,
        )
        .bind(&req.title)
        .bind(&req.text)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create post: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        row_to_post(&row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Post, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, text, user_id, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        match row {
            Some(row) => row_to_post(&row),
            None => Err(DomainError::PostNotFound),
        }
    }

    async fn find_page(&self, query: PageQuery) -> Result<Vec<Post>, DomainError> {
        let rows = match query.cursor() {
            None => {
                sqlx::query(
                    r#"
                    SELECT id, title, text, user_id, created_at, updated_at
                    FROM posts
                    ORDER BY created_at DESC, id DESC
                    LIMIT $1
                    "#,
                )
                .bind(query.limit())
                .fetch_all(&self.pool)
                .await
            }
            Some(cursor) => {
                sqlx::query(
                    r#"
                    SELECT id, title, text, user_id, created_at, updated_at
                    FROM posts
                    WHERE created_at < $1
                    ORDER BY created_at DESC, id DESC
                    LIMIT $2
                    "#,
                )
                .bind(cursor)
                .bind(query.limit())
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        rows.iter().map(row_to_post).collect()
    }

    async fn find_oldest(&self) -> Result<Option<Post>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, text, user_id, created_at, updated_at
            FROM posts
            ORDER BY created_at ASC, id ASC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        row.as_ref().map(row_to_post).transpose()
    }

    async fn count(&self) -> Result<i64, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM posts")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(row.try_get("count")?)
    }

    async fn update(&self, req: UpdatePostRequest) -> Result<Post, DomainError> {
        let row = sqlx::query(
            r#"
            UPDATE posts
            SET
                title = $1,
                text = $2,
                updated_at = NOW()
            WHERE id = $3
            RETURNING id, title, text, user_id, created_at, updated_at
            "#,
        )
        .bind(&req.title)
        .bind(&req.text)
        .bind(req.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        match row {
            Some(row) => row_to_post(&row),
            None => Err(DomainError::PostNotFound),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            Err(DomainError::PostNotFound)
        } else {
            Ok(())
        }
    }
}
