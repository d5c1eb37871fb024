use chrono::{DateTime, Utc};

use crate::{
    api::error,
    modules::explore::{repository::DecisionRepository, schema::LikerRow},
};

#[derive(Clone)]
pub struct DecisionRepositoryPg {
    pool: sqlx::PgPool,
}

impl DecisionRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl DecisionRepository for DecisionRepositoryPg {
    async fn put_decision(
        &self,
        actor_user_id: &str,
        recipient_user_id: &str,
        liked: bool,
    ) -> Result<bool, error::SystemError> {
        // Single statement so the reverse-like check cannot race a
        // concurrent write on the same pair. `created_at` is only set on
        // first insert; updates touch `liked` and `updated_at`.
        let mutual = sqlx::query_scalar::<_, bool>(
            r#"
            INSERT INTO decisions (actor_user_id, recipient_user_id, liked)
            VALUES ($1, $2, $3)
            ON CONFLICT (actor_user_id, recipient_user_id)
                DO UPDATE SET liked = EXCLUDED.liked, updated_at = NOW()
            RETURNING (
                EXISTS (
                    SELECT 1 FROM decisions
                    WHERE actor_user_id = $2
                      AND recipient_user_id = $1
                      AND liked = TRUE
                )
            )
            "#,
        )
        .bind(actor_user_id)
        .bind(recipient_user_id)
        .bind(liked)
        .fetch_one(&self.pool)
        .await?;

        Ok(mutual)
    }

    async fn list_likers(
        &self,
        recipient_user_id: &str,
        created_before: Option<DateTime<Utc>>,
        limit: i64,
    ) -> Result<Vec<LikerRow>, error::SystemError> {
        let likers = sqlx::query_as::<_, LikerRow>(
            r#"
            SELECT actor_user_id, created_at
            FROM decisions
            WHERE recipient_user_id = $1
              AND liked = TRUE
              AND ($2::TIMESTAMPTZ IS NULL OR created_at < $2)
            ORDER BY created_at DESC, actor_user_id DESC
            LIMIT $3
            "#,
        )
        .bind(recipient_user_id)
        .bind(created_before)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(likers)
    }

    async fn list_new_likers(
        &self,
        recipient_user_id: &str,
        created_before: Option<DateTime<Utc>>,
        limit: i64,
    ) -> Result<Vec<LikerRow>, error::SystemError> {
        // Left anti-join against the reverse direction, evaluated over the
        // live rows: a like that became mutual since the last page simply
        // stops appearing.
        let likers = sqlx::query_as::<_, LikerRow>(
            r#"
            SELECT d1.actor_user_id, d1.created_at
            FROM decisions d1
            LEFT JOIN decisions d2
                ON d2.actor_user_id = d1.recipient_user_id
               AND d2.recipient_user_id = d1.actor_user_id
               AND d2.liked = TRUE
            WHERE d1.recipient_user_id = $1
              AND d1.liked = TRUE
              AND d2.actor_user_id IS NULL
              AND ($2::TIMESTAMPTZ IS NULL OR d1.created_at < $2)
            ORDER BY d1.created_at DESC, d1.actor_user_id DESC
            LIMIT $3
            "#,
        )
        .bind(recipient_user_id)
        .bind(created_before)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(likers)
    }

    async fn count_likers(&self, recipient_user_id: &str) -> Result<i64, error::SystemError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM decisions
            WHERE recipient_user_id = $1
              AND liked = TRUE
            "#,
        )
        .bind(recipient_user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
