use sqlx::prelude::FromRow;

/// Projection returned by the liker listings: who liked, and when the
/// decision row was first created (the pagination key).
#[derive(Debug, Clone, FromRow)]
pub struct LikerRow {
    pub actor_user_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
