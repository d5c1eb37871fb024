use chrono::{DateTime, Utc};

use crate::api::error;
use crate::modules::explore::schema::LikerRow;

/// Storage contract for like/pass decisions. `created_before` is `None` for
/// an unbounded (first page) query; listings are sorted by
/// `(created_at DESC, actor_user_id DESC)`.
#[async_trait::async_trait]
pub trait DecisionRepository: Send + Sync {
    /// Upserts the `(actor, recipient)` decision and reports whether the
    /// reverse row `(recipient, actor)` holds `liked = true` after the
    /// write. The write and the reverse check must be atomic.
    async fn put_decision(
        &self,
        actor_user_id: &str,
        recipient_user_id: &str,
        liked: bool,
    ) -> Result<bool, error::SystemError>;

    async fn list_likers(
        &self,
        recipient_user_id: &str,
        created_before: Option<DateTime<Utc>>,
        limit: i64,
    ) -> Result<Vec<LikerRow>, error::SystemError>;

    /// Same as `list_likers`, minus actors the recipient has liked back.
    async fn list_new_likers(
        &self,
        recipient_user_id: &str,
        created_before: Option<DateTime<Utc>>,
        limit: i64,
    ) -> Result<Vec<LikerRow>, error::SystemError>;

    async fn count_likers(&self, recipient_user_id: &str) -> Result<i64, error::SystemError>;
}
