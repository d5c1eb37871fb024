use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use chrono::{DateTime, Utc};

use crate::{
    api::error,
    modules::explore::{model::Liker, repository::DecisionRepository, schema::LikerRow},
};

/// Explore service with a generic repository for easier testing.
///
/// Owns everything above storage: input validation, the pagination token
/// codec, the fetch-one-extra/truncate page step and the row-to-response
/// mapping. The page size is injected so tests can run with small pages.
#[derive(Clone)]
pub struct ExploreService<R>
where
    R: DecisionRepository + Send + Sync,
{
    decision_repo: Arc<R>,
    page_size: usize,
}

impl<R> ExploreService<R>
where
    R: DecisionRepository + Send + Sync,
{
    pub fn with_dependencies(decision_repo: Arc<R>, page_size: usize) -> Self {
        ExploreService { decision_repo, page_size }
    }

    /// Records a like/pass decision and returns whether the pair now has a
    /// reverse like on record.
    pub async fn put_decision(
        &self,
        actor_user_id: &str,
        recipient_user_id: &str,
        liked: bool,
    ) -> Result<bool, error::SystemError> {
        if actor_user_id.is_empty() || recipient_user_id.is_empty() {
            return Err(error::SystemError::bad_request(
                "both actor_user_id and recipient_user_id are required",
            ));
        }

        if actor_user_id == recipient_user_id {
            return Err(error::SystemError::bad_request("users can't like themselves"));
        }

        self.decision_repo.put_decision(actor_user_id, recipient_user_id, liked).await
    }

    /// All users who liked the recipient, mutual or not.
    pub async fn list_liked_you(
        &self,
        recipient_user_id: &str,
        pagination_token: Option<&str>,
    ) -> Result<(Vec<Liker>, String), error::SystemError> {
        if recipient_user_id.is_empty() {
            return Err(error::SystemError::bad_request("recipient_user_id is required"));
        }

        let created_before = decode_pagination_token(pagination_token)?;

        // One extra row tells us whether another page exists.
        let rows = self
            .decision_repo
            .list_likers(recipient_user_id, created_before, self.page_size as i64 + 1)
            .await?;

        self.paginate(rows)
    }

    /// Users who liked the recipient and have not been liked back yet. The
    /// exclusion is recomputed per call, so a like that became mutual since
    /// the previous page no longer shows up.
    pub async fn list_new_liked_you(
        &self,
        recipient_user_id: &str,
        pagination_token: Option<&str>,
    ) -> Result<(Vec<Liker>, String), error::SystemError> {
        if recipient_user_id.is_empty() {
            return Err(error::SystemError::bad_request("recipient_user_id is required"));
        }

        let created_before = decode_pagination_token(pagination_token)?;

        let rows = self
            .decision_repo
            .list_new_likers(recipient_user_id, created_before, self.page_size as i64 + 1)
            .await?;

        self.paginate(rows)
    }

    pub async fn count_liked_you(
        &self,
        recipient_user_id: &str,
    ) -> Result<u64, error::SystemError> {
        if recipient_user_id.is_empty() {
            return Err(error::SystemError::bad_request("recipient_user_id is required"));
        }

        let count = self.decision_repo.count_likers(recipient_user_id).await?;
        Ok(count as u64)
    }

    /// Truncates an over-fetched page and derives the continuation token
    /// from the `created_at` of the last row kept.
    fn paginate(
        &self,
        mut rows: Vec<LikerRow>,
    ) -> Result<(Vec<Liker>, String), error::SystemError> {
        let mut next_token = String::new();
        if rows.len() > self.page_size {
            next_token = encode_pagination_token(rows[self.page_size - 1].created_at)?;
            rows.truncate(self.page_size);
        }

        let likers = rows
            .into_iter()
            .map(|row| Liker {
                actor_id: row.actor_user_id,
                unix_timestamp: row.created_at.timestamp() as u64,
            })
            .collect();

        Ok((likers, next_token))
    }
}

/// Decodes a pagination token into the upper `created_at` bound for the next
/// page. Absent or empty tokens mean "no bound" (first page). The token only
/// carries whole seconds, so two decisions created within the same stored
/// second can straddle a page boundary on the secondary sort key.
fn decode_pagination_token(
    token: Option<&str>,
) -> Result<Option<DateTime<Utc>>, error::SystemError> {
    let token = match token {
        Some(t) if !t.is_empty() => t,
        _ => return Ok(None),
    };

    let data = BASE64
        .decode(token)
        .map_err(|_| error::SystemError::bad_request("invalid pagination token"))?;

    let timestamp: i64 = serde_json::from_slice(&data)
        .map_err(|_| error::SystemError::bad_request("invalid pagination token"))?;

    let bound = DateTime::from_timestamp(timestamp, 0)
        .ok_or_else(|| error::SystemError::bad_request("invalid pagination token"))?;

    Ok(Some(bound))
}

fn encode_pagination_token(last_created_at: DateTime<Utc>) -> Result<String, error::SystemError> {
    let data = serde_json::to_vec(&last_created_at.timestamp())?;
    Ok(BASE64.encode(data))
}
