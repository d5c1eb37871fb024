use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PutDecisionBody {
    #[validate(length(min = 1))]
    pub actor_user_id: String,
    #[validate(length(min = 1))]
    pub recipient_user_id: String,
    pub liked_recipient: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PutDecisionResponse {
    pub mutual_likes: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Liker {
    pub actor_id: String,
    pub unix_timestamp: u64,
}

/// `next_pagination_token` is always present; an empty string means there
/// are no further pages.
#[derive(Debug, Clone, Serialize)]
pub struct ListLikersResponse {
    pub likers: Vec<Liker>,
    pub next_pagination_token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CountLikersResponse {
    pub count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LikersQuery {
    pub pagination_token: Option<String>,
}
