use actix_web::{get, put, web};

use crate::{
    api::{error, success},
    modules::explore::{
        model::{
            CountLikersResponse, LikersQuery, ListLikersResponse, PutDecisionBody,
            PutDecisionResponse,
        },
        repository_pg::DecisionRepositoryPg,
        service::ExploreService,
    },
    utils::ValidatedJson,
};

pub type ExploreSvc = ExploreService<DecisionRepositoryPg>;

#[put("/decisions")]
pub async fn put_decision(
    explore_service: web::Data<ExploreSvc>,
    body: ValidatedJson<PutDecisionBody>,
) -> Result<success::Success<PutDecisionResponse>, error::Error> {
    let body = body.0;
    let mutual_likes = explore_service
        .put_decision(&body.actor_user_id, &body.recipient_user_id, body.liked_recipient)
        .await?;

    Ok(success::Success::ok(Some(PutDecisionResponse { mutual_likes }))
        .message("Decision recorded successfully"))
}

#[get("/users/{recipient_id}/likers")]
pub async fn list_liked_you(
    explore_service: web::Data<ExploreSvc>,
    recipient_id: web::Path<String>,
    query: web::Query<LikersQuery>,
) -> Result<success::Success<ListLikersResponse>, error::Error> {
    let (likers, next_pagination_token) = explore_service
        .list_liked_you(&recipient_id, query.pagination_token.as_deref())
        .await?;

    Ok(success::Success::ok(Some(ListLikersResponse { likers, next_pagination_token }))
        .message("Likers retrieved successfully"))
}

#[get("/users/{recipient_id}/likers/new")]
pub async fn list_new_liked_you(
    explore_service: web::Data<ExploreSvc>,
    recipient_id: web::Path<String>,
    query: web::Query<LikersQuery>,
) -> Result<success::Success<ListLikersResponse>, error::Error> {
    let (likers, next_pagination_token) = explore_service
        .list_new_liked_you(&recipient_id, query.pagination_token.as_deref())
        .await?;

    Ok(success::Success::ok(Some(ListLikersResponse { likers, next_pagination_token }))
        .message("New likers retrieved successfully"))
}

#[get("/users/{recipient_id}/likers/count")]
pub async fn count_liked_you(
    explore_service: web::Data<ExploreSvc>,
    recipient_id: web::Path<String>,
) -> Result<success::Success<CountLikersResponse>, error::Error> {
    let count = explore_service.count_liked_you(&recipient_id).await?;

    Ok(success::Success::ok(Some(CountLikersResponse { count }))
        .message("Likers counted successfully"))
}
