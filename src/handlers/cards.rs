//! Card HTTP handlers.
//!
//! - POST /api/v1/cards/issue-virtual-card
//! - POST /api/v1/cards/issue-physical-card
//!
//! Both take `{ "userId": "...", "accountId": "..." }`. The account must
//! belong to the user, otherwise the answer is 404.

use crate::{
    error::AppError,
    models::card::{CardType, IssueCardRequest, IssueCardResponse},
    store::SharedStore,
};
use axum::{Json, extract::State};

async fn issue_card(
    store: SharedStore,
    request: IssueCardRequest,
    card_type: CardType,
) -> Result<Json<IssueCardResponse>, AppError> {
    let card = store
        .issue_card(&request.user_id, &request.account_id, card_type)
        .await?;
    Ok(Json(IssueCardResponse { card }))
}

pub async fn issue_virtual_card(
    State(store): State<SharedStore>,
    Json(request): Json<IssueCardRequest>,
) -> Result<Json<IssueCardResponse>, AppError> {
    issue_card(store, request, CardType::Virtual).await
}

pub async fn issue_physical_card(
    State(store): State<SharedStore>,
    Json(request): Json<IssueCardRequest>,
) -> Result<Json<IssueCardResponse>, AppError> {
    issue_card(store, request, CardType::Physical).await
}
