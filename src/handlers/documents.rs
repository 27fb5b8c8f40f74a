//! Document HTTP handlers.
//!
//! - GET /api/v1/documents/tariff-document/{account_id}
//! - GET /api/v1/documents/contract-document/{account_id}

use crate::{
    error::AppError,
    models::document::{GetContractDocumentResponse, GetTariffDocumentResponse},
    services::document_service,
    store::SharedStore,
};
use axum::{
    Json,
    extract::{Path, State},
};

/// Tariff of an account.
///
/// # Response
///
/// ```json
/// {
///   "tariff": {
///     "url": "/documents/tariffs/550e8400-e29b-41d4-a716-446655440000.txt",
///     "document": "VGFyaWZmIGZvciBhY2NvdW50..."
///   }
/// }
/// ```
///
/// - **Error (404)**: Account not found
pub async fn get_tariff_document(
    State(store): State<SharedStore>,
    Path(account_id): Path<String>,
) -> Result<Json<GetTariffDocumentResponse>, AppError> {
    let account = store.get_account(&account_id).await?;
    Ok(Json(GetTariffDocumentResponse {
        tariff: document_service::tariff_document(&account),
    }))
}

/// Contract of an account. Same shape as the tariff, under `contract`.
pub async fn get_contract_document(
    State(store): State<SharedStore>,
    Path(account_id): Path<String>,
) -> Result<Json<GetContractDocumentResponse>, AppError> {
    let account = store.get_account(&account_id).await?;
    Ok(Json(GetContractDocumentResponse {
        contract: document_service::contract_document(&account),
    }))
}
