//! Operation HTTP handlers.
//!
//! Reads:
//! - GET /api/v1/operations?accountId=...
//! - GET /api/v1/operations/{operation_id}
//! - GET /api/v1/operations/operation-receipt/{operation_id}
//! - GET /api/v1/operations/operations-summary?accountId=...
//!
//! Writes, one endpoint per operation type:
//! - POST /api/v1/operations/make-fee-operation
//! - POST /api/v1/operations/make-top-up-operation
//! - POST /api/v1/operations/make-cashback-operation
//! - POST /api/v1/operations/make-transfer-operation
//! - POST /api/v1/operations/make-purchase-operation
//! - POST /api/v1/operations/make-bill-payment-operation
//! - POST /api/v1/operations/make-cash-withdrawal-operation

use crate::{
    error::AppError,
    models::operation::{
        GetOperationReceiptResponse, GetOperationResponse, GetOperationsQuery,
        GetOperationsResponse, GetOperationsSummaryResponse, MakeOperationRequest,
        MakeOperationResponse, MakePurchaseOperationRequest, OperationType,
    },
    services::{document_service, operation_service},
    store::SharedStore,
};
use axum::{
    Json,
    extract::{Path, Query, State},
};

/// Operations of an account, oldest first.
///
/// - **Error (404)**: Account not found
pub async fn get_operations(
    State(store): State<SharedStore>,
    Query(query): Query<GetOperationsQuery>,
) -> Result<Json<GetOperationsResponse>, AppError> {
    let operations = store.get_operations(&query.account_id).await?;
    Ok(Json(GetOperationsResponse { operations }))
}

/// Get an operation by ID.
///
/// # Response
///
/// ```json
/// {
///   "operation": {
///     "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
///     "type": "PURCHASE",
///     "status": "COMPLETED",
///     "amount": 77.99,
///     "cardId": "...",
///     "category": "taxi",
///     "createdAt": "2025-12-20T10:00:00+00:00",
///     "accountId": "..."
///   }
/// }
/// ```
pub async fn get_operation(
    State(store): State<SharedStore>,
    Path(operation_id): Path<String>,
) -> Result<Json<GetOperationResponse>, AppError> {
    let operation = store.get_operation(&operation_id).await?;
    Ok(Json(GetOperationResponse { operation }))
}

/// Receipt of an operation: download URL plus the base64 document.
pub async fn get_operation_receipt(
    State(store): State<SharedStore>,
    Path(operation_id): Path<String>,
) -> Result<Json<GetOperationReceiptResponse>, AppError> {
    let operation = store.get_operation(&operation_id).await?;
    Ok(Json(GetOperationReceiptResponse {
        receipt: document_service::operation_receipt(&operation),
    }))
}

/// Spent, received and cashback totals of an account.
///
/// # Response
///
/// ```json
/// {
///   "summary": {
///     "spentAmount": 120.5,
///     "receivedAmount": 1000.0,
///     "cashbackAmount": 3.2
///   }
/// }
/// ```
pub async fn get_operations_summary(
    State(store): State<SharedStore>,
    Query(query): Query<GetOperationsQuery>,
) -> Result<Json<GetOperationsSummaryResponse>, AppError> {
    let operations = store.get_operations(&query.account_id).await?;
    Ok(Json(GetOperationsSummaryResponse {
        summary: operation_service::summarize(&operations),
    }))
}

async fn make_operation(
    store: SharedStore,
    operation_type: OperationType,
    request: MakeOperationRequest,
) -> Result<Json<MakeOperationResponse>, AppError> {
    let operation =
        operation_service::execute_operation(&store, operation_type, request, None).await?;
    Ok(Json(MakeOperationResponse { operation }))
}

/// Request body shared by all make endpoints except purchase:
///
/// ```json
/// {
///   "status": "COMPLETED",
///   "amount": 150.0,
///   "cardId": "...",
///   "accountId": "..."
/// }
/// ```
///
/// - **Error (400)**: Amount is not positive
/// - **Error (404)**: Account or card not found
pub async fn make_fee_operation(
    State(store): State<SharedStore>,
    Json(request): Json<MakeOperationRequest>,
) -> Result<Json<MakeOperationResponse>, AppError> {
    make_operation(store, OperationType::Fee, request).await
}

pub async fn make_top_up_operation(
    State(store): State<SharedStore>,
    Json(request): Json<MakeOperationRequest>,
) -> Result<Json<MakeOperationResponse>, AppError> {
    make_operation(store, OperationType::TopUp, request).await
}

pub async fn make_cashback_operation(
    State(store): State<SharedStore>,
    Json(request): Json<MakeOperationRequest>,
) -> Result<Json<MakeOperationResponse>, AppError> {
    make_operation(store, OperationType::Cashback, request).await
}

pub async fn make_transfer_operation(
    State(store): State<SharedStore>,
    Json(request): Json<MakeOperationRequest>,
) -> Result<Json<MakeOperationResponse>, AppError> {
    make_operation(store, OperationType::Transfer, request).await
}

/// Purchase takes the common body plus a `category` field.
pub async fn make_purchase_operation(
    State(store): State<SharedStore>,
    Json(request): Json<MakePurchaseOperationRequest>,
) -> Result<Json<MakeOperationResponse>, AppError> {
    let operation = operation_service::execute_operation(
        &store,
        OperationType::Purchase,
        request.operation,
        Some(request.category),
    )
    .await?;
    Ok(Json(MakeOperationResponse { operation }))
}

pub async fn make_bill_payment_operation(
    State(store): State<SharedStore>,
    Json(request): Json<MakeOperationRequest>,
) -> Result<Json<MakeOperationResponse>, AppError> {
    make_operation(store, OperationType::BillPayment, request).await
}

pub async fn make_cash_withdrawal_operation(
    State(store): State<SharedStore>,
    Json(request): Json<MakeOperationRequest>,
) -> Result<Json<MakeOperationResponse>, AppError> {
    make_operation(store, OperationType::CashWithdrawal, request).await
}
