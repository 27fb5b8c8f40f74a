//! Operation schemas.
//!
//! Operations are money movements on a card account: fees, top-ups, purchases,
//! cashbacks, transfers, bill payments and cash withdrawals.

use serde::{Deserialize, Serialize};

use crate::fakers::FAKE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationType {
    Fee,
    TopUp,
    Purchase,
    Cashback,
    Transfer,
    BillPayment,
    CashWithdrawal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    Failed,
    Completed,
    InProgress,
    Unspecified,
}

/// Operation record.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "o1",
///   "type": "PURCHASE",
///   "status": "IN_PROGRESS",
///   "amount": 77.99,
///   "cardId": "c1",
///   "category": "taxi",
///   "createdAt": "2025-01-15T10:30:00Z",
///   "accountId": "a1"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub id: String,
    #[serde(rename = "type")]
    pub operation_type: OperationType,
    pub status: OperationStatus,
    pub amount: f64,
    pub card_id: String,
    pub category: String,
    pub created_at: String,
    pub account_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetOperationResponse {
    pub operation: Operation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MakeOperationResponse {
    pub operation: Operation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationReceipt {
    pub url: String,
    pub document: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetOperationReceiptResponse {
    pub receipt: OperationReceipt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationsSummary {
    pub spent_amount: f64,
    pub received_amount: f64,
    pub cashback_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetOperationsSummaryResponse {
    pub summary: OperationsSummary,
}

/// Query string of `GET /api/v1/operations` and `/operations-summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOperationsQuery {
    pub account_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetOperationsResponse {
    pub operations: Vec<Operation>,
}

/// Request body of every "make operation" endpoint except purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MakeOperationRequest {
    pub status: OperationStatus,
    pub amount: f64,
    pub card_id: String,
    pub account_id: String,
}

impl MakeOperationRequest {
    /// Completed operation with a random amount.
    pub fn completed(card_id: &str, account_id: &str) -> Self {
        Self {
            status: OperationStatus::Completed,
            amount: FAKE.amount(),
            card_id: card_id.to_string(),
            account_id: account_id.to_string(),
        }
    }
}

pub type MakeFeeOperationRequest = MakeOperationRequest;
pub type MakeTopUpOperationRequest = MakeOperationRequest;
pub type MakeCashbackOperationRequest = MakeOperationRequest;
pub type MakeTransferOperationRequest = MakeOperationRequest;
pub type MakeBillPaymentOperationRequest = MakeOperationRequest;
pub type MakeCashWithdrawalOperationRequest = MakeOperationRequest;

/// Purchase request: the common operation fields plus a spending category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MakePurchaseOperationRequest {
    #[serde(flatten)]
    pub operation: MakeOperationRequest,
    pub category: String,
}

impl MakePurchaseOperationRequest {
    pub fn completed(card_id: &str, account_id: &str) -> Self {
        Self {
            operation: MakeOperationRequest::completed(card_id, account_id),
            category: FAKE.category(),
        }
    }
}
