//! Operation service - money movements on card accounts.
//!
//! This service handles:
//! - Amount validation
//! - Balance direction per operation type
//! - Spending summaries
//!
//! # Balance Rules
//!
//! Only `COMPLETED` operations move the balance. Top-ups and cashbacks add
//! money; every other type takes it away. Balances may go negative, the mock
//! gateway has no overdraft checks.

use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::operation::{
        MakeOperationRequest, Operation, OperationStatus, OperationType, OperationsSummary,
    },
    store::GatewayStore,
};

/// Signed balance change of an operation.
pub fn balance_delta(operation_type: OperationType, status: OperationStatus, amount: f64) -> f64 {
    if status != OperationStatus::Completed {
        return 0.0;
    }

    match operation_type {
        OperationType::TopUp | OperationType::Cashback => amount,
        OperationType::Fee
        | OperationType::Purchase
        | OperationType::Transfer
        | OperationType::BillPayment
        | OperationType::CashWithdrawal => -amount,
    }
}

/// Execute an operation against an account.
///
/// # Process
///
/// 1. Validate the amount
/// 2. Build the operation record
/// 3. Store it and update the balance under one write lock
///
/// # Arguments
///
/// * `store` - Gateway store
/// * `operation_type` - Taken from the endpoint, not from the body
/// * `request` - Status, amount, card and account
/// * `category` - Purchase category; empty for other types
///
/// # Errors
///
/// - `InvalidRequest`: Amount is zero, negative or not a number
/// - `AccountNotFound`: Account doesn't exist
/// - `CardNotFound`: Card doesn't exist or belongs to another account
pub async fn execute_operation(
    store: &GatewayStore,
    operation_type: OperationType,
    request: MakeOperationRequest,
    category: Option<String>,
) -> Result<Operation, AppError> {
    if !(request.amount.is_finite() && request.amount > 0.0) {
        return Err(AppError::InvalidRequest(
            "Amount must be positive".to_string(),
        ));
    }

    let operation = Operation {
        id: Uuid::new_v4().to_string(),
        operation_type,
        status: request.status,
        amount: request.amount,
        card_id: request.card_id,
        category: category.unwrap_or_default(),
        created_at: Utc::now().to_rfc3339(),
        account_id: request.account_id,
    };
    let delta = balance_delta(operation_type, operation.status, operation.amount);

    let operation = store.record_operation(operation, delta).await?;

    tracing::debug!(
        operation_id = %operation.id,
        operation_type = ?operation.operation_type,
        amount = operation.amount,
        "Operation recorded"
    );

    Ok(operation)
}

/// Totals over the completed operations of an account.
///
/// Cashback is reported on its own and is not part of `received_amount`.
pub fn summarize(operations: &[Operation]) -> OperationsSummary {
    let mut summary = OperationsSummary {
        spent_amount: 0.0,
        received_amount: 0.0,
        cashback_amount: 0.0,
    };

    for operation in operations
        .iter()
        .filter(|op| op.status == OperationStatus::Completed)
    {
        match operation.operation_type {
            OperationType::TopUp => summary.received_amount += operation.amount,
            OperationType::Cashback => summary.cashback_amount += operation.amount,
            _ => summary.spent_amount += operation.amount,
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{account::AccountType, user::CreateUserRequest};

    fn record(operation_type: OperationType, status: OperationStatus, amount: f64) -> Operation {
        Operation {
            id: Uuid::new_v4().to_string(),
            operation_type,
            status,
            amount,
            card_id: "c1".to_string(),
            category: String::new(),
            created_at: Utc::now().to_rfc3339(),
            account_id: "a1".to_string(),
        }
    }

    #[test]
    fn only_completed_operations_move_money() {
        assert_eq!(
            balance_delta(OperationType::TopUp, OperationStatus::Completed, 10.0),
            10.0
        );
        assert_eq!(
            balance_delta(OperationType::Purchase, OperationStatus::Completed, 10.0),
            -10.0
        );
        assert_eq!(
            balance_delta(OperationType::Purchase, OperationStatus::Failed, 10.0),
            0.0
        );
    }

    #[test]
    fn summary_splits_spent_received_and_cashback() {
        let operations = vec![
            record(OperationType::TopUp, OperationStatus::Completed, 100.0),
            record(OperationType::Purchase, OperationStatus::Completed, 30.0),
            record(OperationType::Fee, OperationStatus::Completed, 5.0),
            record(OperationType::Cashback, OperationStatus::Completed, 2.5),
            record(OperationType::Transfer, OperationStatus::InProgress, 50.0),
        ];

        let summary = summarize(&operations);

        assert_eq!(summary.received_amount, 100.0);
        assert_eq!(summary.spent_amount, 35.0);
        assert_eq!(summary.cashback_amount, 2.5);
    }

    #[tokio::test]
    async fn non_positive_amount_is_rejected() {
        let store = GatewayStore::new();
        let mut request = MakeOperationRequest::completed("c1", "a1");
        request.amount = 0.0;

        let err = execute_operation(&store, OperationType::Fee, request, None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn purchase_keeps_category_and_lowers_balance() {
        let store = GatewayStore::new();
        let user = store.create_user(CreateUserRequest::fake()).await;
        let account = store
            .open_account(&user.id, AccountType::DebitCard)
            .await
            .unwrap();
        let request = MakeOperationRequest::completed(&account.cards[0].id, &account.id);
        let amount = request.amount;

        let operation = execute_operation(
            &store,
            OperationType::Purchase,
            request,
            Some("taxi".to_string()),
        )
        .await
        .unwrap();

        assert_eq!(operation.category, "taxi");
        assert_eq!(operation.operation_type, OperationType::Purchase);
        let balance = store.get_account(&account.id).await.unwrap().balance;
        assert!((balance + amount).abs() < 1e-9);
    }
}
