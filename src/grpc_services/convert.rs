//! Model to proto conversions for the mock gateway replies, plus the few
//! request fields that need checking on the way in.

use tonic::Status;

use crate::models::{
    account::{Account, AccountStatus, AccountType},
    card::{Card, CardPaymentSystem, CardStatus, CardType},
    document::Document,
    operation::{
        MakeOperationRequest, Operation, OperationReceipt, OperationStatus, OperationType,
        OperationsSummary,
    },
    user::{CreateUserRequest, User},
};
use crate::proto;

fn account_type(value: AccountType) -> proto::AccountType {
    match value {
        AccountType::Deposit => proto::AccountType::Deposit,
        AccountType::Savings => proto::AccountType::Savings,
        AccountType::DebitCard => proto::AccountType::DebitCard,
        AccountType::CreditCard => proto::AccountType::CreditCard,
    }
}

fn account_status(value: AccountStatus) -> proto::AccountStatus {
    match value {
        AccountStatus::Active => proto::AccountStatus::Active,
        AccountStatus::Closed => proto::AccountStatus::Closed,
        AccountStatus::PendingClosure => proto::AccountStatus::PendingClosure,
    }
}

fn card_type(value: CardType) -> proto::CardType {
    match value {
        CardType::Virtual => proto::CardType::Virtual,
        CardType::Physical => proto::CardType::Physical,
    }
}

fn card_status(value: CardStatus) -> proto::CardStatus {
    match value {
        CardStatus::Active => proto::CardStatus::Active,
        CardStatus::Frozen => proto::CardStatus::Frozen,
        CardStatus::Closed => proto::CardStatus::Closed,
        CardStatus::Blocked => proto::CardStatus::Blocked,
    }
}

fn card_payment_system(value: CardPaymentSystem) -> proto::CardPaymentSystem {
    match value {
        CardPaymentSystem::Visa => proto::CardPaymentSystem::Visa,
        CardPaymentSystem::Mastercard => proto::CardPaymentSystem::Mastercard,
    }
}

fn operation_type(value: OperationType) -> proto::OperationType {
    match value {
        OperationType::Fee => proto::OperationType::Fee,
        OperationType::TopUp => proto::OperationType::TopUp,
        OperationType::Purchase => proto::OperationType::Purchase,
        OperationType::Cashback => proto::OperationType::Cashback,
        OperationType::Transfer => proto::OperationType::Transfer,
        OperationType::BillPayment => proto::OperationType::BillPayment,
        OperationType::CashWithdrawal => proto::OperationType::CashWithdrawal,
    }
}

fn operation_status(value: OperationStatus) -> proto::OperationStatus {
    match value {
        OperationStatus::Unspecified => proto::OperationStatus::Unspecified,
        OperationStatus::Failed => proto::OperationStatus::Failed,
        OperationStatus::Completed => proto::OperationStatus::Completed,
        OperationStatus::InProgress => proto::OperationStatus::InProgress,
    }
}

impl From<User> for proto::User {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            last_name: user.last_name,
            first_name: user.first_name,
            middle_name: user.middle_name,
            phone_number: user.phone_number,
        }
    }
}

impl From<Card> for proto::Card {
    fn from(card: Card) -> Self {
        Self {
            id: card.id,
            pin: card.pin,
            cvv: card.cvv,
            r#type: card_type(card.card_type) as i32,
            status: card_status(card.status) as i32,
            account_id: card.account_id,
            card_number: card.card_number,
            card_holder: card.card_holder,
            expiry_date: card.expiry_date.format("%Y-%m-%d").to_string(),
            payment_system: card_payment_system(card.payment_system) as i32,
        }
    }
}

impl From<Account> for proto::Account {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            r#type: account_type(account.account_type) as i32,
            cards: account.cards.into_iter().map(Into::into).collect(),
            status: account_status(account.status) as i32,
            balance: account.balance,
        }
    }
}

impl From<Operation> for proto::Operation {
    fn from(operation: Operation) -> Self {
        Self {
            id: operation.id,
            r#type: operation_type(operation.operation_type) as i32,
            status: operation_status(operation.status) as i32,
            amount: operation.amount,
            card_id: operation.card_id,
            category: operation.category,
            created_at: operation.created_at,
            account_id: operation.account_id,
        }
    }
}

impl From<OperationReceipt> for proto::OperationReceipt {
    fn from(receipt: OperationReceipt) -> Self {
        Self {
            url: receipt.url,
            document: receipt.document,
        }
    }
}

impl From<OperationsSummary> for proto::OperationsSummary {
    fn from(summary: OperationsSummary) -> Self {
        Self {
            spent_amount: summary.spent_amount,
            received_amount: summary.received_amount,
            cashback_amount: summary.cashback_amount,
        }
    }
}

impl From<Document> for proto::Document {
    fn from(document: Document) -> Self {
        Self {
            url: document.url,
            document: document.document,
        }
    }
}

impl From<proto::CreateUserRequest> for CreateUserRequest {
    fn from(request: proto::CreateUserRequest) -> Self {
        Self {
            email: request.email,
            last_name: request.last_name,
            first_name: request.first_name,
            middle_name: request.middle_name,
            phone_number: request.phone_number,
        }
    }
}

/// Body of a make-operation call; an unknown status number is rejected.
pub fn operation_request(
    status: i32,
    amount: f64,
    card_id: String,
    account_id: String,
) -> Result<MakeOperationRequest, Status> {
    let status = match proto::OperationStatus::try_from(status) {
        Ok(proto::OperationStatus::Unspecified) => OperationStatus::Unspecified,
        Ok(proto::OperationStatus::Failed) => OperationStatus::Failed,
        Ok(proto::OperationStatus::Completed) => OperationStatus::Completed,
        Ok(proto::OperationStatus::InProgress) => OperationStatus::InProgress,
        Err(_) => {
            return Err(Status::invalid_argument(format!(
                "Unknown operation status: {status}"
            )));
        }
    };

    Ok(MakeOperationRequest {
        status,
        amount,
        card_id,
        account_id,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn card_round_trips_through_the_client_conversion() {
        let card = Card {
            id: "c1".to_string(),
            pin: "1234".to_string(),
            cvv: "123".to_string(),
            card_type: CardType::Physical,
            status: CardStatus::Frozen,
            account_id: "a1".to_string(),
            card_number: "4000000000000002".to_string(),
            card_holder: "Tom Smith".to_string(),
            expiry_date: NaiveDate::from_ymd_opt(2030, 1, 31).unwrap(),
            payment_system: CardPaymentSystem::Mastercard,
        };

        let reply = proto::Card::from(card.clone());
        assert_eq!(reply.expiry_date, "2030-01-31");
        assert_eq!(reply.r#type, proto::CardType::Physical as i32);

        assert_eq!(Card::try_from(reply).unwrap(), card);
    }

    #[test]
    fn unknown_status_number_is_invalid_argument() {
        let err = operation_request(42, 1.0, "c1".into(), "a1".into()).unwrap_err();
        assert_eq!(err.code(), tonic::Code::InvalidArgument);

        let request = operation_request(
            proto::OperationStatus::InProgress as i32,
            1.0,
            "c1".into(),
            "a1".into(),
        )
        .unwrap();
        assert_eq!(request.status, OperationStatus::InProgress);
    }
}
