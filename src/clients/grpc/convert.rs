//! Conversions from gRPC replies to the shared models.
//!
//! Proto enums carry an `UNSPECIFIED` zero value the models do not have (except
//! operation status); receiving one is reported as `ClientError::Invalid`.

use chrono::NaiveDate;

use crate::error::ClientError;
use crate::models::{
    account::{Account, AccountStatus, AccountType},
    card::{Card, CardPaymentSystem, CardStatus, CardType},
    document::Document,
    operation::{Operation, OperationReceipt, OperationStatus, OperationType, OperationsSummary},
    user::User,
};
use crate::proto;

/// Unwrap an optional sub-message of a reply.
pub fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ClientError> {
    value.ok_or(ClientError::MissingField(field))
}

fn invalid(field: &'static str, value: impl ToString) -> ClientError {
    ClientError::Invalid {
        field,
        value: value.to_string(),
    }
}

fn account_type(value: i32) -> Result<AccountType, ClientError> {
    match proto::AccountType::try_from(value) {
        Ok(proto::AccountType::Deposit) => Ok(AccountType::Deposit),
        Ok(proto::AccountType::Savings) => Ok(AccountType::Savings),
        Ok(proto::AccountType::DebitCard) => Ok(AccountType::DebitCard),
        Ok(proto::AccountType::CreditCard) => Ok(AccountType::CreditCard),
        _ => Err(invalid("account.type", value)),
    }
}

fn account_status(value: i32) -> Result<AccountStatus, ClientError> {
    match proto::AccountStatus::try_from(value) {
        Ok(proto::AccountStatus::Active) => Ok(AccountStatus::Active),
        Ok(proto::AccountStatus::Closed) => Ok(AccountStatus::Closed),
        Ok(proto::AccountStatus::PendingClosure) => Ok(AccountStatus::PendingClosure),
        _ => Err(invalid("account.status", value)),
    }
}

fn card_type(value: i32) -> Result<CardType, ClientError> {
    match proto::CardType::try_from(value) {
        Ok(proto::CardType::Virtual) => Ok(CardType::Virtual),
        Ok(proto::CardType::Physical) => Ok(CardType::Physical),
        _ => Err(invalid("card.type", value)),
    }
}

fn card_status(value: i32) -> Result<CardStatus, ClientError> {
    match proto::CardStatus::try_from(value) {
        Ok(proto::CardStatus::Active) => Ok(CardStatus::Active),
        Ok(proto::CardStatus::Frozen) => Ok(CardStatus::Frozen),
        Ok(proto::CardStatus::Closed) => Ok(CardStatus::Closed),
        Ok(proto::CardStatus::Blocked) => Ok(CardStatus::Blocked),
        _ => Err(invalid("card.status", value)),
    }
}

fn card_payment_system(value: i32) -> Result<CardPaymentSystem, ClientError> {
    match proto::CardPaymentSystem::try_from(value) {
        Ok(proto::CardPaymentSystem::Visa) => Ok(CardPaymentSystem::Visa),
        Ok(proto::CardPaymentSystem::Mastercard) => Ok(CardPaymentSystem::Mastercard),
        _ => Err(invalid("card.payment_system", value)),
    }
}

fn operation_type(value: i32) -> Result<OperationType, ClientError> {
    match proto::OperationType::try_from(value) {
        Ok(proto::OperationType::Fee) => Ok(OperationType::Fee),
        Ok(proto::OperationType::TopUp) => Ok(OperationType::TopUp),
        Ok(proto::OperationType::Purchase) => Ok(OperationType::Purchase),
        Ok(proto::OperationType::Cashback) => Ok(OperationType::Cashback),
        Ok(proto::OperationType::Transfer) => Ok(OperationType::Transfer),
        Ok(proto::OperationType::BillPayment) => Ok(OperationType::BillPayment),
        Ok(proto::OperationType::CashWithdrawal) => Ok(OperationType::CashWithdrawal),
        _ => Err(invalid("operation.type", value)),
    }
}

fn operation_status(value: i32) -> Result<OperationStatus, ClientError> {
    match proto::OperationStatus::try_from(value) {
        Ok(proto::OperationStatus::Unspecified) => Ok(OperationStatus::Unspecified),
        Ok(proto::OperationStatus::Failed) => Ok(OperationStatus::Failed),
        Ok(proto::OperationStatus::Completed) => Ok(OperationStatus::Completed),
        Ok(proto::OperationStatus::InProgress) => Ok(OperationStatus::InProgress),
        Err(_) => Err(invalid("operation.status", value)),
    }
}

impl From<proto::User> for User {
    fn from(user: proto::User) -> Self {
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

impl TryFrom<proto::Card> for Card {
    type Error = ClientError;

    fn try_from(card: proto::Card) -> Result<Self, Self::Error> {
        let expiry_date = NaiveDate::parse_from_str(&card.expiry_date, "%Y-%m-%d")
            .map_err(|_| invalid("card.expiry_date", &card.expiry_date))?;

        Ok(Self {
            card_type: card_type(card.r#type)?,
            status: card_status(card.status)?,
            payment_system: card_payment_system(card.payment_system)?,
            id: card.id,
            pin: card.pin,
            cvv: card.cvv,
            account_id: card.account_id,
            card_number: card.card_number,
            card_holder: card.card_holder,
            expiry_date,
        })
    }
}

impl TryFrom<proto::Account> for Account {
    type Error = ClientError;

    fn try_from(account: proto::Account) -> Result<Self, Self::Error> {
        Ok(Self {
            account_type: account_type(account.r#type)?,
            status: account_status(account.status)?,
            cards: account
                .cards
                .into_iter()
                .map(Card::try_from)
                .collect::<Result<_, _>>()?,
            id: account.id,
            balance: account.balance,
        })
    }
}

impl TryFrom<proto::Operation> for Operation {
    type Error = ClientError;

    fn try_from(operation: proto::Operation) -> Result<Self, Self::Error> {
        Ok(Self {
            operation_type: operation_type(operation.r#type)?,
            status: operation_status(operation.status)?,
            id: operation.id,
            amount: operation.amount,
            card_id: operation.card_id,
            category: operation.category,
            created_at: operation.created_at,
            account_id: operation.account_id,
        })
    }
}

impl From<proto::OperationReceipt> for OperationReceipt {
    fn from(receipt: proto::OperationReceipt) -> Self {
        Self {
            url: receipt.url,
            document: receipt.document,
        }
    }
}

impl From<proto::OperationsSummary> for OperationsSummary {
    fn from(summary: proto::OperationsSummary) -> Self {
        Self {
            spent_amount: summary.spent_amount,
            received_amount: summary.received_amount,
            cashback_amount: summary.cashback_amount,
        }
    }
}

impl From<proto::Document> for Document {
    fn from(document: proto::Document) -> Self {
        Self {
            url: document.url,
            document: document.document,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proto_card() -> proto::Card {
        proto::Card {
            id: "c1".to_string(),
            pin: "1234".to_string(),
            cvv: "123".to_string(),
            r#type: proto::CardType::Virtual as i32,
            status: proto::CardStatus::Active as i32,
            account_id: "a1".to_string(),
            card_number: "4000123412341234".to_string(),
            card_holder: "Tom Smith".to_string(),
            expiry_date: "2030-01-31".to_string(),
            payment_system: proto::CardPaymentSystem::Visa as i32,
        }
    }

    #[test]
    fn account_with_cards_converts() {
        let account = proto::Account {
            id: "a1".to_string(),
            r#type: proto::AccountType::DebitCard as i32,
            cards: vec![proto_card()],
            status: proto::AccountStatus::Active as i32,
            balance: 12.5,
        };

        let account = Account::try_from(account).unwrap();

        assert_eq!(account.account_type, AccountType::DebitCard);
        assert_eq!(account.cards.len(), 1);
        assert_eq!(account.cards[0].card_type, CardType::Virtual);
        assert_eq!(
            account.cards[0].expiry_date,
            NaiveDate::from_ymd_opt(2030, 1, 31).unwrap()
        );
    }

    #[test]
    fn unspecified_enum_is_rejected() {
        let mut card = proto_card();
        card.r#type = proto::CardType::Unspecified as i32;

        let err = Card::try_from(card).unwrap_err();
        assert!(matches!(err, ClientError::Invalid { field: "card.type", .. }));
    }

    #[test]
    fn malformed_expiry_date_is_rejected() {
        let mut card = proto_card();
        card.expiry_date = "01/30".to_string();

        let err = Card::try_from(card).unwrap_err();
        assert!(matches!(err, ClientError::Invalid { field: "card.expiry_date", .. }));
    }

    #[test]
    fn unspecified_operation_status_is_kept() {
        let operation = proto::Operation {
            id: "o1".to_string(),
            r#type: proto::OperationType::Purchase as i32,
            status: proto::OperationStatus::Unspecified as i32,
            amount: 10.0,
            card_id: "c1".to_string(),
            category: "taxi".to_string(),
            created_at: "2025-01-15T10:30:00Z".to_string(),
            account_id: "a1".to_string(),
        };

        let operation = Operation::try_from(operation).unwrap();
        assert_eq!(operation.status, OperationStatus::Unspecified);
        assert_eq!(operation.operation_type, OperationType::Purchase);
    }

    #[test]
    fn missing_sub_message_is_reported() {
        let err = required::<proto::User>(None, "user").unwrap_err();
        assert!(matches!(err, ClientError::MissingField("user")));
    }
}
