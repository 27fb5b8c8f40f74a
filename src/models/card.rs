//! Card schemas.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    Virtual,
    Physical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardStatus {
    Active,
    Frozen,
    Closed,
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardPaymentSystem {
    Visa,
    Mastercard,
}

/// Card issued for an account.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "c1",
///   "pin": "1234",
///   "cvv": "123",
///   "type": "VIRTUAL",
///   "status": "ACTIVE",
///   "accountId": "a1",
///   "cardNumber": "4000123412341234",
///   "cardHolder": "Tom Smith",
///   "expiryDate": "2030-01-31",
///   "paymentSystem": "VISA"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub pin: String,
    pub cvv: String,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub status: CardStatus,
    pub account_id: String,
    pub card_number: String,
    pub card_holder: String,
    pub expiry_date: NaiveDate,
    pub payment_system: CardPaymentSystem,
}

/// Request body for issuing a card (virtual or physical).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCardRequest {
    pub user_id: String,
    pub account_id: String,
}

pub type IssueVirtualCardRequest = IssueCardRequest;
pub type IssuePhysicalCardRequest = IssueCardRequest;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueCardResponse {
    pub card: Card,
}

pub type IssueVirtualCardResponse = IssueCardResponse;
pub type IssuePhysicalCardResponse = IssueCardResponse;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_parses_with_aliases_and_date() {
        let body = r#"{
            "id": "c1", "pin": "1234", "cvv": "123", "type": "PHYSICAL", "status": "FROZEN",
            "accountId": "a1", "cardNumber": "4000123412341234", "cardHolder": "Tom Smith",
            "expiryDate": "2030-01-31", "paymentSystem": "MASTERCARD"
        }"#;
        let card: Card = serde_json::from_str(body).unwrap();

        assert_eq!(card.card_type, CardType::Physical);
        assert_eq!(card.status, CardStatus::Frozen);
        assert_eq!(card.payment_system, CardPaymentSystem::Mastercard);
        assert_eq!(card.expiry_date, NaiveDate::from_ymd_opt(2030, 1, 31).unwrap());
    }

    #[test]
    fn issue_request_uses_camel_case() {
        let request = IssueCardRequest {
            user_id: "u1".to_string(),
            account_id: "a1".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["userId"], "u1");
        assert_eq!(value["accountId"], "a1");
    }
}
