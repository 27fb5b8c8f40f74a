//! Document service - receipts, tariffs and contracts.
//!
//! The mock gateway renders documents as plain text and ships them
//! base64-encoded next to a download URL.

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::models::{account::Account, document::Document, operation::{Operation, OperationReceipt}};

fn encode(text: String) -> String {
    STANDARD.encode(text.as_bytes())
}

pub fn operation_receipt(operation: &Operation) -> OperationReceipt {
    OperationReceipt {
        url: format!("/documents/receipts/{}.txt", operation.id),
        document: encode(format!(
            "Receipt {}\nType: {:?}\nStatus: {:?}\nAmount: {:.2}\nCard: {}\nDate: {}\n",
            operation.id,
            operation.operation_type,
            operation.status,
            operation.amount,
            operation.card_id,
            operation.created_at
        )),
    }
}

pub fn tariff_document(account: &Account) -> Document {
    Document {
        url: format!("/documents/tariffs/{}.txt", account.id),
        document: encode(format!(
            "Tariff for account {}\nAccount type: {:?}\n",
            account.id, account.account_type
        )),
    }
}

pub fn contract_document(account: &Account) -> Document {
    Document {
        url: format!("/documents/contracts/{}.txt", account.id),
        document: encode(format!(
            "Contract for account {}\nAccount type: {:?}\nStatus: {:?}\n",
            account.id, account.account_type, account.status
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::account::{AccountStatus, AccountType};

    #[test]
    fn tariff_body_decodes_to_text_naming_the_account() {
        let account = Account {
            id: "a1".to_string(),
            account_type: AccountType::Savings,
            cards: Vec::new(),
            status: AccountStatus::Active,
            balance: 0.0,
        };

        let document = tariff_document(&account);

        assert_eq!(document.url, "/documents/tariffs/a1.txt");
        let text = String::from_utf8(STANDARD.decode(document.document).unwrap()).unwrap();
        assert!(text.contains("Tariff for account a1"));
    }
}
