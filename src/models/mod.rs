//! Gateway schemas.
//!
//! Request, response and entity types of the gateway REST API. JSON field
//! names are camelCase and enum values SCREAMING_SNAKE_CASE; the Rust side
//! uses snake_case everywhere.

/// Users
pub mod user;
/// Accounts of every kind
pub mod account;
/// Virtual and physical cards
pub mod card;
/// Account operations, receipts and summaries
pub mod operation;
/// Tariff and contract documents
pub mod document;
