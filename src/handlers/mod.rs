//! HTTP request handlers of the mock gateway.
//!
//! Each handler is an async function that:
//! 1. Receives request data (JSON body, URL params, query string)
//! 2. Calls the store or a service
//! 3. Returns a JSON envelope or an `AppError`

/// Contract and tariff documents
pub mod documents;
/// Virtual and physical card issuing
pub mod cards;
/// Account listing and opening
pub mod accounts;
/// Liveness endpoint
pub mod health;
/// Operations, receipts and summaries
pub mod operations;
/// User CRUD
pub mod users;
