//! Business logic of the mock gateway.
//!
//! Services sit between the HTTP handlers / gRPC services and the in-memory
//! store and hold validation and balance rules.

pub mod document_service;
pub mod operation_service;
pub mod user_service;
