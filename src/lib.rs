//! Load testing toolkit for a banking gateway.
//!
//! HTTP and gRPC gateway clients, test data seeding, a small virtual-user load
//! runner with request stats, and an in-memory mock of the gateway serving
//! both the REST and the gRPC API.

pub mod clients;
pub mod config;
pub mod error;
pub mod fakers;
pub mod grpc_services;
pub mod handlers;
pub mod load;
pub mod models;
pub mod proto;
pub mod seeds;
pub mod server;
pub mod services;
pub mod store;
