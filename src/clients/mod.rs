//! Gateway API clients.
//!
//! Each gateway resource has an HTTP and a gRPC client with the same two
//! layers: `*_api` methods returning the raw transport response, and plain
//! methods taking ids and returning the parsed reply. The traits in
//! [`gateway`] hide the transport for code that works with either.

/// Transport-neutral gateway traits
pub mod gateway;
/// gRPC clients
pub mod grpc;
/// HTTP clients
pub mod http;

pub use gateway::{
    AccountsGateway, CardsGateway, DocumentsGateway, OperationsGateway, UsersGateway,
};

/// Transport a seeding run talks to the gateway over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Transport {
    #[default]
    Grpc,
    Http,
}
