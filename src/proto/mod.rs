//! gRPC contracts of the gateway service.
//!
//! `gateway.v1.rs` is generated from `proto/gateway.proto` and checked in, so
//! building the crate does not need `protoc`. Clients and server stubs are both
//! generated; the server side backs the mock gateway.

#[allow(clippy::all)]
pub mod gateway {
    pub mod v1 {
        include!("gateway.v1.rs");
    }
}

pub use gateway::v1::*;
