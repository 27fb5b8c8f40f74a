//! Test data seeding.
//!
//! A [`plan::SeedsPlan`] says how much data to create, the
//! [`builder::SeedsBuilder`] creates it through the gateway, and the resulting
//! ids are dumped to JSON so load scenarios can reuse them.

pub mod builder;
pub mod dumps;
pub mod plan;
pub mod result;
pub mod scenario;
pub mod scenarios;

pub use builder::{
    SeedsBuilder, build_grpc_seeds_builder, build_http_seeds_builder, build_seeds_builder,
};
pub use plan::SeedsPlan;
pub use result::SeedsResult;
pub use scenario::SeedsScenario;
