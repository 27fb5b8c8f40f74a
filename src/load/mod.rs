//! Load testing.
//!
//! A minimal virtual-user engine: task sets with weighted or sequential
//! schedules, a runner spawning users as tokio tasks, and per-request stats
//! fed by the instrumented gateway clients.

pub mod clients;
pub mod environment;
pub mod runner;
pub mod scenarios;
pub mod stats;
pub mod task_set;
pub mod wait;

pub use clients::{GatewayGrpcClients, GatewayHttpClients};
pub use environment::Environment;
pub use runner::{LoadRunner, RunOptions};
pub use scenarios::LoadScenarioName;
pub use stats::{RequestEvent, RequestStats, SharedStats};
pub use task_set::{Schedule, TaskSet};
pub use wait::WaitTime;
