//! Short load runs against the mock gateway.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::time::Duration;

use bank_gateway_load::{
    clients::Transport,
    load::{Environment, LoadRunner, LoadScenarioName, RunOptions},
};
use common::{settings_for, spawn_gateway};

fn short_run(users: usize) -> RunOptions {
    RunOptions {
        users,
        spawn_rate: 100.0,
        run_time: Duration::from_millis(500),
    }
}

// ============================================================================
// HTTP scenarios
// ============================================================================

#[tokio::test]
async fn get_user_scenario_records_requests() {
    let settings = settings_for(spawn_gateway().await);
    let runner = LoadRunner::new(Environment::new(settings).unwrap(), short_run(2));

    let stats = LoadScenarioName::HttpGetUser.run(runner).await.unwrap();

    let created = stats.get("POST /api/v1/users").unwrap();
    assert_eq!(created.count, 2);
    assert_eq!(created.failures, 0);

    let reads = stats.get("GET /api/v1/users/{user_id}").unwrap();
    assert!(reads.count > 0);
    assert_eq!(reads.failures, 0);
}

#[tokio::test]
async fn get_accounts_scenario_runs_without_failures() {
    let settings = settings_for(spawn_gateway().await);
    let runner = LoadRunner::new(Environment::new(settings).unwrap(), short_run(3));

    let stats = LoadScenarioName::HttpGetAccounts.run(runner).await.unwrap();

    let total = stats.total();
    assert!(total.count > 0);
    assert_eq!(total.failures, 0);
}

#[tokio::test]
async fn make_purchase_scenario_seeds_then_loads() {
    let mut settings = settings_for(spawn_gateway().await);
    let dumps = tempfile::tempdir().unwrap();
    settings.seeds.dumps_dir = dumps.path().to_path_buf();

    let environment = Environment::new(settings).unwrap().with_seeds_transport(Transport::Http);
    let runner = LoadRunner::new(environment, short_run(2));

    let stats = LoadScenarioName::HttpExistingUserMakePurchaseOperation
        .run(runner)
        .await
        .unwrap();

    assert!(
        dumps
            .path()
            .join("existing_user_make_purchase_operation.json")
            .exists()
    );
    let total = stats.total();
    assert!(total.count > 0);
    assert_eq!(total.failures, 0);
}

#[tokio::test]
async fn unreachable_gateway_counts_failures() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut settings = settings_for(addr);
    settings.gateway_http_client.timeout = 1.0;
    let runner = LoadRunner::new(Environment::new(settings).unwrap(), short_run(1));

    let stats = LoadScenarioName::HttpGetUser.run(runner).await.unwrap();

    let created = stats.get("POST /api/v1/users").unwrap();
    assert_eq!(created.count, 1);
    assert_eq!(created.failures, 1);
    assert!(stats.get("GET /api/v1/users/{user_id}").is_none());
}
