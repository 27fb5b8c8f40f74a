//! Gateway Load - command line entry point.
//!
//! # Commands
//!
//! - `seed <scenario>`: create test data through the gateway and dump it to JSON
//! - `load <scenario>`: run virtual users against the gateway and print stats
//! - `mock-gateway`: serve the in-memory gateway over REST and gRPC
//! - `demo`: create a user over HTTP and read it back
//!
//! # Startup Flow
//!
//! 1. Initialize logging (`RUST_LOG`, defaults to "info")
//! 2. Load settings from environment variables and `.env`
//! 3. Dispatch the subcommand

use std::net::SocketAddr;
use std::time::Duration;

use bank_gateway_load::{
    clients::{Transport, http::build_users_gateway_http_client},
    config::Settings,
    load::{Environment, LoadRunner, LoadScenarioName, RunOptions, runner::MAX_RUN_TIME},
    seeds::{build_seeds_builder, scenarios::SeedsScenarioName},
    server,
    store::GatewayStore,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "gateway-load", about = "Banking gateway clients, seeding and load runs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run a seeding scenario and save its result
    Seed {
        #[arg(value_enum)]
        scenario: SeedsScenarioName,

        #[arg(long, value_enum, default_value_t = Transport::Grpc)]
        transport: Transport,
    },
    /// Run a load scenario and print the request stats
    Load {
        #[arg(value_enum)]
        scenario: LoadScenarioName,

        #[arg(long, default_value_t = 1)]
        users: usize,

        /// Users started per second
        #[arg(long, default_value_t = 1.0, value_parser = parse_spawn_rate)]
        spawn_rate: f64,

        /// Run time in seconds
        #[arg(
            long,
            default_value_t = 60,
            value_parser = clap::value_parser!(u64).range(1..=MAX_RUN_TIME.as_secs())
        )]
        run_time: u64,

        /// Transport used when the scenario seeds its own data
        #[arg(long, value_enum, default_value_t = Transport::Grpc)]
        seeds_transport: Transport,
    },
    /// Serve the in-memory gateway over REST and gRPC
    MockGateway {
        #[arg(long, default_value_t = 8003)]
        port: u16,

        #[arg(long, default_value_t = 9003)]
        grpc_port: u16,
    },
    /// Create a user over HTTP and read it back
    Demo,
}

fn parse_spawn_rate(value: &str) -> Result<f64, String> {
    let rate: f64 = value.parse().map_err(|e| format!("{e}"))?;
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(format!("spawn rate must be a positive number, got {value}"))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    let settings = Settings::from_env()?;
    tracing::info!("Configuration loaded");

    match cli.command {
        Command::Seed {
            scenario,
            transport,
        } => {
            let builder = build_seeds_builder(transport, &settings)?;
            let scenario = scenario.scenario();
            let result = scenario.build(&builder, &settings.seeds.dumps_dir).await?;

            tracing::info!(
                scenario = scenario.scenario(),
                users = result.users.len(),
                "Seeds saved"
            );
        }
        Command::Load {
            scenario,
            users,
            spawn_rate,
            run_time,
            seeds_transport,
        } => {
            let environment = Environment::new(settings)?.with_seeds_transport(seeds_transport);
            let options = RunOptions {
                users,
                spawn_rate,
                run_time: Duration::from_secs(run_time),
            };

            let stats = scenario
                .run(LoadRunner::new(environment, options))
                .await?;
            println!("{}", stats.summary());
        }
        Command::MockGateway { port, grpc_port } => {
            let addr = format!("0.0.0.0:{}", port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            let grpc_addr = SocketAddr::from(([0, 0, 0, 0], grpc_port));
            let store = GatewayStore::new();
            let http_store = store.clone();

            tokio::try_join!(
                async { Ok::<_, anyhow::Error>(server::serve_store(listener, http_store).await?) },
                async { Ok::<_, anyhow::Error>(server::serve_grpc(grpc_addr, store).await?) },
            )?;
        }
        Command::Demo => {
            let client = build_users_gateway_http_client(&settings.gateway_http_client)?;

            let created = client.create_user().await?;
            println!("{}", serde_json::to_string_pretty(&created)?);

            let fetched = client.get_user(&created.user.id).await?;
            println!("{}", serde_json::to_string_pretty(&fetched)?);
        }
    }

    Ok(())
}
