//! Virtual user runner.
//!
//! Spawns virtual users at a fixed rate and stops them all once the run time
//! is over. Each user is a tokio task looping pick, run, wait.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinSet;
use tokio::time::Instant;

use super::environment::Environment;
use super::stats::SharedStats;
use super::task_set::{TaskPicker, TaskSet};
use crate::error::ClientError;

#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Number of virtual users
    pub users: usize,
    /// Users started per second
    pub spawn_rate: f64,
    pub run_time: Duration,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            users: 1,
            spawn_rate: 1.0,
            run_time: Duration::from_secs(60),
        }
    }
}

pub struct LoadRunner {
    environment: Environment,
    options: RunOptions,
}

impl LoadRunner {
    pub fn new(environment: Environment, options: RunOptions) -> Self {
        Self {
            environment,
            options,
        }
    }

    /// Run task set `T` and return the collected request stats.
    ///
    /// # Errors
    ///
    /// Only `T::init` failures abort the run; errors inside virtual users are
    /// logged.
    pub async fn run<T: TaskSet>(self) -> Result<SharedStats, ClientError> {
        let Self {
            mut environment,
            options,
        } = self;

        T::init(&mut environment).await?;

        let environment = Arc::new(environment);
        let stats = environment.stats.clone();
        let (stop_tx, stop_rx) = watch::channel(false);
        let deadline = Instant::now() + options.run_time.min(MAX_RUN_TIME);
        let spawn_interval = spawn_interval(options.spawn_rate);

        tracing::info!(
            users = options.users,
            spawn_rate = options.spawn_rate,
            run_time_secs = options.run_time.as_secs_f64(),
            "Load run started"
        );

        let mut users = JoinSet::new();
        for user_id in 0..options.users {
            if Instant::now() >= deadline {
                break;
            }
            users.spawn(virtual_user::<T>(
                user_id,
                environment.clone(),
                stop_rx.clone(),
            ));

            if user_id + 1 < options.users {
                let next_spawn = Instant::now()
                    .checked_add(spawn_interval)
                    .map_or(deadline, |next| next.min(deadline));
                tokio::time::sleep_until(next_spawn).await;
            }
        }

        tokio::time::sleep_until(deadline).await;
        stop_tx.send_replace(true);

        while let Some(joined) = users.join_next().await {
            if let Err(err) = joined {
                tracing::error!(%err, "Virtual user crashed");
            }
        }

        tracing::info!("Load run finished\n{}", stats.summary());
        Ok(stats)
    }
}

/// Longest run time honored; longer values are capped.
pub const MAX_RUN_TIME: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Pause between two user spawns. Zero, negative and NaN rates spawn every
/// user at once.
pub fn spawn_interval(spawn_rate: f64) -> Duration {
    if spawn_rate.is_nan() || spawn_rate <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(1.0 / spawn_rate).unwrap_or(MAX_RUN_TIME)
}

async fn virtual_user<T: TaskSet>(
    user_id: usize,
    environment: Arc<Environment>,
    mut stop: watch::Receiver<bool>,
) {
    let wait_time = environment.wait_time();

    let mut task_set = match T::setup(environment) {
        Ok(task_set) => task_set,
        Err(err) => {
            tracing::error!(user_id, %err, "Failed to set up virtual user");
            return;
        }
    };

    if *stop.borrow() {
        return;
    }
    let started = tokio::select! {
        result = task_set.on_start() => result,
        _ = stop.changed() => {
            tracing::debug!(user_id, "Virtual user stopped during on_start");
            return;
        }
    };
    if let Err(err) = started {
        tracing::error!(user_id, %err, "on_start failed, stopping virtual user");
        return;
    }

    let mut picker = TaskPicker::new(T::tasks(), T::schedule());
    loop {
        let stopped = *stop.borrow();
        if stopped {
            break;
        }
        let Some(task) = picker.next_task() else {
            break;
        };

        tokio::select! {
            result = task_set.run(task) => {
                if let Err(err) = result {
                    tracing::warn!(user_id, ?task, %err, "Task failed");
                }
            }
            _ = stop.changed() => break,
        }

        tokio::select! {
            _ = tokio::time::sleep(wait_time.sample()) => {}
            _ = stop.changed() => break,
        }
    }

    tracing::debug!(user_id, "Virtual user stopped");
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::config::Settings;
    use crate::load::stats::RequestEvent;

    static STARTED: AtomicUsize = AtomicUsize::new(0);

    #[derive(Debug, Clone, Copy)]
    enum PingTask {
        Ping,
    }

    const PING_TASKS: &[(PingTask, u32)] = &[(PingTask::Ping, 1)];

    struct PingTaskSet {
        environment: Arc<Environment>,
    }

    #[async_trait]
    impl TaskSet for PingTaskSet {
        type Task = PingTask;

        fn tasks() -> &'static [(PingTask, u32)] {
            PING_TASKS
        }

        fn setup(environment: Arc<Environment>) -> Result<Self, ClientError> {
            Ok(Self { environment })
        }

        async fn on_start(&mut self) -> Result<(), ClientError> {
            STARTED.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn run(&mut self, task: PingTask) -> Result<(), ClientError> {
            match task {
                PingTask::Ping => self.environment.stats.fire(RequestEvent {
                    request_type: "TEST",
                    name: "ping".to_string(),
                    response_time_ms: 1.0,
                    response_length: 4,
                    exception: None,
                }),
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn runs_every_user_until_the_run_time_is_over() {
        let mut settings = Settings::default();
        settings.locust_user.wait_time_min = 0.01;
        settings.locust_user.wait_time_max = 0.01;
        let options = RunOptions {
            users: 3,
            spawn_rate: 100.0,
            run_time: Duration::from_millis(300),
        };

        let started_at = std::time::Instant::now();
        let stats = LoadRunner::new(Environment::new(settings).unwrap(), options)
            .run::<PingTaskSet>()
            .await
            .unwrap();

        assert!(started_at.elapsed() >= Duration::from_millis(300));
        assert_eq!(STARTED.load(Ordering::SeqCst), 3);
        let entry = stats.get("ping").unwrap();
        assert!(entry.count >= 3);
        assert_eq!(entry.failures, 0);
    }

    struct SlowStartTaskSet;

    #[async_trait]
    impl TaskSet for SlowStartTaskSet {
        type Task = PingTask;

        fn tasks() -> &'static [(PingTask, u32)] {
            PING_TASKS
        }

        fn setup(_environment: Arc<Environment>) -> Result<Self, ClientError> {
            Ok(Self)
        }

        async fn on_start(&mut self) -> Result<(), ClientError> {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok(())
        }

        async fn run(&mut self, _task: PingTask) -> Result<(), ClientError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn slow_on_start_does_not_outlive_the_run_time() {
        let options = RunOptions {
            users: 2,
            spawn_rate: 100.0,
            run_time: Duration::from_millis(200),
        };

        let started_at = std::time::Instant::now();
        LoadRunner::new(Environment::new(Settings::default()).unwrap(), options)
            .run::<SlowStartTaskSet>()
            .await
            .unwrap();

        assert!(started_at.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn zero_spawn_rate_and_huge_run_time_do_not_panic() {
        let options = RunOptions {
            users: 1,
            spawn_rate: 0.0,
            run_time: Duration::MAX,
        };
        let environment = Environment::new(Settings::default()).unwrap();

        let run = LoadRunner::new(environment, options).run::<SlowStartTaskSet>();
        let timed_out = tokio::time::timeout(Duration::from_millis(100), run).await;

        assert!(timed_out.is_err());
    }

    #[test]
    fn spawn_interval_handles_edge_rates() {
        assert_eq!(spawn_interval(0.0), Duration::ZERO);
        assert_eq!(spawn_interval(-3.0), Duration::ZERO);
        assert_eq!(spawn_interval(f64::NAN), Duration::ZERO);
        assert_eq!(spawn_interval(f64::INFINITY), Duration::ZERO);
        assert_eq!(spawn_interval(4.0), Duration::from_millis(250));
        assert_eq!(spawn_interval(1e-300), MAX_RUN_TIME);
    }
}
