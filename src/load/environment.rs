//! Shared state of a load run.

use std::sync::Mutex;

use super::stats::{RequestStats, SharedStats};
use super::wait::WaitTime;
use crate::clients::Transport;
use crate::config::Settings;
use crate::error::ClientError;
use crate::seeds::result::{SeedUserResult, SeedsResult};

/// Settings, request stats and seeded data shared by every virtual user.
#[derive(Debug)]
pub struct Environment {
    pub settings: Settings,
    pub stats: SharedStats,
    /// Transport used when a scenario seeds data in `init`.
    pub seeds_transport: Transport,
    seeds: Option<Mutex<SeedsResult>>,
}

impl Environment {
    /// # Errors
    ///
    /// Fails when the request metrics cannot be registered.
    pub fn new(settings: Settings) -> Result<Self, ClientError> {
        Ok(Self {
            settings,
            stats: RequestStats::new()?,
            seeds_transport: Transport::default(),
            seeds: None,
        })
    }

    pub fn with_seeds_transport(mut self, transport: Transport) -> Self {
        self.seeds_transport = transport;
        self
    }

    pub fn set_seeds_result(&mut self, result: SeedsResult) {
        self.seeds = Some(Mutex::new(result));
    }

    pub fn wait_time(&self) -> WaitTime {
        WaitTime::between(
            self.settings.locust_user.wait_time_min,
            self.settings.locust_user.wait_time_max,
        )
    }

    /// Random seeded user; `None` without seeds or when no users were seeded.
    pub fn random_seed_user(&self) -> Option<SeedUserResult> {
        let seeds = self.seeds.as_ref()?;
        let seeds = seeds.lock().unwrap_or_else(|e| e.into_inner());
        seeds.get_random_user()
    }

    /// Take the next seeded user so no other virtual user gets it.
    pub fn next_seed_user(&self) -> Option<SeedUserResult> {
        let seeds = self.seeds.as_ref()?;
        let mut seeds = seeds.lock().unwrap_or_else(|e| e.into_inner());
        seeds.get_next_user()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(ids: &[&str]) -> Environment {
        let mut environment = Environment::new(Settings::default()).unwrap();
        environment.set_seeds_result(SeedsResult {
            users: ids
                .iter()
                .map(|id| SeedUserResult {
                    user_id: id.to_string(),
                    deposit_accounts: Vec::new(),
                    savings_accounts: Vec::new(),
                    debit_card_accounts: Vec::new(),
                    credit_card_accounts: Vec::new(),
                })
                .collect(),
        });
        environment
    }

    #[test]
    fn without_seeds_there_are_no_users() {
        let environment = Environment::new(Settings::default()).unwrap();

        assert!(environment.random_seed_user().is_none());
        assert!(environment.next_seed_user().is_none());
    }

    #[test]
    fn next_seed_user_hands_out_each_user_once() {
        let environment = seeded(&["u1", "u2"]);

        assert_eq!(environment.next_seed_user().unwrap().user_id, "u1");
        assert_eq!(environment.next_seed_user().unwrap().user_id, "u2");
        assert!(environment.next_seed_user().is_none());
    }

    #[test]
    fn wait_time_follows_settings() {
        let mut settings = Settings::default();
        settings.locust_user.wait_time_min = 0.5;
        settings.locust_user.wait_time_max = 0.5;

        let environment = Environment::new(settings).unwrap();
        assert_eq!(environment.wait_time(), WaitTime::constant(0.5));
    }
}
