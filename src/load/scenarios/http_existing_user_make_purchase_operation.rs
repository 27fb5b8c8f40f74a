//! Purchases and reads on users created by a seeding run.
//!
//! `init` runs the `existing_user_make_purchase_operation` seeding scenario
//! and keeps its result in the environment. Every virtual user then works on a
//! random seeded user: its credit card account and the physical card issued
//! for it.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ClientError;
use crate::load::clients::GatewayHttpClients;
use crate::load::environment::Environment;
use crate::load::task_set::TaskSet;
use crate::seeds::build_seeds_builder;
use crate::seeds::result::SeedUserResult;
use crate::seeds::scenario::SeedsScenario;
use crate::seeds::scenarios::ExistingUserMakePurchaseOperationSeedsScenario;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MakePurchaseOperationTask {
    MakePurchaseOperation,
    GetAccounts,
    GetOperations,
    GetOperationsSummary,
}

const TASKS: &[(MakePurchaseOperationTask, u32)] = &[
    (MakePurchaseOperationTask::MakePurchaseOperation, 1),
    (MakePurchaseOperationTask::GetAccounts, 2),
    (MakePurchaseOperationTask::GetOperations, 2),
    (MakePurchaseOperationTask::GetOperationsSummary, 2),
];

pub struct MakePurchaseOperationTaskSet {
    environment: Arc<Environment>,
    clients: GatewayHttpClients,
    seed_user: Option<SeedUserResult>,
}

impl MakePurchaseOperationTaskSet {
    fn seed_user(&self) -> Result<&SeedUserResult, ClientError> {
        self.seed_user
            .as_ref()
            .ok_or(ClientError::MissingField("seeds.users"))
    }

    /// `(account_id, card_id)` of the seeded credit card account.
    fn credit_card(&self) -> Result<(&str, &str), ClientError> {
        let account = self
            .seed_user()?
            .credit_card_accounts
            .first()
            .ok_or(ClientError::MissingField("seed_user.credit_card_accounts"))?;
        let card = account
            .physical_cards
            .first()
            .ok_or(ClientError::MissingField("credit_card_account.physical_cards"))?;

        Ok((&account.account_id, &card.card_id))
    }
}

#[async_trait]
impl TaskSet for MakePurchaseOperationTaskSet {
    type Task = MakePurchaseOperationTask;

    fn tasks() -> &'static [(MakePurchaseOperationTask, u32)] {
        TASKS
    }

    async fn init(environment: &mut Environment) -> Result<(), ClientError> {
        let seeds_scenario = ExistingUserMakePurchaseOperationSeedsScenario;
        let dumps_dir = environment.settings.seeds.dumps_dir.clone();
        let builder = build_seeds_builder(environment.seeds_transport, &environment.settings)?;

        seeds_scenario.build(&builder, &dumps_dir).await?;
        environment.set_seeds_result(seeds_scenario.load(&dumps_dir)?);
        Ok(())
    }

    fn setup(environment: Arc<Environment>) -> Result<Self, ClientError> {
        Ok(Self {
            clients: GatewayHttpClients::build(&environment)?,
            environment,
            seed_user: None,
        })
    }

    async fn on_start(&mut self) -> Result<(), ClientError> {
        self.seed_user = self.environment.random_seed_user();
        self.seed_user()?;
        Ok(())
    }

    async fn run(&mut self, task: MakePurchaseOperationTask) -> Result<(), ClientError> {
        match task {
            MakePurchaseOperationTask::MakePurchaseOperation => {
                let (account_id, card_id) = self.credit_card()?;
                self.clients
                    .operations
                    .make_purchase_operation(card_id, account_id)
                    .await?;
            }
            MakePurchaseOperationTask::GetAccounts => {
                let user_id = &self.seed_user()?.user_id;
                self.clients.accounts.get_accounts(user_id).await?;
            }
            MakePurchaseOperationTask::GetOperations => {
                let (account_id, _) = self.credit_card()?;
                self.clients.operations.get_operations(account_id).await?;
            }
            MakePurchaseOperationTask::GetOperationsSummary => {
                let (account_id, _) = self.credit_card()?;
                self.clients
                    .operations
                    .get_operations_summary(account_id)
                    .await?;
            }
        }
        Ok(())
    }
}
