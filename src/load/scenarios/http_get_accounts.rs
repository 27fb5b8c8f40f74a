//! Users are created as part of the load; account tasks wait for the first one.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ClientError;
use crate::load::clients::GatewayHttpClients;
use crate::load::environment::Environment;
use crate::load::task_set::TaskSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GetAccountsTask {
    CreateUser,
    OpenDepositAccount,
    GetAccounts,
}

const TASKS: &[(GetAccountsTask, u32)] = &[
    (GetAccountsTask::CreateUser, 2),
    (GetAccountsTask::OpenDepositAccount, 2),
    (GetAccountsTask::GetAccounts, 6),
];

pub struct GetAccountsTaskSet {
    clients: GatewayHttpClients,
    user_id: Option<String>,
}

#[async_trait]
impl TaskSet for GetAccountsTaskSet {
    type Task = GetAccountsTask;

    fn tasks() -> &'static [(GetAccountsTask, u32)] {
        TASKS
    }

    fn setup(environment: Arc<Environment>) -> Result<Self, ClientError> {
        Ok(Self {
            clients: GatewayHttpClients::build(&environment)?,
            user_id: None,
        })
    }

    async fn run(&mut self, task: GetAccountsTask) -> Result<(), ClientError> {
        match task {
            GetAccountsTask::CreateUser => {
                let response = self.clients.users.create_user().await?;
                self.user_id = Some(response.user.id);
            }
            GetAccountsTask::OpenDepositAccount => {
                if let Some(user_id) = &self.user_id {
                    self.clients.accounts.open_deposit_account(user_id).await?;
                }
            }
            GetAccountsTask::GetAccounts => {
                if let Some(user_id) = &self.user_id {
                    self.clients.accounts.get_accounts(user_id).await?;
                }
            }
        }
        Ok(())
    }
}
