//! gRPC version of the get-accounts scenario.

use std::sync::Arc;

use async_trait::async_trait;

use crate::clients::grpc::convert::required;
use crate::error::ClientError;
use crate::load::clients::GatewayGrpcClients;
use crate::load::environment::Environment;
use crate::load::task_set::TaskSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrpcGetAccountsTask {
    CreateUser,
    OpenDepositAccount,
    GetAccounts,
}

const TASKS: &[(GrpcGetAccountsTask, u32)] = &[
    (GrpcGetAccountsTask::CreateUser, 2),
    (GrpcGetAccountsTask::OpenDepositAccount, 2),
    (GrpcGetAccountsTask::GetAccounts, 6),
];

pub struct GrpcGetAccountsTaskSet {
    clients: GatewayGrpcClients,
    user_id: Option<String>,
}

#[async_trait]
impl TaskSet for GrpcGetAccountsTaskSet {
    type Task = GrpcGetAccountsTask;

    fn tasks() -> &'static [(GrpcGetAccountsTask, u32)] {
        TASKS
    }

    fn setup(environment: Arc<Environment>) -> Result<Self, ClientError> {
        Ok(Self {
            clients: GatewayGrpcClients::build(&environment)?,
            user_id: None,
        })
    }

    async fn run(&mut self, task: GrpcGetAccountsTask) -> Result<(), ClientError> {
        match task {
            GrpcGetAccountsTask::CreateUser => {
                let response = self.clients.users.create_user().await?;
                self.user_id = Some(required(response.user, "user")?.id);
            }
            GrpcGetAccountsTask::OpenDepositAccount => {
                if let Some(user_id) = &self.user_id {
                    self.clients.accounts.open_deposit_account(user_id).await?;
                }
            }
            GrpcGetAccountsTask::GetAccounts => {
                if let Some(user_id) = &self.user_id {
                    self.clients.accounts.get_accounts(user_id).await?;
                }
            }
        }
        Ok(())
    }
}
