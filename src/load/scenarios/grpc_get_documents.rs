//! Sequential gRPC scenario: create a user, open a savings account, read its
//! tariff and contract documents.
//!
//! Each step needs the previous one to have succeeded in the same pass and is
//! skipped otherwise.

use std::sync::Arc;

use async_trait::async_trait;

use crate::clients::grpc::convert::required;
use crate::error::ClientError;
use crate::load::clients::GatewayGrpcClients;
use crate::load::environment::Environment;
use crate::load::task_set::{Schedule, TaskSet};
use crate::proto::{Account, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GetDocumentsTask {
    CreateUser,
    OpenSavingsAccount,
    GetDocuments,
}

const TASKS: &[(GetDocumentsTask, u32)] = &[
    (GetDocumentsTask::CreateUser, 1),
    (GetDocumentsTask::OpenSavingsAccount, 1),
    (GetDocumentsTask::GetDocuments, 1),
];

pub struct GetDocumentsSequentialTaskSet {
    clients: GatewayGrpcClients,
    user: Option<User>,
    savings_account: Option<Account>,
}

#[async_trait]
impl TaskSet for GetDocumentsSequentialTaskSet {
    type Task = GetDocumentsTask;

    fn tasks() -> &'static [(GetDocumentsTask, u32)] {
        TASKS
    }

    fn schedule() -> Schedule {
        Schedule::Sequential
    }

    fn setup(environment: Arc<Environment>) -> Result<Self, ClientError> {
        Ok(Self {
            clients: GatewayGrpcClients::build(&environment)?,
            user: None,
            savings_account: None,
        })
    }

    async fn run(&mut self, task: GetDocumentsTask) -> Result<(), ClientError> {
        match task {
            GetDocumentsTask::CreateUser => {
                self.user = None;
                self.savings_account = None;
                let response = self.clients.users.create_user().await?;
                self.user = Some(required(response.user, "user")?);
            }
            GetDocumentsTask::OpenSavingsAccount => {
                let Some(user) = &self.user else {
                    return Ok(());
                };
                let response = self.clients.accounts.open_savings_account(&user.id).await?;
                self.savings_account = Some(required(response.account, "account")?);
            }
            GetDocumentsTask::GetDocuments => {
                let Some(account) = &self.savings_account else {
                    return Ok(());
                };
                self.clients
                    .documents
                    .get_tariff_document(&account.id)
                    .await?;
                self.clients
                    .documents
                    .get_contract_document(&account.id)
                    .await?;
            }
        }
        Ok(())
    }
}
