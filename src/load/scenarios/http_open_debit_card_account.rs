//! Create a user once, then keep opening debit card accounts for it.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ClientError;
use crate::load::clients::GatewayHttpClients;
use crate::load::environment::Environment;
use crate::load::task_set::TaskSet;
use crate::models::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenDebitCardAccountTask {
    OpenDebitCardAccount,
}

const TASKS: &[(OpenDebitCardAccountTask, u32)] =
    &[(OpenDebitCardAccountTask::OpenDebitCardAccount, 1)];

pub struct OpenDebitCardAccountTaskSet {
    clients: GatewayHttpClients,
    user: Option<User>,
}

#[async_trait]
impl TaskSet for OpenDebitCardAccountTaskSet {
    type Task = OpenDebitCardAccountTask;

    fn tasks() -> &'static [(OpenDebitCardAccountTask, u32)] {
        TASKS
    }

    fn setup(environment: Arc<Environment>) -> Result<Self, ClientError> {
        Ok(Self {
            clients: GatewayHttpClients::build(&environment)?,
            user: None,
        })
    }

    async fn on_start(&mut self) -> Result<(), ClientError> {
        self.user = Some(self.clients.users.create_user().await?.user);
        Ok(())
    }

    async fn run(&mut self, task: OpenDebitCardAccountTask) -> Result<(), ClientError> {
        let Some(user) = &self.user else {
            return Ok(());
        };

        match task {
            OpenDebitCardAccountTask::OpenDebitCardAccount => {
                self.clients
                    .accounts
                    .open_debit_card_account(&user.id)
                    .await?;
            }
        }
        Ok(())
    }
}
