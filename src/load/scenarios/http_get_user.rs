//! Create a user once, then keep reading it back.

use std::sync::Arc;

use async_trait::async_trait;

use crate::clients::http::UsersGatewayHttpClient;
use crate::error::ClientError;
use crate::load::clients::GatewayHttpClients;
use crate::load::environment::Environment;
use crate::load::task_set::TaskSet;
use crate::models::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GetUserTask {
    GetUser,
}

const TASKS: &[(GetUserTask, u32)] = &[(GetUserTask::GetUser, 1)];

pub struct GetUserTaskSet {
    users: UsersGatewayHttpClient,
    user: Option<User>,
}

#[async_trait]
impl TaskSet for GetUserTaskSet {
    type Task = GetUserTask;

    fn tasks() -> &'static [(GetUserTask, u32)] {
        TASKS
    }

    fn setup(environment: Arc<Environment>) -> Result<Self, ClientError> {
        Ok(Self {
            users: GatewayHttpClients::build(&environment)?.users,
            user: None,
        })
    }

    async fn on_start(&mut self) -> Result<(), ClientError> {
        self.user = Some(self.users.create_user().await?.user);
        Ok(())
    }

    async fn run(&mut self, task: GetUserTask) -> Result<(), ClientError> {
        let Some(user) = &self.user else {
            return Ok(());
        };

        match task {
            GetUserTask::GetUser => {
                self.users.get_user(&user.id).await?;
            }
        }
        Ok(())
    }
}
