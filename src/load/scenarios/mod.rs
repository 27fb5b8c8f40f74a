//! Load scenarios.

use clap::ValueEnum;

use super::runner::LoadRunner;
use super::stats::SharedStats;
use crate::error::ClientError;

pub mod grpc_get_accounts;
pub mod grpc_get_documents;
pub mod http_existing_user_make_purchase_operation;
pub mod http_get_accounts;
pub mod http_get_user;
pub mod http_open_debit_card_account;

/// Load scenarios selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LoadScenarioName {
    HttpGetUser,
    HttpOpenDebitCardAccount,
    HttpGetAccounts,
    HttpExistingUserMakePurchaseOperation,
    GrpcGetAccounts,
    GrpcGetDocuments,
}

impl LoadScenarioName {
    pub async fn run(self, runner: LoadRunner) -> Result<SharedStats, ClientError> {
        match self {
            Self::HttpGetUser => runner.run::<http_get_user::GetUserTaskSet>().await,
            Self::HttpOpenDebitCardAccount => {
                runner
                    .run::<http_open_debit_card_account::OpenDebitCardAccountTaskSet>()
                    .await
            }
            Self::HttpGetAccounts => runner.run::<http_get_accounts::GetAccountsTaskSet>().await,
            Self::HttpExistingUserMakePurchaseOperation => {
                runner
                    .run::<http_existing_user_make_purchase_operation::MakePurchaseOperationTaskSet>()
                    .await
            }
            Self::GrpcGetAccounts => {
                runner
                    .run::<grpc_get_accounts::GrpcGetAccountsTaskSet>()
                    .await
            }
            Self::GrpcGetDocuments => {
                runner
                    .run::<grpc_get_documents::GetDocumentsSequentialTaskSet>()
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::task_set::{Schedule, TaskSet};

    #[test]
    fn scenario_names_are_kebab_case() {
        let value = LoadScenarioName::HttpExistingUserMakePurchaseOperation
            .to_possible_value()
            .unwrap();
        assert_eq!(value.get_name(), "http-existing-user-make-purchase-operation");

        let value = LoadScenarioName::from_str("grpc-get-documents", false).unwrap();
        assert_eq!(value, LoadScenarioName::GrpcGetDocuments);
    }

    #[test]
    fn get_accounts_weights() {
        let weights: Vec<u32> = http_get_accounts::GetAccountsTaskSet::tasks()
            .iter()
            .map(|(_, weight)| *weight)
            .collect();
        assert_eq!(weights, vec![2, 2, 6]);
        assert_eq!(
            grpc_get_accounts::GrpcGetAccountsTaskSet::tasks().len(),
            3
        );
    }

    #[test]
    fn get_documents_runs_in_order() {
        use grpc_get_documents::{GetDocumentsSequentialTaskSet, GetDocumentsTask};

        assert_eq!(GetDocumentsSequentialTaskSet::schedule(), Schedule::Sequential);
        let order: Vec<_> = GetDocumentsSequentialTaskSet::tasks()
            .iter()
            .map(|(task, _)| *task)
            .collect();
        assert_eq!(
            order,
            vec![
                GetDocumentsTask::CreateUser,
                GetDocumentsTask::OpenSavingsAccount,
                GetDocumentsTask::GetDocuments
            ]
        );
    }
}
