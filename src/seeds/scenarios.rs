//! Seeding scenarios used by the load scenarios.

use clap::ValueEnum;

use super::plan::{SeedAccountsPlan, SeedCardsPlan, SeedOperationsPlan, SeedUsersPlan, SeedsPlan};
use super::scenario::SeedsScenario;

/// 100 users, each with a savings and a debit card account.
pub struct ExistingUserGetDocumentsSeedsScenario;

impl SeedsScenario for ExistingUserGetDocumentsSeedsScenario {
    fn plan(&self) -> SeedsPlan {
        SeedsPlan {
            users: SeedUsersPlan {
                count: 100,
                savings_accounts: SeedAccountsPlan {
                    count: 1,
                    ..Default::default()
                },
                debit_card_accounts: SeedAccountsPlan {
                    count: 1,
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    }

    fn scenario(&self) -> &'static str {
        "existing_user_get_documents"
    }
}

/// 300 users with a credit card account holding a few operations.
pub struct ExistingUserGetOperationsSeedsScenario;

impl SeedsScenario for ExistingUserGetOperationsSeedsScenario {
    fn plan(&self) -> SeedsPlan {
        SeedsPlan {
            users: SeedUsersPlan {
                count: 300,
                credit_card_accounts: SeedAccountsPlan {
                    count: 1,
                    purchase_operations: SeedOperationsPlan { count: 5 },
                    top_up_operations: SeedOperationsPlan { count: 1 },
                    cash_withdrawal_operations: SeedOperationsPlan { count: 1 },
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    }

    fn scenario(&self) -> &'static str {
        "existing_user_get_operations"
    }
}

/// 300 users with a debit card account.
pub struct ExistingUserIssueVirtualCardSeedsScenario;

impl SeedsScenario for ExistingUserIssueVirtualCardSeedsScenario {
    fn plan(&self) -> SeedsPlan {
        SeedsPlan {
            users: SeedUsersPlan {
                count: 300,
                debit_card_accounts: SeedAccountsPlan {
                    count: 1,
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    }

    fn scenario(&self) -> &'static str {
        "existing_user_issue_virtual_card"
    }
}

/// 300 users with a credit card account and a physical card.
pub struct ExistingUserMakePurchaseOperationSeedsScenario;

impl SeedsScenario for ExistingUserMakePurchaseOperationSeedsScenario {
    fn plan(&self) -> SeedsPlan {
        SeedsPlan {
            users: SeedUsersPlan {
                count: 300,
                credit_card_accounts: SeedAccountsPlan {
                    count: 1,
                    physical_cards: SeedCardsPlan { count: 1 },
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    }

    fn scenario(&self) -> &'static str {
        "existing_user_make_purchase_operation"
    }
}

/// Seeding scenarios selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum SeedsScenarioName {
    ExistingUserGetDocuments,
    ExistingUserGetOperations,
    ExistingUserIssueVirtualCard,
    ExistingUserMakePurchaseOperation,
}

impl SeedsScenarioName {
    pub fn scenario(self) -> Box<dyn SeedsScenario> {
        match self {
            Self::ExistingUserGetDocuments => Box::new(ExistingUserGetDocumentsSeedsScenario),
            Self::ExistingUserGetOperations => Box::new(ExistingUserGetOperationsSeedsScenario),
            Self::ExistingUserIssueVirtualCard => {
                Box::new(ExistingUserIssueVirtualCardSeedsScenario)
            }
            Self::ExistingUserMakePurchaseOperation => {
                Box::new(ExistingUserMakePurchaseOperationSeedsScenario)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_dump_files() {
        for name in SeedsScenarioName::value_variants() {
            let value = name.to_possible_value().unwrap();
            assert_eq!(value.get_name(), name.scenario().scenario());
        }
    }

    #[test]
    fn get_operations_plan_counts() {
        let plan = ExistingUserGetOperationsSeedsScenario.plan();
        let accounts = &plan.users.credit_card_accounts;

        assert_eq!(plan.users.count, 300);
        assert_eq!(accounts.count, 1);
        assert_eq!(accounts.purchase_operations.count, 5);
        assert_eq!(accounts.top_up_operations.count, 1);
        assert_eq!(accounts.cash_withdrawal_operations.count, 1);
        assert_eq!(accounts.transfer_operations.count, 0);
    }

    #[test]
    fn get_documents_plan_opens_savings_and_debit_accounts() {
        let plan = ExistingUserGetDocumentsSeedsScenario.plan();

        assert_eq!(plan.users.count, 100);
        assert_eq!(plan.users.savings_accounts.count, 1);
        assert_eq!(plan.users.debit_card_accounts.count, 1);
        assert_eq!(plan.users.credit_card_accounts.count, 0);
    }
}
