//! Seeding through the HTTP gateway clients.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use bank_gateway_load::{
    clients::{
        AccountsGateway, OperationsGateway, Transport,
        http::{build_accounts_gateway_http_client, build_operations_gateway_http_client},
    },
    seeds::{
        SeedsScenario, build_http_seeds_builder, build_seeds_builder,
        dumps::dump_path,
        plan::{SeedAccountsPlan, SeedCardsPlan, SeedOperationsPlan, SeedUsersPlan, SeedsPlan},
    },
};
use common::{settings_for, spawn_gateway};

// ============================================================================
// Plans
// ============================================================================

fn full_plan() -> SeedsPlan {
    SeedsPlan {
        users: SeedUsersPlan {
            count: 2,
            deposit_accounts: SeedAccountsPlan {
                count: 1,
                ..Default::default()
            },
            savings_accounts: SeedAccountsPlan {
                count: 1,
                ..Default::default()
            },
            debit_card_accounts: SeedAccountsPlan {
                count: 1,
                virtual_cards: SeedCardsPlan { count: 1 },
                top_up_operations: SeedOperationsPlan { count: 2 },
                transfer_operations: SeedOperationsPlan { count: 1 },
                ..Default::default()
            },
            credit_card_accounts: SeedAccountsPlan {
                count: 2,
                physical_cards: SeedCardsPlan { count: 1 },
                purchase_operations: SeedOperationsPlan { count: 3 },
                cash_withdrawal_operations: SeedOperationsPlan { count: 1 },
                ..Default::default()
            },
        },
    }
}

/// Small plan saved under its own dump name.
struct TinySeedsScenario;

impl SeedsScenario for TinySeedsScenario {
    fn plan(&self) -> SeedsPlan {
        SeedsPlan {
            users: SeedUsersPlan {
                count: 3,
                debit_card_accounts: SeedAccountsPlan {
                    count: 1,
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    }

    fn scenario(&self) -> &'static str {
        "tiny"
    }
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn builder_creates_everything_the_plan_asks_for() {
    let settings = settings_for(spawn_gateway().await);
    let builder = build_http_seeds_builder(&settings).unwrap();

    let result = builder.build(&full_plan()).await.unwrap();

    assert_eq!(result.users.len(), 2);
    for user in &result.users {
        assert_eq!(user.deposit_accounts.len(), 1);
        assert_eq!(user.savings_accounts.len(), 1);
        assert_eq!(user.debit_card_accounts.len(), 1);
        assert_eq!(user.credit_card_accounts.len(), 2);

        let debit = &user.debit_card_accounts[0];
        assert_eq!(debit.virtual_cards.len(), 1);
        assert_eq!(debit.top_up_operations.len(), 2);
        assert_eq!(debit.transfer_operations.len(), 1);
        assert!(debit.purchase_operations.is_empty());

        for credit in &user.credit_card_accounts {
            assert_eq!(credit.physical_cards.len(), 1);
            assert_eq!(credit.purchase_operations.len(), 3);
            assert_eq!(credit.cash_withdrawal_operations.len(), 1);
        }
    }
}

#[tokio::test]
async fn seeded_ids_exist_on_the_gateway() {
    let settings = settings_for(spawn_gateway().await);
    let builder = build_seeds_builder(Transport::Http, &settings).unwrap();
    let accounts = build_accounts_gateway_http_client(&settings.gateway_http_client).unwrap();
    let operations = build_operations_gateway_http_client(&settings.gateway_http_client).unwrap();

    let result = builder.build(&full_plan()).await.unwrap();
    let user = &result.users[0];

    let listed = AccountsGateway::get_accounts(&accounts, &user.user_id)
        .await
        .unwrap();
    assert_eq!(listed.len(), 5);

    let credit = &user.credit_card_accounts[0];
    let recorded = OperationsGateway::get_operations(&operations, &credit.account_id)
        .await
        .unwrap();
    assert_eq!(recorded.len(), 4);

    let purchase_id = &credit.purchase_operations[0].operation_id;
    let purchase = OperationsGateway::get_operation(&operations, purchase_id)
        .await
        .unwrap();
    assert_eq!(purchase.account_id, credit.account_id);
}

#[tokio::test]
async fn scenario_build_saves_a_loadable_dump() {
    let settings = settings_for(spawn_gateway().await);
    let builder = build_http_seeds_builder(&settings).unwrap();
    let dumps = tempfile::tempdir().unwrap();

    let built = TinySeedsScenario.build(&builder, dumps.path()).await.unwrap();

    assert!(dump_path("tiny", dumps.path()).exists());
    let loaded = TinySeedsScenario.load(dumps.path()).unwrap();
    assert_eq!(loaded, built);
    assert_eq!(loaded.users.len(), 3);
}
