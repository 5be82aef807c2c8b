//! Property-based tests for the loyalty ledger.
//!
//! Invariants tested:
//! - No sequence of awards and redemptions ever drives a balance below zero
//! - A rejected operation leaves every balance unchanged
//! - Balances always match a plain in-memory model of the ledger
//! - Only the owner can credit points

use std::collections::HashMap;

use loyalty::{ContractError, LoyaltyContract, LoyaltyContractClient};
use proptest::prelude::*;
use proptest_derive::Arbitrary;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

const ACCOUNTS: usize = 3;

/// One step against the ledger. `account` indexes into a fixed set of
/// customers; amounts include negatives so rejection paths are exercised.
#[derive(Arbitrary, Clone, Debug)]
enum LedgerOp {
    Award {
        #[proptest(strategy = "0usize..ACCOUNTS")]
        account: usize,
        #[proptest(strategy = "-50i128..1_000i128")]
        amount: i128,
    },
    Redeem {
        #[proptest(strategy = "0usize..ACCOUNTS")]
        account: usize,
        #[proptest(strategy = "-50i128..1_000i128")]
        amount: i128,
    },
    StrangerAward {
        #[proptest(strategy = "0usize..ACCOUNTS")]
        account: usize,
        #[proptest(strategy = "0i128..1_000i128")]
        amount: i128,
    },
}

// ── Helpers ───────────────────────────────────────────────────────────────────

struct Ledger {
    client: LoyaltyContractClient<'static>,
    owner: Address,
    stranger: Address,
    accounts: Vec<Address>,
}

fn setup() -> Ledger {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let contract_id = env.register(LoyaltyContract, (owner.clone(),));
    let client = LoyaltyContractClient::new(&env, &contract_id);

    let stranger = Address::generate(&env);
    let accounts = (0..ACCOUNTS).map(|_| Address::generate(&env)).collect();

    Ledger {
        client,
        owner,
        stranger,
        accounts,
    }
}

/// Expected outcome of `op` against `model`. Applies the change to `model`
/// only when the operation should succeed.
fn expected(model: &mut HashMap<usize, i128>, op: &LedgerOp) -> Result<i128, ContractError> {
    match *op {
        LedgerOp::Award { account, amount } => {
            if amount < 0 {
                return Err(ContractError::InvalidInput);
            }
            let balance = model.entry(account).or_insert(0);
            *balance += amount;
            Ok(*balance)
        }
        LedgerOp::Redeem { account, amount } => {
            if amount < 0 {
                return Err(ContractError::InvalidInput);
            }
            let balance = model.entry(account).or_insert(0);
            if amount > *balance {
                return Err(ContractError::InsufficientBalance);
            }
            *balance -= amount;
            Ok(*balance)
        }
        LedgerOp::StrangerAward { .. } => Err(ContractError::Unauthorized),
    }
}

fn apply(ledger: &Ledger, op: &LedgerOp) -> Result<i128, ContractError> {
    let result = match *op {
        LedgerOp::Award { account, amount } => {
            ledger
                .client
                .try_award_points(&ledger.owner, &ledger.accounts[account], &amount)
        }
        LedgerOp::Redeem { account, amount } => ledger
            .client
            .try_redeem_points(&ledger.accounts[account], &amount),
        LedgerOp::StrangerAward { account, amount } => {
            ledger
                .client
                .try_award_points(&ledger.stranger, &ledger.accounts[account], &amount)
        }
    };
    match result {
        Ok(Ok(balance)) => Ok(balance),
        Err(Ok(err)) => Err(err),
        other => panic!("unexpected host failure: {:?}", other),
    }
}

// ── proptest! blocks ──────────────────────────────────────────────────────────

proptest! {
    /// The ledger tracks the in-memory model step for step, and no balance
    /// is ever negative.
    #[test]
    fn prop_ledger_matches_model(ops in prop::collection::vec(any::<LedgerOp>(), 1..40)) {
        let ledger = setup();
        let mut model: HashMap<usize, i128> = HashMap::new();

        for op in &ops {
            let want = expected(&mut model, op);
            let got = apply(&ledger, op);
            prop_assert_eq!(got, want, "diverged on {:?}", op);

            for (index, account) in ledger.accounts.iter().enumerate() {
                let balance = ledger.client.get_points(account);
                prop_assert!(balance >= 0);
                prop_assert_eq!(balance, model.get(&index).copied().unwrap_or(0));
            }
        }
        prop_assert_eq!(ledger.client.get_points(&ledger.stranger), 0);
    }

    /// Redeeming more than the balance fails and changes nothing.
    #[test]
    fn prop_overdraw_is_rejected(
        awarded in 0i128..10_000i128,
        excess in 1i128..10_000i128,
    ) {
        let ledger = setup();
        let account = &ledger.accounts[0];

        ledger.client.award_points(&ledger.owner, account, &awarded);
        let result = ledger.client.try_redeem_points(account, &(awarded + excess));

        prop_assert_eq!(result, Err(Ok(ContractError::InsufficientBalance)));
        prop_assert_eq!(ledger.client.get_points(account), awarded);
    }

    /// Award then redeem of the same amount always returns to zero.
    #[test]
    fn prop_award_redeem_round_trip(amount in 0i128..i128::MAX) {
        let ledger = setup();
        let account = &ledger.accounts[1];

        prop_assert_eq!(ledger.client.award_points(&ledger.owner, account, &amount), amount);
        prop_assert_eq!(ledger.client.redeem_points(account, &amount), 0);
        prop_assert_eq!(ledger.client.get_points(account), 0);
    }
}
