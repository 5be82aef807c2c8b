use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the owner is configured.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub timestamp: u64,
}

/// Fired when the owner credits an account.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PointsAwardedEvent {
    pub account: Address,
    pub amount: i128,
    pub new_balance: i128,
    pub timestamp: u64,
}

/// Fired when an account spends its own points.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PointsRedeemedEvent {
    pub account: Address,
    pub amount: i128,
    pub new_balance: i128,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, owner: Address) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        owner,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_points_awarded(env: &Env, account: Address, amount: i128, new_balance: i128) {
    let topics = (symbol_short!("PTS_AWD"), account.clone());
    let data = PointsAwardedEvent {
        account,
        amount,
        new_balance,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_points_redeemed(env: &Env, account: Address, amount: i128, new_balance: i128) {
    let topics = (symbol_short!("PTS_RDM"), account.clone());
    let data = PointsRedeemedEvent {
        account,
        amount,
        new_balance,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
