#![no_std]

pub mod errors;
pub mod events;

use common::{ttl, validation};
use soroban_sdk::{contract, contractimpl, log, symbol_short, Address, Env, Symbol};

pub use errors::ContractError;

// ── Storage key constants ────────────────────────────────────────────────────

const OWNER: Symbol = symbol_short!("OWNER");

// Per-account persistent storage uses tuple keys:  (prefix, account_address)
const POINTS: Symbol = symbol_short!("POINTS");

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct LoyaltyContract;

#[contractimpl]
impl LoyaltyContract {
    // ── Construction ────────────────────────────────────────────────────────

    /// Runs once, atomically with deployment. The owner is the only identity
    /// that may award points and cannot be changed afterwards.
    pub fn __constructor(env: Env, owner: Address) {
        env.storage().instance().set(&OWNER, &owner);
        ttl::extend_instance(&env);

        events::publish_initialized(&env, owner);
    }

    /// Get the owner address
    pub fn get_owner(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&OWNER)
            .ok_or(ContractError::NotInitialized)
    }

    // ── Balance transitions ─────────────────────────────────────────────────

    /// Credit `amount` points to `account`. Owner only.
    ///
    /// Returns the account's new balance.
    pub fn award_points(
        env: Env,
        caller: Address,
        account: Address,
        amount: i128,
    ) -> Result<i128, ContractError> {
        caller.require_auth();

        let owner = Self::get_owner(env.clone())?;
        if caller != owner {
            log!(&env, "award_points rejected: caller is not the owner");
            return Err(ContractError::Unauthorized);
        }

        validation::validate_amount(amount)?;

        let key = (POINTS, account.clone());
        let balance: i128 = env.storage().persistent().get(&key).unwrap_or(0);
        let new_balance = balance
            .checked_add(amount)
            .ok_or(ContractError::InvalidInput)?;

        env.storage().persistent().set(&key, &new_balance);
        ttl::extend_persistent(&env, &key);
        ttl::extend_instance(&env);

        events::publish_points_awarded(&env, account, amount, new_balance);

        Ok(new_balance)
    }

    /// Spend `amount` of the caller's own points.
    ///
    /// Fails with `InsufficientBalance` and leaves the balance untouched if
    /// `amount` exceeds it. Returns the new balance.
    pub fn redeem_points(env: Env, account: Address, amount: i128) -> Result<i128, ContractError> {
        account.require_auth();

        validation::validate_amount(amount)?;

        let key = (POINTS, account.clone());
        let balance: i128 = env.storage().persistent().get(&key).unwrap_or(0);
        if amount > balance {
            log!(&env, "redeem_points rejected: balance {} below {}", balance, amount);
            return Err(ContractError::InsufficientBalance);
        }
        let new_balance = balance
            .checked_sub(amount)
            .ok_or(ContractError::InsufficientBalance)?;

        env.storage().persistent().set(&key, &new_balance);
        ttl::extend_persistent(&env, &key);
        ttl::extend_instance(&env);

        events::publish_points_redeemed(&env, account, amount, new_balance);

        Ok(new_balance)
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Return the account's balance; zero for accounts never credited.
    pub fn get_points(env: Env, account: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&(POINTS, account))
            .unwrap_or(0)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }
}
