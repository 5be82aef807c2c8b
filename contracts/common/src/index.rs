//! Append-only hash lists keyed by an owner (a patient id, an actor, a
//! related hash).
//!
//! Each list is stored as a length entry `(prefix, owner) -> u32` plus one
//! entry per element `(prefix, owner, position) -> BytesN<32>`. Appending
//! touches two entries regardless of how long the list already is, and no
//! single entry grows with the list.

use soroban_sdk::{BytesN, Env, IntoVal, Symbol, Val, Vec};

use crate::{ttl, CommonError};

/// Largest page a paged getter returns, whatever `limit` the caller asks for.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Appends `hash` to the list `(prefix, owner)` and returns the new length.
pub fn append<K>(
    env: &Env,
    prefix: &Symbol,
    owner: &K,
    hash: &BytesN<32>,
) -> Result<u32, CommonError>
where
    K: Clone,
    (Symbol, K): IntoVal<Env, Val>,
    (Symbol, K, u32): IntoVal<Env, Val>,
{
    let len_key = (prefix.clone(), owner.clone());
    let position: u32 = env.storage().persistent().get(&len_key).unwrap_or(0);
    let new_len = position
        .checked_add(1)
        .ok_or(CommonError::SequenceExhausted)?;

    let item_key = (prefix.clone(), owner.clone(), position);
    env.storage().persistent().set(&item_key, hash);
    ttl::extend_persistent(env, &item_key);

    env.storage().persistent().set(&len_key, &new_len);
    ttl::extend_persistent(env, &len_key);

    Ok(new_len)
}

/// Number of hashes appended to `(prefix, owner)`.
pub fn len<K>(env: &Env, prefix: &Symbol, owner: &K) -> u32
where
    K: Clone,
    (Symbol, K): IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .get(&(prefix.clone(), owner.clone()))
        .unwrap_or(0)
}

/// Up to `limit` hashes of `(prefix, owner)` starting at position `start`,
/// oldest first. `limit` is capped at [`MAX_PAGE_SIZE`]; a `start` past the
/// end yields an empty page.
pub fn page<K>(env: &Env, prefix: &Symbol, owner: &K, start: u32, limit: u32) -> Vec<BytesN<32>>
where
    K: Clone,
    (Symbol, K): IntoVal<Env, Val>,
    (Symbol, K, u32): IntoVal<Env, Val>,
{
    let total = len(env, prefix, owner);
    let end = start
        .saturating_add(limit.min(MAX_PAGE_SIZE))
        .min(total);

    let mut hashes = Vec::new(env);
    for position in start..end {
        let item_key = (prefix.clone(), owner.clone(), position);
        if let Some(hash) = env.storage().persistent().get(&item_key) {
            hashes.push_back(hash);
        }
    }
    hashes
}
