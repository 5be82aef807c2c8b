//! Storage lifetime policy.
//!
//! Entities are written to persistent storage and their TTL is bumped on
//! every write. Counters and contract configuration live in instance storage,
//! which shares a single TTL for all of its keys.

use soroban_sdk::{Env, IntoVal, Val};

/// TTL constants for storage (in ledgers)
pub const TTL_THRESHOLD: u32 = 17_280; // ~1 day
pub const TTL_EXTEND_TO: u32 = 518_400; // ~30 days

/// Extends the TTL of a persistent entry so it stays readable for the
/// extension period.
pub fn extend_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Extends the TTL of instance storage (applies to all instance keys).
pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}
