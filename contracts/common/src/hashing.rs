//! Content-addressed identifiers.
//!
//! Every hash-keyed store derives an entity's key as `keccak256` over the XDR
//! encoding of a preimage. Preimages always lead with the store's write
//! sequence so that two submissions with identical payloads still get
//! distinct keys.

use soroban_sdk::{xdr::ToXdr, BytesN, Env, IntoVal, Symbol, Val};

use crate::CommonError;

/// Raw value of the "no related entity" sentinel.
pub const ZERO_HASH: [u8; 32] = [0u8; 32];

/// Returns the all-zero hash used as the "none" reference.
pub fn zero_hash(env: &Env) -> BytesN<32> {
    BytesN::from_array(env, &ZERO_HASH)
}

pub fn is_zero_hash(hash: &BytesN<32>) -> bool {
    hash.to_array() == ZERO_HASH
}

/// Hashes the XDR encoding of `preimage` with keccak256.
///
/// The encoding is length-prefixed per field, so adjacent strings cannot
/// bleed into each other (`("ab", "c")` and `("a", "bc")` hash differently).
pub fn content_hash<T>(env: &Env, preimage: T) -> BytesN<32>
where
    T: IntoVal<Env, Val>,
{
    let encoded = preimage.to_xdr(env);
    env.crypto().keccak256(&encoded).into()
}

/// Advances the write counter stored under `key` in instance storage and
/// returns the new value. The first call on a fresh store returns 1.
pub fn next_sequence(env: &Env, key: &Symbol) -> Result<u64, CommonError> {
    let current: u64 = env.storage().instance().get(key).unwrap_or(0);
    let next = current
        .checked_add(1)
        .ok_or(CommonError::SequenceExhausted)?;
    env.storage().instance().set(key, &next);
    Ok(next)
}

/// Reads the write counter under `key` without advancing it.
pub fn current_sequence(env: &Env, key: &Symbol) -> u64 {
    env.storage().instance().get(key).unwrap_or(0)
}
