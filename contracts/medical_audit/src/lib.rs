#![no_std]

pub mod errors;
pub mod events;

use common::{hashing, index, ttl, validation};
use soroban_sdk::{
    contract, contractimpl, contracttype, log, symbol_short, Address, BytesN, Env, String,
    Symbol, Vec,
};

pub use errors::ContractError;

// ── Storage key constants ────────────────────────────────────────────────────

const AUDIT_SEQ: Symbol = symbol_short!("AUD_SEQ");

// Persistent storage uses tuple keys:  (prefix, id). The actor and related
// indices are `common::index` lists under ACT_LOG and REL_LOG.
const AUDIT: Symbol = symbol_short!("AUDIT");
const ACTOR_LOGS: Symbol = symbol_short!("ACT_LOG");
const RELATED_LOGS: Symbol = symbol_short!("REL_LOG");

/// One append-only audit entry.
///
/// `related_hash` is a best-effort back-reference to an entity in another
/// store (typically a medical record). The all-zero hash means "none". It is
/// never checked against the referenced store.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuditEntry {
    pub actor: Address,
    pub action: String,
    pub details: String,
    pub related_hash: BytesN<32>,
    pub sequence: u64,
    pub timestamp: u64,
}

impl AuditEntry {
    pub fn has_related(&self) -> bool {
        !hashing::is_zero_hash(&self.related_hash)
    }
}

#[contract]
pub struct MedicalAuditContract;

#[contractimpl]
impl MedicalAuditContract {
    /// Append an audit entry on behalf of `actor` and return its hash.
    ///
    /// The hash is `keccak256` over `(sequence, actor, action, details,
    /// timestamp)`.
    pub fn create_audit_log(
        env: Env,
        actor: Address,
        action: String,
        details: String,
        related_hash: BytesN<32>,
    ) -> Result<BytesN<32>, ContractError> {
        actor.require_auth();

        if let Err(err) = Self::validate_fields(&action, &details) {
            log!(&env, "create_audit_log rejected for action {}", action);
            return Err(err);
        }

        let timestamp = env.ledger().timestamp();
        let sequence = hashing::next_sequence(&env, &AUDIT_SEQ)?;
        let entry_hash = hashing::content_hash(
            &env,
            (
                sequence,
                actor.clone(),
                action.clone(),
                details.clone(),
                timestamp,
            ),
        );

        let key = (AUDIT, entry_hash.clone());
        if env.storage().persistent().has(&key) {
            return Err(ContractError::DuplicateEntry);
        }

        let entry = AuditEntry {
            actor: actor.clone(),
            action: action.clone(),
            details: details.clone(),
            related_hash: related_hash.clone(),
            sequence,
            timestamp,
        };
        env.storage().persistent().set(&key, &entry);
        ttl::extend_persistent(&env, &key);

        index::append(&env, &ACTOR_LOGS, &actor, &entry_hash)?;
        if entry.has_related() {
            index::append(&env, &RELATED_LOGS, &related_hash, &entry_hash)?;
        }
        ttl::extend_instance(&env);

        events::publish_audit_logged(
            &env,
            entry_hash.clone(),
            actor,
            action,
            details,
            related_hash,
            timestamp,
        );

        Ok(entry_hash)
    }

    /// Get an audit entry by hash
    pub fn get_audit_log(env: Env, entry_hash: BytesN<32>) -> Result<AuditEntry, ContractError> {
        env.storage()
            .persistent()
            .get(&(AUDIT, entry_hash))
            .ok_or(ContractError::AuditNotFound)
    }

    /// Hashes of entries submitted by `actor`, oldest first, starting at
    /// position `start`. At most `limit` (capped at
    /// `common::index::MAX_PAGE_SIZE`) hashes are returned.
    pub fn get_actor_logs(env: Env, actor: Address, start: u32, limit: u32) -> Vec<BytesN<32>> {
        index::page(&env, &ACTOR_LOGS, &actor, start, limit)
    }

    /// Number of entries submitted by `actor`.
    pub fn get_actor_log_count(env: Env, actor: Address) -> u32 {
        index::len(&env, &ACTOR_LOGS, &actor)
    }

    /// Hashes of entries that reference `related_hash`, paged like
    /// `get_actor_logs`. The zero hash is never indexed, so it always yields
    /// an empty page.
    pub fn get_related_logs(
        env: Env,
        related_hash: BytesN<32>,
        start: u32,
        limit: u32,
    ) -> Vec<BytesN<32>> {
        index::page(&env, &RELATED_LOGS, &related_hash, start, limit)
    }

    /// Number of entries that reference `related_hash`.
    pub fn get_related_log_count(env: Env, related_hash: BytesN<32>) -> u32 {
        index::len(&env, &RELATED_LOGS, &related_hash)
    }

    /// Get the total number of audit entries
    pub fn get_audit_count(env: Env) -> u64 {
        hashing::current_sequence(&env, &AUDIT_SEQ)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }
}

impl MedicalAuditContract {
    fn validate_fields(action: &String, details: &String) -> Result<(), ContractError> {
        validation::validate_label(action)?;
        validation::validate_text(details)?;
        Ok(())
    }
}
