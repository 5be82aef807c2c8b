use soroban_sdk::{symbol_short, Address, BytesN, Env, String};

/// Fired when an audit entry is appended. The entry hash is the second
/// topic; the related hash is carried in the payload only.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuditLoggedEvent {
    pub entry_hash: BytesN<32>,
    pub actor: Address,
    pub action: String,
    pub details: String,
    pub related_hash: BytesN<32>,
    pub timestamp: u64,
}

pub fn publish_audit_logged(
    env: &Env,
    entry_hash: BytesN<32>,
    actor: Address,
    action: String,
    details: String,
    related_hash: BytesN<32>,
    timestamp: u64,
) {
    let topics = (symbol_short!("AUD_NEW"), entry_hash.clone());
    let data = AuditLoggedEvent {
        entry_hash,
        actor,
        action,
        details,
        related_hash,
        timestamp,
    };
    env.events().publish(topics, data);
}
