use messenger_types::{MessengerConfig, Role};
use soroban_sdk::{contracttype, Address, BytesN, Env, String};

use crate::error::Error;

/// Storage keys for the messenger contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Collaborator addresses (Instance storage)
    Config,
    /// Global pause flag (Instance storage)
    Paused,
    /// Fee applied to domains without an override (Instance storage)
    DefaultFee,
    /// Last assigned trace id (Instance storage)
    TraceId,
    /// Accumulated tips in the settlement token (Instance storage)
    Tips,
    /// (role, account) -> granted (Persistent storage)
    Role(Role, Address),
    /// domain -> fee override, zero means default (Persistent storage)
    DomainFee(u32),
    /// domain -> admitted for outbound transfers (Persistent storage)
    DomainAllowed(u32),
    /// domain -> relay chain name (Persistent storage)
    ChainName(u32),
    /// relay chain name -> domain (Persistent storage)
    ChainDomain(String),
    /// domain -> sibling messenger address on the relay network (Persistent storage)
    RemoteMessenger(u32),
    /// domain -> sibling messenger address as a bridge mint recipient (Persistent storage)
    RemoteMintRecipient(u32),
    /// payload hash -> executed (Persistent storage)
    Executed(BytesN<32>),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

fn get_persistent_flag(env: &Env, key: &DataKey) -> bool {
    let value = env.storage().persistent().get(key).unwrap_or(false);
    if value {
        extend_persistent_ttl(env, key);
    }
    value
}

fn set_persistent_flag(env: &Env, key: &DataKey, value: bool) {
    if value {
        env.storage().persistent().set(key, &true);
        extend_persistent_ttl(env, key);
    } else {
        env.storage().persistent().remove(key);
    }
}

// === Config ===

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<MessengerConfig, Error> {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)?;
    extend_instance_ttl(env);
    Ok(config)
}

pub fn set_config(env: &Env, config: &MessengerConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === Pause ===

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
    extend_instance_ttl(env);
}

// === Roles ===

pub fn has_role(env: &Env, role: Role, account: &Address) -> bool {
    get_persistent_flag(env, &DataKey::Role(role, account.clone()))
}

pub fn set_role(env: &Env, role: Role, account: &Address, granted: bool) {
    set_persistent_flag(env, &DataKey::Role(role, account.clone()), granted);
}

// === Fees ===

pub fn get_default_fee(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::DefaultFee)
        .unwrap_or(0)
}

pub fn set_default_fee(env: &Env, fee: i128) {
    env.storage().instance().set(&DataKey::DefaultFee, &fee);
    extend_instance_ttl(env);
}

pub fn get_domain_fee(env: &Env, domain: u32) -> i128 {
    let key = DataKey::DomainFee(domain);
    let fee = env.storage().persistent().get(&key).unwrap_or(0);
    if fee > 0 {
        extend_persistent_ttl(env, &key);
    }
    fee
}

pub fn set_domain_fee(env: &Env, domain: u32, fee: i128) {
    let key = DataKey::DomainFee(domain);
    if fee == 0 {
        // Zero falls back to the default, nothing to keep
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &fee);
        extend_persistent_ttl(env, &key);
    }
}

// === Domains ===

pub fn is_domain_allowed(env: &Env, domain: u32) -> bool {
    get_persistent_flag(env, &DataKey::DomainAllowed(domain))
}

pub fn set_domain_allowed(env: &Env, domain: u32, allowed: bool) {
    set_persistent_flag(env, &DataKey::DomainAllowed(domain), allowed);
}

pub fn get_chain_name(env: &Env, domain: u32) -> Option<String> {
    let key = DataKey::ChainName(domain);
    let name = env.storage().persistent().get(&key);
    if name.is_some() {
        extend_persistent_ttl(env, &key);
    }
    name
}

pub fn get_chain_domain(env: &Env, chain: &String) -> Option<u32> {
    let key = DataKey::ChainDomain(chain.clone());
    let domain = env.storage().persistent().get(&key);
    if domain.is_some() {
        extend_persistent_ttl(env, &key);
    }
    domain
}

pub fn set_chain_name(env: &Env, domain: u32, chain: &String) {
    let name_key = DataKey::ChainName(domain);
    env.storage().persistent().set(&name_key, chain);
    extend_persistent_ttl(env, &name_key);

    let domain_key = DataKey::ChainDomain(chain.clone());
    env.storage().persistent().set(&domain_key, &domain);
    extend_persistent_ttl(env, &domain_key);
}

pub fn get_remote_messenger(env: &Env, domain: u32) -> Option<String> {
    let key = DataKey::RemoteMessenger(domain);
    let address = env.storage().persistent().get(&key);
    if address.is_some() {
        extend_persistent_ttl(env, &key);
    }
    address
}

pub fn set_remote_messenger(env: &Env, domain: u32, address: &String) {
    let key = DataKey::RemoteMessenger(domain);
    env.storage().persistent().set(&key, address);
    extend_persistent_ttl(env, &key);
}

pub fn get_remote_mint_recipient(env: &Env, domain: u32) -> Option<BytesN<32>> {
    let key = DataKey::RemoteMintRecipient(domain);
    let recipient = env.storage().persistent().get(&key);
    if recipient.is_some() {
        extend_persistent_ttl(env, &key);
    }
    recipient
}

pub fn set_remote_mint_recipient(env: &Env, domain: u32, recipient: &BytesN<32>) {
    let key = DataKey::RemoteMintRecipient(domain);
    env.storage().persistent().set(&key, recipient);
    extend_persistent_ttl(env, &key);
}

// === Trace ids ===

pub fn get_trace_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TraceId)
        .unwrap_or(0)
}

/// Increments the trace counter and returns the new value
pub fn next_trace_id(env: &Env) -> u64 {
    let next = get_trace_id(env) + 1;
    env.storage().instance().set(&DataKey::TraceId, &next);
    extend_instance_ttl(env);
    next
}

// === Tips ===

pub fn get_tips(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::Tips).unwrap_or(0)
}

pub fn set_tips(env: &Env, tips: i128) {
    env.storage().instance().set(&DataKey::Tips, &tips);
    extend_instance_ttl(env);
}

// === Executed payloads ===

pub fn is_executed(env: &Env, payload_hash: &BytesN<32>) -> bool {
    get_persistent_flag(env, &DataKey::Executed(payload_hash.clone()))
}

pub fn set_executed(env: &Env, payload_hash: &BytesN<32>) {
    set_persistent_flag(env, &DataKey::Executed(payload_hash.clone()), true);
}
