use messenger_types::{Role, SUPPORTED_DOMAINS};
use soroban_sdk::{Address, BytesN, Env, String};

use crate::access::require_role;
use crate::error::Error;
use crate::{events, storage};

/// Load the fixed domain -> relay chain name table
pub fn load_supported(env: &Env) {
    for (domain, name) in SUPPORTED_DOMAINS.iter() {
        storage::set_chain_name(env, *domain, &String::from_str(env, name));
    }
}

/// Checked at call time, never cached
pub fn ensure_allowed(env: &Env, domain: u32) -> Result<(), Error> {
    if !storage::is_domain_allowed(env, domain) {
        return Err(Error::DomainNotAllowed);
    }
    Ok(())
}

pub fn allow_domain(env: &Env, caller: &Address, domain: u32) -> Result<(), Error> {
    require_role(env, caller, Role::Admin)?;
    if domain == storage::get_config(env)?.local_domain {
        return Err(Error::LocalDomain);
    }
    if !storage::is_domain_allowed(env, domain) {
        storage::set_domain_allowed(env, domain, true);
        events::domain_allowed(env, domain);
    }
    Ok(())
}

pub fn disallow_domain(env: &Env, caller: &Address, domain: u32) -> Result<(), Error> {
    require_role(env, caller, Role::Admin)?;
    if storage::is_domain_allowed(env, domain) {
        storage::set_domain_allowed(env, domain, false);
        events::domain_disallowed(env, domain);
    }
    Ok(())
}

pub fn set_remote_messenger(
    env: &Env,
    caller: &Address,
    domain: u32,
    address: &String,
    mint_recipient: &BytesN<32>,
) -> Result<(), Error> {
    require_role(env, caller, Role::Admin)?;
    if storage::get_chain_name(env, domain).is_none() {
        return Err(Error::UnsupportedDomain);
    }
    storage::set_remote_messenger(env, domain, address);
    storage::set_remote_mint_recipient(env, domain, mint_recipient);
    events::remote_set(env, domain, address, mint_recipient);
    Ok(())
}

/// Bridge mint recipient for `domain`: always the registered sibling
pub fn sibling_mint_recipient(env: &Env, domain: u32) -> Result<BytesN<32>, Error> {
    storage::get_remote_mint_recipient(env, domain).ok_or(Error::RemoteMessengerNotSet)
}

/// Relay chain name and sibling address for an outbound message
pub fn relay_target(env: &Env, domain: u32) -> Result<(String, String), Error> {
    let chain = storage::get_chain_name(env, domain).ok_or(Error::UnsupportedDomain)?;
    let sibling = storage::get_remote_messenger(env, domain).ok_or(Error::RemoteMessengerNotSet)?;
    Ok((chain, sibling))
}

/// Domain of an inbound message, if it comes from a registered sibling
pub fn verify_source(env: &Env, source_chain: &String, source_address: &String) -> Result<u32, Error> {
    let domain = storage::get_chain_domain(env, source_chain).ok_or(Error::UnknownSource)?;
    match storage::get_remote_messenger(env, domain) {
        Some(sibling) if sibling == *source_address => Ok(domain),
        _ => Err(Error::UnknownSource),
    }
}
