use messenger_types::Role;
use soroban_sdk::{Address, Env, Vec};

use crate::access::require_role;
use crate::error::Error;
use crate::{events, invariants, storage};

/// Per-domain override if set, otherwise the default
pub fn effective_fee(env: &Env, domain: u32) -> i128 {
    let fee = storage::get_domain_fee(env, domain);
    if fee > 0 {
        fee
    } else {
        storage::get_default_fee(env)
    }
}

fn check_fee(fee: i128) -> Result<(), Error> {
    if !invariants::fee_valid(fee) {
        return Err(Error::InvalidFee);
    }
    Ok(())
}

pub fn set_default_fee(env: &Env, caller: &Address, fee: i128) -> Result<(), Error> {
    require_role(env, caller, Role::Admin)?;
    check_fee(fee)?;
    storage::set_default_fee(env, fee);
    events::default_fee_set(env, fee);
    Ok(())
}

/// Zero clears the override
pub fn set_fee_for_domain(env: &Env, caller: &Address, domain: u32, fee: i128) -> Result<(), Error> {
    require_role(env, caller, Role::FeeSetter)?;
    check_fee(fee)?;
    storage::set_domain_fee(env, domain, fee);
    events::domain_fee_set(env, domain, fee);
    Ok(())
}

pub fn set_fees_for_domains(
    env: &Env,
    caller: &Address,
    domains: &Vec<u32>,
    fees: &Vec<i128>,
) -> Result<(), Error> {
    require_role(env, caller, Role::FeeSetter)?;
    if domains.len() != fees.len() {
        return Err(Error::LengthMismatch);
    }
    // Validate everything before the first write
    for fee in fees.iter() {
        check_fee(fee)?;
    }
    for (domain, fee) in domains.iter().zip(fees.iter()) {
        storage::set_domain_fee(env, domain, fee);
        events::domain_fee_set(env, domain, fee);
    }
    Ok(())
}
