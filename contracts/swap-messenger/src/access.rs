use messenger_types::Role;
use soroban_sdk::{log, Address, Env};

use crate::error::Error;
use crate::{events, storage};

fn missing(role: Role) -> Error {
    match role {
        Role::Admin => Error::MissingAdminRole,
        Role::FeeSetter => Error::MissingFeeSetterRole,
    }
}

/// Authenticate `caller` and check it currently holds `role`
pub fn require_role(env: &Env, caller: &Address, role: Role) -> Result<(), Error> {
    caller.require_auth();
    if !storage::has_role(env, role, caller) {
        log!(env, "caller lacks role", caller.clone(), role);
        return Err(missing(role));
    }
    Ok(())
}

pub fn ensure_not_paused(env: &Env) -> Result<(), Error> {
    if storage::is_paused(env) {
        return Err(Error::Paused);
    }
    Ok(())
}

pub fn grant_role(env: &Env, caller: &Address, role: Role, account: &Address) -> Result<(), Error> {
    require_role(env, caller, Role::Admin)?;
    if !storage::has_role(env, role, account) {
        storage::set_role(env, role, account, true);
        events::role_granted(env, role, account);
    }
    Ok(())
}

pub fn revoke_role(env: &Env, caller: &Address, role: Role, account: &Address) -> Result<(), Error> {
    require_role(env, caller, Role::Admin)?;
    if storage::has_role(env, role, account) {
        storage::set_role(env, role, account, false);
        events::role_revoked(env, role, account);
    }
    Ok(())
}

/// Drop a role held by `account` itself
pub fn renounce_role(env: &Env, account: &Address, role: Role) {
    account.require_auth();
    if storage::has_role(env, role, account) {
        storage::set_role(env, role, account, false);
        events::role_revoked(env, role, account);
    }
}

/// Repeated pauses are no-ops
pub fn pause(env: &Env, caller: &Address) -> Result<(), Error> {
    require_role(env, caller, Role::Admin)?;
    if !storage::is_paused(env) {
        storage::set_paused(env, true);
        events::paused(env, caller);
    }
    Ok(())
}

/// Repeated unpauses are no-ops
pub fn unpause(env: &Env, caller: &Address) -> Result<(), Error> {
    require_role(env, caller, Role::Admin)?;
    if storage::is_paused(env) {
        storage::set_paused(env, false);
        events::unpaused(env, caller);
    }
    Ok(())
}
