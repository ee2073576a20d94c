use messenger_types::Role;
use soroban_sdk::{log, token, Address, Env, Symbol, Val, Vec};

use crate::access::require_role;
use crate::error::Error;
use crate::{events, invariants, storage};

/// Pay out the accumulated tips to `caller`. Returns the amount paid.
pub fn withdraw_tips(env: &Env, caller: &Address) -> Result<i128, Error> {
    require_role(env, caller, Role::Admin)?;
    let config = storage::get_config(env)?;
    let tips = storage::get_tips(env);
    if tips == 0 {
        return Ok(0);
    }
    storage::set_tips(env, 0);
    token::Client::new(env, &config.settlement_token).transfer(
        &env.current_contract_address(),
        caller,
        &tips,
    );
    events::tips_withdrawn(env, caller, tips);
    Ok(tips)
}

/// Move `amount` of `token` held by this contract to `to`.
///
/// Settlement token rescues never reach into tracked tips. Minted amounts
/// waiting for their payload look the same as stray funds, so draining
/// them makes that delivery fail until the balance is topped up.
pub fn rescue_token(
    env: &Env,
    caller: &Address,
    token: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    require_role(env, caller, Role::Admin)?;
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    let config = storage::get_config(env)?;
    let this = env.current_contract_address();
    let client = token::Client::new(env, token);
    if *token == config.settlement_token
        && !invariants::payload_funded(client.balance(&this), storage::get_tips(env), amount)
    {
        return Err(Error::InsufficientSettlementBalance);
    }
    client.transfer(&this, to, &amount);
    events::rescued(env, token, to, amount);
    Ok(())
}

pub fn rescue_native(env: &Env, caller: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let config = storage::get_config(env)?;
    rescue_token(env, caller, &config.native_token, to, amount)
}

/// Invoke an arbitrary contract on behalf of this one, optionally sending
/// `value` native units to it first. A failing target aborts the call.
pub fn rescue_call(
    env: &Env,
    caller: &Address,
    target: &Address,
    function: &Symbol,
    args: Vec<Val>,
    value: i128,
) -> Result<Val, Error> {
    require_role(env, caller, Role::Admin)?;
    if value < 0 {
        return Err(Error::InvalidAmount);
    }
    let config = storage::get_config(env)?;
    log!(env, "rescue call", target.clone(), function.clone(), value);
    if value > 0 {
        token::Client::new(env, &config.native_token).transfer(
            &env.current_contract_address(),
            target,
            &value,
        );
    }
    Ok(env.invoke_contract::<Val>(target, function, args))
}
