use messenger_types::{MessengerConfig, RelayPayload, RemoteOutcome};
use soroban_sdk::xdr::FromXdr;
use soroban_sdk::{log, symbol_short, token, Address, Bytes, Env, String, Symbol};

use crate::access::ensure_not_paused;
use crate::error::Error;
use crate::{domains, events, invariants, relay, storage, swap};

/// Defects that make a payload undeliverable as a swap.
///
/// Only conditions detectable before touching the engine qualify; once a
/// session has started every failure aborts the whole execution instead.
fn refund_reason(config: &MessengerConfig, payload: &RelayPayload) -> Option<Symbol> {
    let route = &payload.swap.route;
    if payload.amount <= 0 {
        return Some(symbol_short!("no_amount"));
    }
    if !route.is_well_formed() {
        return Some(symbol_short!("bad_route"));
    }
    if *route.token_in() != config.settlement_token {
        return Some(symbol_short!("bad_input"));
    }
    None
}

/// Entry point for messages delivered by the relay gateway
pub fn execute(
    env: &Env,
    caller: &Address,
    source_chain: &String,
    source_address: &String,
    payload: &Bytes,
) -> Result<RemoteOutcome, Error> {
    let config = storage::get_config(env)?;
    if *caller != config.gateway {
        return Err(Error::NotGateway);
    }
    caller.require_auth();
    ensure_not_paused(env)?;
    domains::verify_source(env, source_chain, source_address)?;

    let payload_hash = relay::payload_hash(env, payload);
    if storage::is_executed(env, &payload_hash) {
        return Err(Error::AlreadyExecuted);
    }
    let message = RelayPayload::from_xdr(env, payload).map_err(|_| Error::InvalidPayload)?;

    // Tips are not available to inbound payloads
    let this = env.current_contract_address();
    let settlement = token::Client::new(env, &config.settlement_token);
    let balance = settlement.balance(&this);
    if !invariants::payload_funded(balance, storage::get_tips(env), message.amount) {
        return Err(Error::InsufficientSettlementBalance);
    }
    storage::set_executed(env, &payload_hash);

    if let Some(reason) = refund_reason(&config, &message) {
        log!(env, "refunding undeliverable payload", message.trace_id, reason);
        let refunded = message.amount.max(0);
        if refunded > 0 {
            settlement.transfer(&this, &message.recipient, &refunded);
        }
        events::remote_refunded(env, message.trace_id, refunded, &message.recipient);
        return Ok(RemoteOutcome::Refunded(refunded));
    }

    let outcome = swap::execute(
        env,
        &config.engine,
        &message.swap.route,
        message.amount,
        message.swap.amount_out_minimum,
        &message.recipient,
    )?;

    let unfilled = message.amount - outcome.amount_in;
    if unfilled > 0 {
        settlement.transfer(&this, &message.recipient, &unfilled);
    }

    events::remote_succeeded(
        env,
        message.trace_id,
        outcome.amount_in,
        outcome.amount_out,
        &message.recipient,
    );
    Ok(RemoteOutcome::Swapped(outcome.amount_out))
}
