use messenger_types::interfaces::TokenMessengerClient;
use messenger_types::MessengerConfig;
use soroban_sdk::{token, Address, BytesN, Env};

use crate::access::ensure_not_paused;
use crate::domains::ensure_allowed;
use crate::error::Error;
use crate::fees::effective_fee;
use crate::{events, invariants, storage};

/// Ledgers the bridge allowance stays valid for; it is consumed in the same call
const ALLOWANCE_LEDGERS: u32 = 100;

/// Where the gross amount comes from
pub enum Funding<'a> {
    /// Pulled from this account
    Caller(&'a Address),
    /// Already held by this contract
    Custody,
}

/// A burn accepted by the bridge
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IssuedTransfer {
    pub nonce: u64,
    pub fee: i128,
    pub net_amount: i128,
}

/// Fee and net amount for a gross transfer, if the fee leaves something to bridge
pub fn split_fee(env: &Env, amount: i128, destination_domain: u32) -> Result<(i128, i128), Error> {
    let fee = effective_fee(env, destination_domain);
    if !invariants::fee_leaves_net_amount(amount, fee) {
        return Err(Error::AmountNotAboveFee);
    }
    Ok((fee, amount - fee))
}

/// Retain the fee as a tip and burn the rest through the bridge
pub fn issue(
    env: &Env,
    config: &MessengerConfig,
    funding: Funding,
    amount: i128,
    destination_domain: u32,
    mint_recipient: &BytesN<32>,
    settlement_token: &Address,
) -> Result<IssuedTransfer, Error> {
    ensure_not_paused(env)?;
    ensure_allowed(env, destination_domain)?;
    if *settlement_token != config.settlement_token {
        return Err(Error::UnsupportedSettlementToken);
    }
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    let (fee, net_amount) = split_fee(env, amount, destination_domain)?;

    let this = env.current_contract_address();
    let token = token::Client::new(env, settlement_token);
    if let Funding::Caller(caller) = funding {
        token.transfer(caller, &this, &amount);
    }
    storage::set_tips(env, storage::get_tips(env) + fee);

    token.approve(
        &this,
        &config.token_messenger,
        &net_amount,
        &(env.ledger().sequence() + ALLOWANCE_LEDGERS),
    );
    let nonce = TokenMessengerClient::new(env, &config.token_messenger).deposit_for_burn(
        &this,
        &net_amount,
        &destination_domain,
        mint_recipient,
        settlement_token,
    );

    events::transfer_issued(
        env,
        nonce,
        net_amount,
        destination_domain,
        mint_recipient,
        settlement_token,
    );

    Ok(IssuedTransfer {
        nonce,
        fee,
        net_amount,
    })
}
