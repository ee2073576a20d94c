#![no_std]

mod access;
mod bridge;
mod domains;
mod error;
mod events;
mod fees;
mod invariants;
mod receiver;
mod relay;
mod rescue;
mod storage;
mod swap;

#[cfg(any(test, feature = "certora"))]
mod certora_specs;
#[cfg(test)]
mod testutils;

pub use error::Error;

use access::ensure_not_paused;
use bridge::Funding;
use messenger_types::{MessengerConfig, RemoteOutcome, Role, SwapAndBridgeRequest, TransferReceipt};
use soroban_sdk::{
    contract, contractimpl, token, Address, Bytes, BytesN, Env, String, Symbol, Val, Vec,
};

#[contract]
pub struct SwapMessenger;

// ============================================================================
// FLOWS
// ============================================================================
//
// Source domain:
//   swap_and_bridge: caller tokens -> engine swap into settlement token ->
//   fee retained as tip -> net amount burned by the bridge -> payload sent
//   to the sibling messenger through the relay gateway
//
//   issue_transfer: settlement tokens burned directly, no message
//
// Destination domain:
//   execute: gateway delivers the payload once the bridge has minted the
//   net amount to this contract -> engine swap -> output to the recipient
//
// ============================================================================

#[contractimpl]
impl SwapMessenger {
    /// Initialize with the collaborator addresses, the initial admin and
    /// the default fee. `admin` receives both roles.
    pub fn initialize(
        env: Env,
        admin: Address,
        config: MessengerConfig,
        default_fee: i128,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        if !invariants::fee_valid(default_fee) {
            return Err(Error::InvalidFee);
        }

        storage::set_config(&env, &config);
        storage::set_default_fee(&env, default_fee);
        for role in [Role::Admin, Role::FeeSetter] {
            storage::set_role(&env, role, &admin, true);
            events::role_granted(&env, role, &admin);
        }
        domains::load_supported(&env);
        Ok(())
    }

    pub fn config(env: Env) -> Result<MessengerConfig, Error> {
        storage::get_config(&env)
    }

    // === Fees ===

    pub fn effective_fee(env: Env, domain: u32) -> i128 {
        fees::effective_fee(&env, domain)
    }

    pub fn default_fee(env: Env) -> i128 {
        storage::get_default_fee(&env)
    }

    /// Override for `domain`, zero when the default applies
    pub fn domain_fee(env: Env, domain: u32) -> i128 {
        storage::get_domain_fee(&env, domain)
    }

    pub fn set_default_fee(env: Env, caller: Address, fee: i128) -> Result<(), Error> {
        fees::set_default_fee(&env, &caller, fee)
    }

    pub fn set_fee_for_domain(
        env: Env,
        caller: Address,
        domain: u32,
        fee: i128,
    ) -> Result<(), Error> {
        fees::set_fee_for_domain(&env, &caller, domain, fee)
    }

    /// All-or-nothing batch of per-domain overrides
    pub fn set_fees_for_domains(
        env: Env,
        caller: Address,
        domains: Vec<u32>,
        fees: Vec<i128>,
    ) -> Result<(), Error> {
        fees::set_fees_for_domains(&env, &caller, &domains, &fees)
    }

    // === Domains ===

    pub fn allow_domain(env: Env, caller: Address, domain: u32) -> Result<(), Error> {
        domains::allow_domain(&env, &caller, domain)
    }

    pub fn disallow_domain(env: Env, caller: Address, domain: u32) -> Result<(), Error> {
        domains::disallow_domain(&env, &caller, domain)
    }

    pub fn is_domain_allowed(env: Env, domain: u32) -> bool {
        storage::is_domain_allowed(&env, domain)
    }

    /// Relay network name of `domain`, if supported
    pub fn chain_name(env: Env, domain: u32) -> Option<String> {
        storage::get_chain_name(&env, domain)
    }

    pub fn remote_messenger(env: Env, domain: u32) -> Option<String> {
        storage::get_remote_messenger(&env, domain)
    }

    /// Bridge mint recipient of the sibling on `domain`
    pub fn remote_mint_recipient(env: Env, domain: u32) -> Option<BytesN<32>> {
        storage::get_remote_mint_recipient(&env, domain)
    }

    /// Register the sibling messenger on `domain`: its relay address and the
    /// 32-byte address the bridge mints to on that domain.
    pub fn set_remote_messenger(
        env: Env,
        caller: Address,
        domain: u32,
        address: String,
        mint_recipient: BytesN<32>,
    ) -> Result<(), Error> {
        domains::set_remote_messenger(&env, &caller, domain, &address, &mint_recipient)
    }

    // === Roles and pause ===

    pub fn grant_role(env: Env, caller: Address, role: Role, account: Address) -> Result<(), Error> {
        access::grant_role(&env, &caller, role, &account)
    }

    pub fn revoke_role(
        env: Env,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), Error> {
        access::revoke_role(&env, &caller, role, &account)
    }

    pub fn renounce_role(env: Env, account: Address, role: Role) {
        access::renounce_role(&env, &account, role)
    }

    pub fn has_role(env: Env, role: Role, account: Address) -> bool {
        storage::has_role(&env, role, &account)
    }

    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        access::pause(&env, &caller)
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        access::unpause(&env, &caller)
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    // === Outbound ===

    /// Burn `amount` of the settlement token (minus the fee) towards
    /// `destination_domain`. Returns the bridge nonce.
    pub fn issue_transfer(
        env: Env,
        caller: Address,
        amount: i128,
        destination_domain: u32,
        mint_recipient: BytesN<32>,
        settlement_token: Address,
    ) -> Result<u64, Error> {
        caller.require_auth();
        let config = storage::get_config(&env)?;
        let issued = bridge::issue(
            &env,
            &config,
            Funding::Caller(&caller),
            amount,
            destination_domain,
            &mint_recipient,
            &settlement_token,
        )?;
        Ok(issued.nonce)
    }

    /// Swap into the settlement token, bridge it and ask the sibling
    /// messenger to swap it into the final asset on arrival.
    pub fn swap_and_bridge(
        env: Env,
        caller: Address,
        request: SwapAndBridgeRequest,
    ) -> Result<TransferReceipt, Error> {
        caller.require_auth();
        let config = storage::get_config(&env)?;
        ensure_not_paused(&env)?;
        domains::ensure_allowed(&env, request.destination_domain)?;
        let mint_recipient = domains::sibling_mint_recipient(&env, request.destination_domain)?;

        let source = &request.source_swap;
        if *source.route.token_out() != config.settlement_token {
            return Err(Error::OutputNotSettlementToken);
        }
        if source.amount_in <= 0 {
            return Err(Error::InvalidAmount);
        }

        let this = env.current_contract_address();
        let token_in = token::Client::new(&env, source.route.token_in());
        token_in.transfer(&caller, &this, &source.amount_in);

        let outcome = swap::execute(
            &env,
            &config.engine,
            &source.route,
            source.amount_in,
            source.amount_out_minimum,
            &this,
        )?;
        let unfilled = source.amount_in - outcome.amount_in;
        if !invariants::input_accounted(source.amount_in, outcome.amount_in, unfilled) {
            return Err(Error::UnexpectedDelta);
        }
        if unfilled > 0 {
            token_in.transfer(&this, &caller, &unfilled);
        }

        let issued = bridge::issue(
            &env,
            &config,
            Funding::Custody,
            outcome.amount_out,
            request.destination_domain,
            &mint_recipient,
            &config.settlement_token,
        )?;
        let dispatched = relay::dispatch(
            &env,
            &config,
            &caller,
            request.destination_domain,
            issued.net_amount,
            issued.nonce,
            &request.destination_swap,
            &request.recipient,
            &request.gas,
        )?;

        Ok(TransferReceipt {
            burn_nonce: issued.nonce,
            trace_id: dispatched.trace_id,
            fee: issued.fee,
            net_amount: issued.net_amount,
            payload_hash: dispatched.payload_hash,
        })
    }

    pub fn last_trace_id(env: Env) -> u64 {
        storage::get_trace_id(&env)
    }

    // === Inbound ===

    /// Called by the relay gateway with a message from a sibling messenger
    pub fn execute(
        env: Env,
        caller: Address,
        source_chain: String,
        source_address: String,
        payload: Bytes,
    ) -> Result<RemoteOutcome, Error> {
        receiver::execute(&env, &caller, &source_chain, &source_address, &payload)
    }

    pub fn is_executed(env: Env, payload_hash: BytesN<32>) -> bool {
        storage::is_executed(&env, &payload_hash)
    }

    // === Treasury and rescue ===

    pub fn tips(env: Env) -> i128 {
        storage::get_tips(&env)
    }

    pub fn withdraw_tips(env: Env, caller: Address) -> Result<i128, Error> {
        rescue::withdraw_tips(&env, &caller)
    }

    pub fn rescue_native(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), Error> {
        rescue::rescue_native(&env, &caller, &to, amount)
    }

    pub fn rescue_token(
        env: Env,
        caller: Address,
        token: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        rescue::rescue_token(&env, &caller, &token, &to, amount)
    }

    pub fn rescue_call(
        env: Env,
        caller: Address,
        target: Address,
        function: Symbol,
        args: Vec<Val>,
        value: i128,
    ) -> Result<Val, Error> {
        rescue::rescue_call(&env, &caller, &target, &function, args, value)
    }
}
