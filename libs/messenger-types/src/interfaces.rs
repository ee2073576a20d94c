//! Interfaces of the external collaborators the messenger drives.
//!
//! Each trait generates a client (`LiquidityEngineClient`, ...) used by the
//! messenger; production deployments point them at the real networks and
//! tests register fakes exposing the same functions.

use soroban_sdk::{contractclient, Address, Bytes, BytesN, Env, String};

use crate::{BalanceDelta, PoolKey, SwapParams};

/// Flash-accounting liquidity engine.
///
/// A locker opens a session with `unlock`, swaps, pays every negative delta
/// (token transfer followed by `settle`), withdraws every positive delta with
/// `take`, and closes the session with `lock`. `lock` fails while any delta
/// is outstanding, which aborts the whole invocation.
#[contractclient(name = "LiquidityEngineClient")]
pub trait LiquidityEngine {
    fn unlock(env: Env, locker: Address);

    fn swap(
        env: Env,
        locker: Address,
        key: PoolKey,
        params: SwapParams,
        hook_data: Bytes,
    ) -> BalanceDelta;

    /// Credits the locker with tokens transferred to the engine since the last sync
    fn settle(env: Env, locker: Address, token: Address) -> i128;

    fn take(env: Env, locker: Address, token: Address, to: Address, amount: i128);

    fn lock(env: Env, locker: Address);
}

/// Burn/mint bridge
#[contractclient(name = "TokenMessengerClient")]
pub trait TokenMessenger {
    /// Burns `amount` of `burn_token` from `depositor` (using its allowance)
    /// and returns the bridge nonce of the deposit.
    fn deposit_for_burn(
        env: Env,
        depositor: Address,
        amount: i128,
        destination_domain: u32,
        mint_recipient: BytesN<32>,
        burn_token: Address,
    ) -> u64;
}

/// Relay network gas prepayment
#[contractclient(name = "GasServiceClient")]
pub trait GasService {
    fn pay_gas_for_contract_call(
        env: Env,
        sender: Address,
        destination_chain: String,
        destination_address: String,
        payload: Bytes,
        refund_address: Address,
        token: Address,
        amount: i128,
    );
}

/// Relay network gateway (outbound side)
#[contractclient(name = "GatewayClient")]
pub trait Gateway {
    fn call_contract(
        env: Env,
        caller: Address,
        destination_chain: String,
        destination_address: String,
        payload: Bytes,
    );
}
