use messenger_types::interfaces::{GasServiceClient, GatewayClient};
use messenger_types::{DestinationSwap, GasPayment, MessengerConfig, RelayPayload};
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{token, Address, Bytes, BytesN, Env};

use crate::domains::relay_target;
use crate::error::Error;
use crate::{events, storage};

/// A payload handed to the relay network
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Dispatched {
    pub trace_id: u64,
    pub payload_hash: BytesN<32>,
}

pub fn encode(env: &Env, payload: &RelayPayload) -> Bytes {
    payload.clone().to_xdr(env)
}

pub fn payload_hash(env: &Env, encoded: &Bytes) -> BytesN<32> {
    env.crypto().keccak256(encoded).to_bytes()
}

/// Send the follow-up swap to the sibling messenger on `destination_domain`.
///
/// Relay gas is paid by `caller`, who also receives any gas refund.
pub fn dispatch(
    env: &Env,
    config: &MessengerConfig,
    caller: &Address,
    destination_domain: u32,
    amount: i128,
    burn_nonce: u64,
    swap: &DestinationSwap,
    recipient: &Address,
    gas: &GasPayment,
) -> Result<Dispatched, Error> {
    if gas.amount <= 0 {
        return Err(Error::InvalidGasPayment);
    }
    let (chain, sibling) = relay_target(env, destination_domain)?;

    let trace_id = storage::next_trace_id(env);
    let payload = RelayPayload {
        amount,
        trace_id,
        burn_nonce,
        swap: swap.clone(),
        recipient: recipient.clone(),
    };
    let encoded = encode(env, &payload);
    let payload_hash = payload_hash(env, &encoded);

    let this = env.current_contract_address();
    token::Client::new(env, &gas.token).transfer(caller, &config.gas_service, &gas.amount);
    GasServiceClient::new(env, &config.gas_service).pay_gas_for_contract_call(
        &this,
        &chain,
        &sibling,
        &encoded,
        caller,
        &gas.token,
        &gas.amount,
    );
    GatewayClient::new(env, &config.gateway).call_contract(&this, &chain, &sibling, &encoded);

    events::transfer_pending(
        env,
        trace_id,
        &payload_hash,
        amount,
        destination_domain,
        recipient,
    );

    Ok(Dispatched {
        trace_id,
        payload_hash,
    })
}
