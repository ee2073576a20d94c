use soroban_sdk::{contracttype, Address, BytesN};

use crate::{DestinationSwap, SourceSwap};

/// Relay gas prepaid by the caller for execution on the destination domain
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GasPayment {
    pub token: Address,
    pub amount: i128,
}

/// Full outbound request: swap locally, bridge, then swap remotely.
///
/// The bridged amount is always minted to the registered sibling messenger.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapAndBridgeRequest {
    pub source_swap: SourceSwap,
    pub destination_domain: u32,
    pub destination_swap: DestinationSwap,
    /// Final recipient of the destination swap output
    pub recipient: Address,
    pub gas: GasPayment,
}

/// Message relayed to the sibling messenger.
///
/// Immutable once dispatched; the Keccak-256 hash of its XDR encoding
/// identifies it on both sides.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RelayPayload {
    /// Settlement amount minted on the destination domain
    pub amount: i128,
    /// Local trace id assigned by the sending messenger
    pub trace_id: u64,
    /// Nonce returned by the bridge for the matching burn
    pub burn_nonce: u64,
    pub swap: DestinationSwap,
    pub recipient: Address,
}

/// Result of a successful outbound request
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferReceipt {
    pub burn_nonce: u64,
    pub trace_id: u64,
    pub fee: i128,
    pub net_amount: i128,
    pub payload_hash: BytesN<32>,
}

/// How an inbound payload was resolved
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RemoteOutcome {
    /// Destination swap completed; output amount delivered to the recipient
    Swapped(i128),
    /// Payload could not be executed; settlement amount returned to the recipient
    Refunded(i128),
}
