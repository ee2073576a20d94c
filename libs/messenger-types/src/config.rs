use soroban_sdk::{contracttype, Address};

/// Messenger configuration - immutable after initialization
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MessengerConfig {
    /// Flash-accounting liquidity engine
    pub engine: Address,
    /// Burn/mint bridge entry point
    pub token_messenger: Address,
    /// Relay network gas prepayment contract
    pub gas_service: Address,
    /// Relay network gateway (outbound dispatch, inbound delivery)
    pub gateway: Address,
    /// The only asset the bridge burns and mints
    pub settlement_token: Address,
    /// Token contract of the native currency
    pub native_token: Address,
    /// Bridge domain id of the network this instance runs on
    pub local_domain: u32,
}
