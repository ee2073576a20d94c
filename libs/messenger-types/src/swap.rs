use soroban_sdk::{contracttype, Address};

use crate::price_limit_or_extreme;

/// Identifies a pool inside the liquidity engine
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolKey {
    /// Lower token address
    pub token0: Address,
    /// Higher token address
    pub token1: Address,
    /// Fee tier in hundredths of bps
    pub fee: u32,
    pub tick_spacing: i32,
}

/// Parameters passed to the engine's swap
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapParams {
    /// True if swapping token0 for token1
    pub zero_for_one: bool,
    /// Positive for exact input, negative for exact output
    pub amount_specified: i128,
    /// Price limit for the swap
    pub sqrt_price_limit_x96: u128,
}

/// Net balance change of the locker after a swap.
///
/// Negative values are owed by the locker to the engine, positive values
/// are owed by the engine to the locker.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BalanceDelta {
    pub amount0: i128,
    pub amount1: i128,
}

impl BalanceDelta {
    /// Delta on the side the locker pays
    pub fn input(&self, zero_for_one: bool) -> i128 {
        if zero_for_one {
            self.amount0
        } else {
            self.amount1
        }
    }

    /// Delta on the side the locker receives
    pub fn output(&self, zero_for_one: bool) -> i128 {
        if zero_for_one {
            self.amount1
        } else {
            self.amount0
        }
    }
}

/// A single-pool path through the liquidity engine
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapRoute {
    pub pool_key: PoolKey,
    pub zero_for_one: bool,
    /// Zero means no limit
    pub sqrt_price_limit_x96: u128,
}

impl SwapRoute {
    pub fn token_in(&self) -> &Address {
        if self.zero_for_one {
            &self.pool_key.token0
        } else {
            &self.pool_key.token1
        }
    }

    pub fn token_out(&self) -> &Address {
        if self.zero_for_one {
            &self.pool_key.token1
        } else {
            &self.pool_key.token0
        }
    }

    /// Pool tokens must be strictly ordered
    pub fn is_well_formed(&self) -> bool {
        self.pool_key.token0 < self.pool_key.token1
    }

    /// Engine parameters for an exact-input swap of `amount_in`
    pub fn exact_input(&self, amount_in: i128) -> SwapParams {
        SwapParams {
            zero_for_one: self.zero_for_one,
            amount_specified: amount_in,
            sqrt_price_limit_x96: price_limit_or_extreme(
                self.zero_for_one,
                self.sqrt_price_limit_x96,
            ),
        }
    }
}

/// Swap performed on the source domain before bridging
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourceSwap {
    pub route: SwapRoute,
    pub amount_in: i128,
    pub amount_out_minimum: i128,
}

/// Follow-up swap performed on the destination domain.
///
/// The input amount is whatever the bridge delivered.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DestinationSwap {
    pub route: SwapRoute,
    pub amount_out_minimum: i128,
}
