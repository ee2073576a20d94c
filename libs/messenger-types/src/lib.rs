#![no_std]

mod access;
mod config;
mod domain;
pub mod interfaces;
mod message;
mod swap;

pub use access::*;
pub use config::*;
pub use domain::*;
pub use message::*;
pub use swap::*;

/// Minimum sqrt price accepted by the liquidity engine
pub const MIN_SQRT_RATIO: u128 = 18446743374134;

/// Maximum sqrt price accepted by the liquidity engine
pub const MAX_SQRT_RATIO: u128 = 340275971719517849884101479065584693834;

/// Resolve a zero price limit to the extreme bound for the swap direction
pub fn price_limit_or_extreme(zero_for_one: bool, sqrt_price_limit_x96: u128) -> u128 {
    if sqrt_price_limit_x96 != 0 {
        return sqrt_price_limit_x96;
    }
    if zero_for_one {
        MIN_SQRT_RATIO + 1
    } else {
        MAX_SQRT_RATIO - 1
    }
}
