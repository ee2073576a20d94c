use messenger_types::interfaces::LiquidityEngineClient;
use messenger_types::{BalanceDelta, SwapRoute};
use soroban_sdk::{token, Address, Bytes, Env};

use crate::error::Error;
use crate::invariants;

/// Amounts actually exchanged by a local swap
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapOutcome {
    pub amount_in: i128,
    pub amount_out: i128,
}

/// An open flash-accounting session with the liquidity engine.
///
/// The engine authenticates the locker (this contract) on every call, and
/// refuses to close the session while any delta is outstanding.
struct EngineSession<'a> {
    env: &'a Env,
    engine: LiquidityEngineClient<'a>,
    locker: Address,
}

impl<'a> EngineSession<'a> {
    fn open(env: &'a Env, engine: &Address) -> Self {
        let engine = LiquidityEngineClient::new(env, engine);
        let locker = env.current_contract_address();
        engine.unlock(&locker);
        Self {
            env,
            engine,
            locker,
        }
    }

    fn swap(&self, route: &SwapRoute, amount_in: i128) -> BalanceDelta {
        self.engine.swap(
            &self.locker,
            &route.pool_key,
            &route.exact_input(amount_in),
            &Bytes::new(self.env),
        )
    }

    /// Pay `amount` of `token` owed to the engine
    fn settle(&self, token: &Address, amount: i128) -> Result<(), Error> {
        token::Client::new(self.env, token).transfer(&self.locker, &self.engine.address, &amount);
        let credited = self.engine.settle(&self.locker, token);
        if credited != amount {
            return Err(Error::UnexpectedDelta);
        }
        Ok(())
    }

    /// Withdraw `amount` of `token` owed by the engine
    fn take(&self, token: &Address, to: &Address, amount: i128) {
        self.engine.take(&self.locker, token, to, &amount);
    }

    fn close(self) {
        self.engine.lock(&self.locker);
    }
}

/// Swap exactly `amount_in` along `route`, delivering the output to `to`.
///
/// The input tokens must already be held by this contract. Input left
/// unfilled by the engine stays with this contract; the caller decides
/// where it goes.
pub fn execute(
    env: &Env,
    engine: &Address,
    route: &SwapRoute,
    amount_in: i128,
    amount_out_minimum: i128,
    to: &Address,
) -> Result<SwapOutcome, Error> {
    if amount_in <= 0 {
        return Err(Error::InvalidAmount);
    }
    if !route.is_well_formed() {
        return Err(Error::InvalidRoute);
    }

    let session = EngineSession::open(env, engine);
    let delta = session.swap(route, amount_in);

    let paid = -delta.input(route.zero_for_one);
    let received = delta.output(route.zero_for_one);
    if !invariants::exact_input_delta_valid(amount_in, paid, received) {
        return Err(Error::UnexpectedDelta);
    }
    if !invariants::slippage_respected(received, amount_out_minimum) {
        return Err(Error::InsufficientOutput);
    }

    if paid > 0 {
        session.settle(route.token_in(), paid)?;
    }
    if received > 0 {
        session.take(route.token_out(), to, received);
    }
    session.close();

    Ok(SwapOutcome {
        amount_in: paid,
        amount_out: received,
    })
}
