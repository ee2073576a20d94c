//! Fakes for the external collaborators and a fully wired messenger.

use messenger_types::{
    DestinationSwap, GasPayment, MessengerConfig, PoolKey, SourceSwap, SwapAndBridgeRequest,
    SwapRoute,
};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{token, Address, BytesN, Env, String};

use crate::{SwapMessenger, SwapMessengerClient};
use bridge::{MockTokenMessenger, MockTokenMessengerClient};
use engine::{MockEngine, MockEngineClient};
use relay::{MockGasService, MockGasServiceClient, MockGateway, MockGatewayClient};

pub const DEFAULT_FEE: i128 = 10_000;
pub const LOCAL_DOMAIN: u32 = 27;
pub const REMOTE_DOMAIN: u32 = 6;
pub const SIBLING: &str = "CSIBLINGMESSENGERONBASE";
pub const SIBLING_MINT: [u8; 32] = [0x5b; 32];
pub const GAS: i128 = 300;

const ENGINE_LIQUIDITY: i128 = 1_000_000_000_000_000;

pub mod engine {
    use messenger_types::{BalanceDelta, PoolKey, SwapParams};
    use soroban_fixed_point_math::FixedPoint;
    use soroban_sdk::{contract, contractimpl, contracttype, token, Address, Bytes, Env};

    #[contracttype]
    #[derive(Clone)]
    enum EngineKey {
        Locker,
        Price(Address),
        MaxInput,
        Synced(Address),
        Delta(Address),
        Outstanding,
        Swaps,
    }

    /// Fixed-price flash-accounting engine
    #[contract]
    pub struct MockEngine;

    fn require_locker(env: &Env, locker: &Address) {
        locker.require_auth();
        let current: Option<Address> = env.storage().instance().get(&EngineKey::Locker);
        if current.as_ref() != Some(locker) {
            panic!("Not locker");
        }
    }

    fn synced(env: &Env, token: &Address) -> i128 {
        env.storage()
            .instance()
            .get(&EngineKey::Synced(token.clone()))
            .unwrap_or(0)
    }

    /// Positive while the engine owes the locker
    fn add_delta(env: &Env, token: &Address, amount: i128) {
        let key = EngineKey::Delta(token.clone());
        let before: i128 = env.storage().instance().get(&key).unwrap_or(0);
        let after = before + amount;
        env.storage().instance().set(&key, &after);

        let outstanding: u32 = env
            .storage()
            .instance()
            .get(&EngineKey::Outstanding)
            .unwrap_or(0);
        let outstanding = match (before == 0, after == 0) {
            (true, false) => outstanding + 1,
            (false, true) => outstanding - 1,
            _ => outstanding,
        };
        env.storage()
            .instance()
            .set(&EngineKey::Outstanding, &outstanding);
    }

    #[contractimpl]
    impl MockEngine {
        /// Units of output per unit of `token_in`, as `num / den`. Defaults to 1:1.
        pub fn set_price(env: Env, token_in: Address, num: i128, den: i128) {
            env.storage()
                .instance()
                .set(&EngineKey::Price(token_in), &(num, den));
        }

        /// Cap on the input filled by a single swap
        pub fn set_max_input(env: Env, max_input: i128) {
            env.storage().instance().set(&EngineKey::MaxInput, &max_input);
        }

        /// Take the current balance of `token` as already accounted for
        pub fn sync(env: Env, token: Address) {
            let balance = token::Client::new(&env, &token).balance(&env.current_contract_address());
            env.storage()
                .instance()
                .set(&EngineKey::Synced(token), &balance);
        }

        pub fn locker(env: Env) -> Option<Address> {
            env.storage().instance().get(&EngineKey::Locker)
        }

        pub fn swap_count(env: Env) -> u32 {
            env.storage().instance().get(&EngineKey::Swaps).unwrap_or(0)
        }

        pub fn unlock(env: Env, locker: Address) {
            locker.require_auth();
            if env.storage().instance().has(&EngineKey::Locker) {
                panic!("Engine locked");
            }
            env.storage().instance().set(&EngineKey::Locker, &locker);
        }

        pub fn swap(
            env: Env,
            locker: Address,
            key: PoolKey,
            params: SwapParams,
            _hook_data: Bytes,
        ) -> BalanceDelta {
            require_locker(&env, &locker);
            let (token_in, token_out) = if params.zero_for_one {
                (key.token0, key.token1)
            } else {
                (key.token1, key.token0)
            };

            let mut amount_in = params.amount_specified;
            if let Some(max_input) = env
                .storage()
                .instance()
                .get::<_, i128>(&EngineKey::MaxInput)
            {
                amount_in = amount_in.min(max_input);
            }
            let (num, den): (i128, i128) = env
                .storage()
                .instance()
                .get(&EngineKey::Price(token_in.clone()))
                .unwrap_or((1, 1));
            let amount_out = amount_in.fixed_mul_floor(num, den).unwrap();

            add_delta(&env, &token_in, -amount_in);
            add_delta(&env, &token_out, amount_out);
            let swaps = Self::swap_count(env.clone()) + 1;
            env.storage().instance().set(&EngineKey::Swaps, &swaps);

            if params.zero_for_one {
                BalanceDelta {
                    amount0: -amount_in,
                    amount1: amount_out,
                }
            } else {
                BalanceDelta {
                    amount0: amount_out,
                    amount1: -amount_in,
                }
            }
        }

        pub fn settle(env: Env, locker: Address, token: Address) -> i128 {
            require_locker(&env, &locker);
            let balance = token::Client::new(&env, &token).balance(&env.current_contract_address());
            let paid = balance - synced(&env, &token);
            env.storage()
                .instance()
                .set(&EngineKey::Synced(token.clone()), &balance);
            add_delta(&env, &token, paid);
            paid
        }

        pub fn take(env: Env, locker: Address, token: Address, to: Address, amount: i128) {
            require_locker(&env, &locker);
            token::Client::new(&env, &token).transfer(&env.current_contract_address(), &to, &amount);
            let remaining = synced(&env, &token) - amount;
            env.storage()
                .instance()
                .set(&EngineKey::Synced(token.clone()), &remaining);
            add_delta(&env, &token, -amount);
        }

        pub fn lock(env: Env, locker: Address) {
            require_locker(&env, &locker);
            let outstanding: u32 = env
                .storage()
                .instance()
                .get(&EngineKey::Outstanding)
                .unwrap_or(0);
            if outstanding != 0 {
                panic!("Currency not settled");
            }
            env.storage().instance().remove(&EngineKey::Locker);
        }
    }
}

pub mod bridge {
    use soroban_sdk::{contract, contractimpl, contracttype, token, Address, BytesN, Env};

    #[contracttype]
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct Deposit {
        pub nonce: u64,
        pub amount: i128,
        pub destination_domain: u32,
        pub mint_recipient: BytesN<32>,
        pub depositor: Address,
        pub burn_token: Address,
    }

    #[contracttype]
    #[derive(Clone)]
    enum BridgeKey {
        Nonce,
        Halted,
        Last,
    }

    /// Burns through the depositor's allowance and hands out sequential nonces
    #[contract]
    pub struct MockTokenMessenger;

    #[contractimpl]
    impl MockTokenMessenger {
        pub fn set_halted(env: Env, halted: bool) {
            env.storage().instance().set(&BridgeKey::Halted, &halted);
        }

        pub fn next_nonce(env: Env) -> u64 {
            env.storage().instance().get(&BridgeKey::Nonce).unwrap_or(0)
        }

        pub fn last_deposit(env: Env) -> Option<Deposit> {
            env.storage().instance().get(&BridgeKey::Last)
        }

        pub fn deposit_for_burn(
            env: Env,
            depositor: Address,
            amount: i128,
            destination_domain: u32,
            mint_recipient: BytesN<32>,
            burn_token: Address,
        ) -> u64 {
            let halted: bool = env
                .storage()
                .instance()
                .get(&BridgeKey::Halted)
                .unwrap_or(false);
            if halted {
                panic!("Bridge halted");
            }
            token::Client::new(&env, &burn_token).burn_from(
                &env.current_contract_address(),
                &depositor,
                &amount,
            );

            let nonce = Self::next_nonce(env.clone());
            env.storage().instance().set(&BridgeKey::Nonce, &(nonce + 1));
            env.storage().instance().set(
                &BridgeKey::Last,
                &Deposit {
                    nonce,
                    amount,
                    destination_domain,
                    mint_recipient,
                    depositor,
                    burn_token,
                },
            );
            nonce
        }
    }
}

pub mod relay {
    use messenger_types::RemoteOutcome;
    use soroban_sdk::{contract, contractimpl, contracttype, Address, Bytes, Env, String};

    use crate::SwapMessengerClient;

    #[contracttype]
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct GasPaid {
        pub sender: Address,
        pub destination_chain: String,
        pub destination_address: String,
        pub payload: Bytes,
        pub refund_address: Address,
        pub token: Address,
        pub amount: i128,
    }

    #[contracttype]
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct Call {
        pub caller: Address,
        pub destination_chain: String,
        pub destination_address: String,
        pub payload: Bytes,
    }

    #[contracttype]
    #[derive(Clone)]
    enum RelayKey {
        LastPayment,
        LastCall,
        Calls,
    }

    #[contract]
    pub struct MockGasService;

    #[contractimpl]
    impl MockGasService {
        #[allow(clippy::too_many_arguments)]
        pub fn pay_gas_for_contract_call(
            env: Env,
            sender: Address,
            destination_chain: String,
            destination_address: String,
            payload: Bytes,
            refund_address: Address,
            token: Address,
            amount: i128,
        ) {
            sender.require_auth();
            env.storage().instance().set(
                &RelayKey::LastPayment,
                &GasPaid {
                    sender,
                    destination_chain,
                    destination_address,
                    payload,
                    refund_address,
                    token,
                    amount,
                },
            );
        }

        pub fn last_payment(env: Env) -> Option<GasPaid> {
            env.storage().instance().get(&RelayKey::LastPayment)
        }
    }

    /// Records outbound calls and delivers inbound ones
    #[contract]
    pub struct MockGateway;

    #[contractimpl]
    impl MockGateway {
        pub fn call_contract(
            env: Env,
            caller: Address,
            destination_chain: String,
            destination_address: String,
            payload: Bytes,
        ) {
            caller.require_auth();
            env.storage().instance().set(
                &RelayKey::LastCall,
                &Call {
                    caller,
                    destination_chain,
                    destination_address,
                    payload,
                },
            );
            let calls = Self::call_count(env.clone()) + 1;
            env.storage().instance().set(&RelayKey::Calls, &calls);
        }

        pub fn last_call(env: Env) -> Option<Call> {
            env.storage().instance().get(&RelayKey::LastCall)
        }

        pub fn call_count(env: Env) -> u32 {
            env.storage().instance().get(&RelayKey::Calls).unwrap_or(0)
        }

        /// Hand an approved inbound message to `messenger`
        pub fn deliver(
            env: Env,
            messenger: Address,
            source_chain: String,
            source_address: String,
            payload: Bytes,
        ) -> RemoteOutcome {
            SwapMessengerClient::new(&env, &messenger).execute(
                &env.current_contract_address(),
                &source_chain,
                &source_address,
                &payload,
            )
        }
    }
}

/// A messenger wired to fresh fakes, with an engine pool between the
/// settlement token and one other token.
pub struct Setup<'a> {
    pub env: Env,
    pub admin: Address,
    pub user: Address,
    pub messenger: SwapMessengerClient<'a>,
    pub settlement: Address,
    pub other_token: Address,
    pub native: Address,
    pub engine: MockEngineClient<'a>,
    pub bridge: MockTokenMessengerClient<'a>,
    pub gas: MockGasServiceClient<'a>,
    pub gateway: MockGatewayClient<'a>,
}

impl<'a> Setup<'a> {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let user = Address::generate(&env);
        let issuer = Address::generate(&env);
        let settlement = env
            .register_stellar_asset_contract_v2(issuer.clone())
            .address();
        let other_token = env
            .register_stellar_asset_contract_v2(issuer.clone())
            .address();
        let native = env.register_stellar_asset_contract_v2(issuer).address();

        let engine = MockEngineClient::new(&env, &env.register(MockEngine, ()));
        let bridge = MockTokenMessengerClient::new(&env, &env.register(MockTokenMessenger, ()));
        let gas = MockGasServiceClient::new(&env, &env.register(MockGasService, ()));
        let gateway = MockGatewayClient::new(&env, &env.register(MockGateway, ()));
        let messenger = SwapMessengerClient::new(&env, &env.register(SwapMessenger, ()));

        let config = MessengerConfig {
            engine: engine.address.clone(),
            token_messenger: bridge.address.clone(),
            gas_service: gas.address.clone(),
            gateway: gateway.address.clone(),
            settlement_token: settlement.clone(),
            native_token: native.clone(),
            local_domain: LOCAL_DOMAIN,
        };
        messenger.initialize(&admin, &config, &DEFAULT_FEE);

        let setup = Self {
            env,
            admin,
            user,
            messenger,
            settlement,
            other_token,
            native,
            engine,
            bridge,
            gas,
            gateway,
        };
        for token in [&setup.settlement, &setup.other_token] {
            setup.mint(token, &setup.engine.address, ENGINE_LIQUIDITY);
            setup.engine.sync(token);
        }
        setup
    }

    pub fn mint(&self, token: &Address, to: &Address, amount: i128) {
        token::StellarAssetClient::new(&self.env, token).mint(to, &amount);
    }

    pub fn balance(&self, token: &Address, who: &Address) -> i128 {
        token::Client::new(&self.env, token).balance(who)
    }

    pub fn pool_key(&self) -> PoolKey {
        let (token0, token1) = if self.settlement < self.other_token {
            (self.settlement.clone(), self.other_token.clone())
        } else {
            (self.other_token.clone(), self.settlement.clone())
        };
        PoolKey {
            token0,
            token1,
            fee: 500,
            tick_spacing: 10,
        }
    }

    /// Route through the test pool spending `token_in`
    pub fn route_from(&self, token_in: &Address) -> SwapRoute {
        let pool_key = self.pool_key();
        SwapRoute {
            zero_for_one: *token_in == pool_key.token0,
            pool_key,
            sqrt_price_limit_x96: 0,
        }
    }

    pub fn set_price(&self, token_in: &Address, num: i128, den: i128) {
        self.engine.set_price(token_in, &num, &den);
    }

    /// Admit `domain` and register the sibling where the relay knows the chain
    pub fn open_domain(&self, domain: u32) {
        self.messenger.allow_domain(&self.admin, &domain);
        if self.messenger.chain_name(&domain).is_some() {
            self.messenger.set_remote_messenger(
                &self.admin,
                &domain,
                &String::from_str(&self.env, SIBLING),
                &BytesN::from_array(&self.env, &SIBLING_MINT),
            );
        }
    }

    /// Settlement token into the other token
    pub fn destination_swap(&self, amount_out_minimum: i128) -> DestinationSwap {
        DestinationSwap {
            route: self.route_from(&self.settlement),
            amount_out_minimum,
        }
    }

    /// Other token into settlement, bridged to the remote domain
    pub fn request(&self, amount_in: i128, amount_out_minimum: i128) -> SwapAndBridgeRequest {
        SwapAndBridgeRequest {
            source_swap: SourceSwap {
                route: self.route_from(&self.other_token),
                amount_in,
                amount_out_minimum,
            },
            destination_domain: REMOTE_DOMAIN,
            destination_swap: self.destination_swap(0),
            recipient: Address::generate(&self.env),
            gas: GasPayment {
                token: self.native.clone(),
                amount: GAS,
            },
        }
    }

    /// Leave one transfer's fee behind as tips
    pub fn collect_tips(&self, domain: u32) {
        self.open_domain(domain);
        let payer = Address::generate(&self.env);
        self.mint(&self.settlement, &payer, 1_000_000);
        self.messenger.issue_transfer(
            &payer,
            &1_000_000,
            &domain,
            &BytesN::from_array(&self.env, &[7u8; 32]),
            &self.settlement,
        );
    }
}
