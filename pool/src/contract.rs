use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{contract, contractclient, contractimpl, Address, Env, Vec};

use crate::constants::SCALAR_18;
use crate::pool::{self, Pool};
use crate::types::{AssetAmount, PoolConfig, RebalanceResult};
use crate::{ledger, registry, storage};

#[contract]
pub struct ValuePoolContract;

#[contractclient(name = "ValuePoolClient")]
pub trait ValuePool {
    /// Returns the pool configuration
    fn config(e: Env) -> PoolConfig;

    /// Returns the registered assets in registration order
    fn assets(e: Env) -> Vec<Address>;

    /// Returns the decimal precision the asset was registered with
    ///
    /// # Panics
    /// - `UnknownAsset` if the asset is not registered
    fn asset_decimals(e: Env, asset: Address) -> u32;

    /// Converts a raw amount of `asset` to common units (18 decimals)
    fn normalize(e: Env, asset: Address, amount: i128) -> i128;

    /// Converts common units to a raw amount of `asset`, rounding down
    fn denormalize(e: Env, asset: Address, value: i128) -> i128;

    /// Returns the share balance of `user`
    fn balance_of(e: Env, user: Address) -> i128;

    /// Returns the total number of shares outstanding
    fn total_supply(e: Env) -> i128;

    /// Returns the uninvested raw balance the pool holds of `asset`
    fn idle_balance(e: Env, asset: Address) -> i128;

    /// Returns the currently bound strategy, if any
    fn strategy(e: Env) -> Option<Address>;

    /// Returns the value reported by the bound strategy in common units
    fn managed_value(e: Env) -> i128;

    /// Returns idle plus managed value in common units
    ///
    /// Used to price both deposits and withdrawals.
    fn total_balance_of_pool(e: Env) -> i128;

    /// Returns the value of one share (1e18) in common units, 1e18 while empty
    fn price_per_share(e: Env) -> i128;

    /// (Controller only) Adds an asset to the registry
    ///
    /// # Arguments
    /// * `asset` - Token contract address, also the custody reference
    /// * `decimals` - Native precision of the token, at most 18
    ///
    /// # Panics
    /// - `DuplicateAsset` if the asset is already registered
    /// - `InvalidDecimals` if decimals > 18
    /// - `MaxAssetsReached` if the registry is full
    fn register_asset(e: Env, asset: Address, decimals: u32);

    /// (Controller only) Binds a strategy, recalling everything from the old one first
    ///
    /// # Panics
    /// - `StrategyMismatch` if the strategy was deployed for another pool
    /// - `RecallIncomplete` if the old strategy cannot be drained
    fn set_strategy(e: Env, strategy: Address);

    /// Deposits `amount` of `asset` and mints shares to `depositor`
    ///
    /// # Returns
    /// Amount of shares minted
    ///
    /// # Panics
    /// - `ZeroAmount` if amount <= 0
    /// - `UnknownAsset` if the asset is not registered
    /// - `ZeroValueDeposit` if the deposit is worth less than one share
    fn deposit(e: Env, depositor: Address, asset: Address, amount: i128) -> i128;

    /// Moves all idle balances into the bound strategy (permissionless)
    ///
    /// # Returns
    /// Per-asset outcome; rejected investments stay idle
    ///
    /// # Panics
    /// - `NoStrategy` if no strategy is bound
    /// - `RebalanceTooSoon` if the minimum interval has not elapsed
    fn rebalance(e: Env) -> Vec<RebalanceResult>;

    /// Burns `shares` and transfers their value to `depositor` as a basket
    ///
    /// # Returns
    /// The raw amounts transferred per asset
    ///
    /// # Panics
    /// - `ZeroAmount` if shares <= 0
    /// - `InsufficientShares` if the depositor holds fewer shares
    /// - `StrategyWithdrawalFailed` if the strategy cannot cover the shortfall
    fn withdraw(e: Env, depositor: Address, shares: i128) -> Vec<AssetAmount>;
}

#[contractimpl]
impl ValuePoolContract {
    /// Initializes the pool
    ///
    /// # Arguments
    /// * `controller` - Address allowed to register assets and bind strategies
    /// * `min_rebalance_interval` - Seconds between rebalances, 0 for no limit
    /// * `partial_withdrawals` - Pay out what is available when a recall falls short
    pub fn __constructor(
        e: Env,
        controller: Address,
        min_rebalance_interval: u64,
        partial_withdrawals: bool,
    ) {
        pool::execute_initialize(
            &e,
            &PoolConfig {
                controller,
                min_rebalance_interval,
                partial_withdrawals,
            },
        );
        storage::extend_instance(&e);
    }
}

#[contractimpl]
impl ValuePool for ValuePoolContract {
    fn config(e: Env) -> PoolConfig {
        storage::extend_instance(&e);
        storage::get_config(&e)
    }

    fn assets(e: Env) -> Vec<Address> {
        storage::extend_instance(&e);
        storage::get_asset_list(&e)
    }

    fn asset_decimals(e: Env, asset: Address) -> u32 {
        storage::extend_instance(&e);
        registry::load(&e, &asset).decimals
    }

    fn normalize(e: Env, asset: Address, amount: i128) -> i128 {
        storage::extend_instance(&e);
        registry::normalize(&e, &registry::load(&e, &asset), amount)
    }

    fn denormalize(e: Env, asset: Address, value: i128) -> i128 {
        storage::extend_instance(&e);
        registry::denormalize(&e, &registry::load(&e, &asset), value)
    }

    fn balance_of(e: Env, user: Address) -> i128 {
        storage::extend_instance(&e);
        ledger::balance_of(&e, &user)
    }

    fn total_supply(e: Env) -> i128 {
        storage::extend_instance(&e);
        ledger::total_supply(&e)
    }

    fn idle_balance(e: Env, asset: Address) -> i128 {
        storage::extend_instance(&e);
        storage::get_idle(&e, &asset)
    }

    fn strategy(e: Env) -> Option<Address> {
        storage::extend_instance(&e);
        storage::get_strategy(&e)
    }

    fn managed_value(e: Env) -> i128 {
        storage::extend_instance(&e);
        Pool::load(&e).managed_value(&e)
    }

    fn total_balance_of_pool(e: Env) -> i128 {
        storage::extend_instance(&e);
        Pool::load(&e).total_value(&e)
    }

    fn price_per_share(e: Env) -> i128 {
        storage::extend_instance(&e);
        let total_shares = ledger::total_supply(&e);
        if total_shares == 0 {
            return SCALAR_18;
        }
        let total_value = Pool::load(&e).total_value(&e);
        total_value.fixed_mul_floor(&e, &SCALAR_18, &total_shares)
    }

    fn register_asset(e: Env, asset: Address, decimals: u32) {
        storage::extend_instance(&e);
        storage::get_config(&e).controller.require_auth();

        pool::execute_register_asset(&e, &asset, decimals);
    }

    fn set_strategy(e: Env, strategy: Address) {
        storage::extend_instance(&e);
        storage::get_config(&e).controller.require_auth();

        pool::execute_set_strategy(&e, &strategy);
    }

    fn deposit(e: Env, depositor: Address, asset: Address, amount: i128) -> i128 {
        storage::extend_instance(&e);
        depositor.require_auth();

        pool::execute_deposit(&e, &depositor, &asset, amount)
    }

    fn rebalance(e: Env) -> Vec<RebalanceResult> {
        storage::extend_instance(&e);
        pool::execute_rebalance(&e)
    }

    fn withdraw(e: Env, depositor: Address, shares: i128) -> Vec<AssetAmount> {
        storage::extend_instance(&e);
        depositor.require_auth();

        pool::execute_withdraw(&e, &depositor, shares)
    }
}
