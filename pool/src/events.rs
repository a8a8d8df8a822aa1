use soroban_sdk::{Address, Env, Symbol, Vec};

use crate::types::AssetAmount;

pub struct PoolEvents {}

impl PoolEvents {
    /// Emitted when an asset is added to the registry
    ///
    /// - topics - `["register_asset", asset: Address]`
    /// - data - `[decimals: u32, index: u32]`
    pub fn register_asset(e: &Env, asset: Address, decimals: u32, index: u32) {
        let topics = (Symbol::new(e, "register_asset"), asset);
        e.events().publish(topics, (decimals, index));
    }

    /// Emitted when an asset is deposited into the pool
    ///
    /// - topics - `["deposit", depositor: Address]`
    /// - data - `[asset: Address, amount: i128, value: i128, shares: i128]`
    ///
    /// ### Arguments
    /// * depositor - The address receiving the minted shares
    /// * asset - The deposited asset
    /// * amount - The raw amount deposited
    /// * value - The deposit normalized to common units
    /// * shares - The amount of shares minted
    pub fn deposit(e: &Env, depositor: Address, asset: Address, amount: i128, value: i128, shares: i128) {
        let topics = (Symbol::new(e, "deposit"), depositor);
        e.events().publish(topics, (asset, amount, value, shares));
    }

    /// Emitted when shares are redeemed for a basket of assets
    ///
    /// - topics - `["withdraw", depositor: Address]`
    /// - data - `[shares: i128, value: i128, basket: Vec<AssetAmount>]`
    ///
    /// ### Arguments
    /// * depositor - The address whose shares were burned
    /// * shares - The amount of shares burned
    /// * value - The value paid out in common units
    /// * basket - The raw amounts transferred per asset
    pub fn withdraw(e: &Env, depositor: Address, shares: i128, value: i128, basket: Vec<AssetAmount>) {
        let topics = (Symbol::new(e, "withdraw"), depositor);
        e.events().publish(topics, (shares, value, basket));
    }

    /// Emitted after idle balances were offered to the strategy
    ///
    /// - topics - `["rebalance", strategy: Address]`
    /// - data - `[invested_value: i128, managed_value: i128]`
    pub fn rebalance(e: &Env, strategy: Address, invested_value: i128, managed_value: i128) {
        let topics = (Symbol::new(e, "rebalance"), strategy);
        e.events().publish(topics, (invested_value, managed_value));
    }

    /// Emitted when the strategy rejects an investment, the amount stays idle
    ///
    /// - topics - `["invest_failed", strategy: Address]`
    /// - data - `[asset: Address, amount: i128]`
    pub fn invest_failed(e: &Env, strategy: Address, asset: Address, amount: i128) {
        let topics = (Symbol::new(e, "invest_failed"), strategy);
        e.events().publish(topics, (asset, amount));
    }

    /// Emitted when value is pulled back from the strategy into idle balances
    ///
    /// - topics - `["strategy_recall", strategy: Address]`
    /// - data - `[requested: i128, received: i128]`
    ///
    /// ### Arguments
    /// * requested - Value asked for in common units, 0 for a full recall
    /// * received - Value that actually arrived in common units
    pub fn strategy_recall(e: &Env, strategy: Address, requested: i128, received: i128) {
        let topics = (Symbol::new(e, "strategy_recall"), strategy);
        e.events().publish(topics, (requested, received));
    }

    /// Emitted when the strategy reports less value than last observed
    ///
    /// - topics - `["strategy_loss", strategy: Address]`
    /// - data - `[previous: i128, current: i128]`
    pub fn strategy_loss(e: &Env, strategy: Address, previous: i128, current: i128) {
        let topics = (Symbol::new(e, "strategy_loss"), strategy);
        e.events().publish(topics, (previous, current));
    }

    /// Emitted when a new strategy is bound to the pool
    ///
    /// - topics - `["set_strategy"]`
    /// - data - `[old_strategy: Option<Address>, new_strategy: Address]`
    pub fn set_strategy(e: &Env, old_strategy: Option<Address>, new_strategy: Address) {
        let topics = (Symbol::new(e, "set_strategy"),);
        e.events().publish(topics, (old_strategy, new_strategy));
    }
}
