use soroban_sdk::{Address, Env, Symbol, Vec};

use crate::types::AssetAmount;

pub struct StrategyEvents {}

impl StrategyEvents {
    /// Emitted when the pool moves funds into the venue
    ///
    /// - topics - `["invest", asset: Address]`
    /// - data - `[amount: i128, managed_value: i128]`
    pub fn invest(e: &Env, asset: Address, amount: i128, managed_value: i128) {
        let topics = (Symbol::new(e, "invest"), asset);
        e.events().publish(topics, (amount, managed_value));
    }

    /// Emitted when funds are returned to the pool
    ///
    /// - topics - `["divest", pool: Address]`
    /// - data - `[requested: i128, returned: Vec<AssetAmount>]`
    ///
    /// ### Arguments
    /// * requested - Value asked for in common units, 0 for a full recall
    /// * returned - Raw amounts sent back per asset
    pub fn divest(e: &Env, pool: Address, requested: i128, returned: Vec<AssetAmount>) {
        let topics = (Symbol::new(e, "divest"), pool);
        e.events().publish(topics, (requested, returned));
    }

    /// Emitted when the venue is paused or resumed
    ///
    /// - topics - `["set_status"]`
    /// - data - `[admin: Address, paused: bool]`
    pub fn set_status(e: &Env, admin: Address, paused: bool) {
        let topics = (Symbol::new(e, "set_status"),);
        e.events().publish(topics, (admin, paused));
    }
}
