use soroban_sdk::{contractclient, Address, Env, Vec};

use crate::types::AssetAmount;

/// Strategy client interface - manually defined so any venue adapter exposing
/// these functions can be bound to the pool
#[contractclient(name = "Client")]
pub trait StrategyInterface {
    /// Returns the pool this strategy was deployed for
    fn pool(e: Env) -> Address;

    /// Pulls `amount` of `asset` from the pool into the venue
    fn invest(e: Env, asset: Address, decimals: u32, amount: i128);

    /// Returns at least `value` (common units) worth of assets to the pool
    fn withdraw(e: Env, value: i128) -> Vec<AssetAmount>;

    /// Returns everything the strategy manages to the pool
    fn withdraw_all(e: Env) -> Vec<AssetAmount>;

    /// Currently managed value in common units
    fn report_managed_value(e: Env) -> i128;
}
