use soroban_sdk::{
    contracttype, unwrap::UnwrapOptimized, Address, Env, IntoVal, Symbol, TryFromVal, Val, Vec,
};

use crate::types::{AssetConfig, PoolConfig};

/********** Ledger Thresholds **********/

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days
const LEDGER_THRESHOLD_SHARED: u32 = ONE_DAY_LEDGERS * 45; // ~ 45 days
const LEDGER_BUMP_SHARED: u32 = LEDGER_THRESHOLD_SHARED + ONE_DAY_LEDGERS; // ~ 46 days
const LEDGER_THRESHOLD_USER: u32 = ONE_DAY_LEDGERS * 100; // ~ 100 days
const LEDGER_BUMP_USER: u32 = LEDGER_THRESHOLD_USER + 20 * ONE_DAY_LEDGERS; // ~ 120 days

/********** Storage Types **********/

const CONFIG_KEY: &str = "Config";
const TOTAL_SHARES_KEY: &str = "TotalShares";
const ASSET_LIST_KEY: &str = "AssetList";
const STRATEGY_KEY: &str = "Strategy";
const MANAGED_KEY: &str = "Managed";
const LAST_REBALANCE_KEY: &str = "LastRebal";

#[derive(Clone)]
#[contracttype]
pub enum PoolDataKey {
    // Registry entry for an asset
    Asset(Address),
    // Uninvested raw balance held for an asset
    Idle(Address),
    // Share balance of a depositor
    Shares(Address),
}

/********** Storage **********/

/// Bump the instance rent for the contract
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

/// Fetch an entry in persistent storage that has a default value if it doesn't exist
fn get_persistent_default<K: IntoVal<Env, Val>, V: TryFromVal<Env, Val>, F: FnOnce() -> V>(
    e: &Env,
    key: &K,
    default: F,
    bump_threshold: u32,
    bump_amount: u32,
) -> V {
    if let Some(result) = e.storage().persistent().get::<K, V>(key) {
        e.storage()
            .persistent()
            .extend_ttl(key, bump_threshold, bump_amount);
        result
    } else {
        default()
    }
}

/********** Config **********/

pub fn get_config(e: &Env) -> PoolConfig {
    e.storage()
        .instance()
        .get(&Symbol::new(e, CONFIG_KEY))
        .unwrap_optimized()
}

pub fn set_config(e: &Env, config: &PoolConfig) {
    e.storage()
        .instance()
        .set::<Symbol, PoolConfig>(&Symbol::new(e, CONFIG_KEY), config);
}

/********** Registry **********/

/// Fetch the registered assets in registration order
pub fn get_asset_list(e: &Env) -> Vec<Address> {
    e.storage()
        .instance()
        .get(&Symbol::new(e, ASSET_LIST_KEY))
        .unwrap_or(Vec::new(e))
}

pub fn set_asset_list(e: &Env, assets: &Vec<Address>) {
    e.storage()
        .instance()
        .set::<Symbol, Vec<Address>>(&Symbol::new(e, ASSET_LIST_KEY), assets);
}

pub fn get_asset(e: &Env, asset: &Address) -> Option<AssetConfig> {
    let key = PoolDataKey::Asset(asset.clone());
    let config = e.storage().persistent().get::<PoolDataKey, AssetConfig>(&key);
    if config.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
    }
    config
}

pub fn set_asset(e: &Env, asset: &Address, config: &AssetConfig) {
    let key = PoolDataKey::Asset(asset.clone());
    e.storage()
        .persistent()
        .set::<PoolDataKey, AssetConfig>(&key, config);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

pub fn has_asset(e: &Env, asset: &Address) -> bool {
    let key = PoolDataKey::Asset(asset.clone());
    e.storage().persistent().has(&key)
}

/********** Idle Balances **********/

/// Fetch the idle raw balance of an asset, 0 if never credited
pub fn get_idle(e: &Env, asset: &Address) -> i128 {
    let key = PoolDataKey::Idle(asset.clone());
    get_persistent_default(e, &key, || 0i128, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED)
}

pub fn set_idle(e: &Env, asset: &Address, amount: &i128) {
    let key = PoolDataKey::Idle(asset.clone());
    e.storage().persistent().set::<PoolDataKey, i128>(&key, amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

/********** Shares **********/

pub fn get_total_shares(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&Symbol::new(e, TOTAL_SHARES_KEY))
        .unwrap_or(0)
}

pub fn set_total_shares(e: &Env, total_shares: &i128) {
    e.storage()
        .instance()
        .set::<Symbol, i128>(&Symbol::new(e, TOTAL_SHARES_KEY), total_shares);
}

pub fn get_shares(e: &Env, user: &Address) -> i128 {
    let key = PoolDataKey::Shares(user.clone());
    get_persistent_default(e, &key, || 0i128, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER)
}

pub fn set_shares(e: &Env, user: &Address, shares: &i128) {
    let key = PoolDataKey::Shares(user.clone());
    e.storage().persistent().set::<PoolDataKey, i128>(&key, shares);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
}

/********** Strategy **********/

pub fn get_strategy(e: &Env) -> Option<Address> {
    e.storage().instance().get(&Symbol::new(e, STRATEGY_KEY))
}

pub fn set_strategy(e: &Env, strategy: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, STRATEGY_KEY), strategy);
}

/// Last managed value observed from the strategy, in common units
pub fn get_managed_checkpoint(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&Symbol::new(e, MANAGED_KEY))
        .unwrap_or(0)
}

pub fn set_managed_checkpoint(e: &Env, value: &i128) {
    e.storage()
        .instance()
        .set::<Symbol, i128>(&Symbol::new(e, MANAGED_KEY), value);
}

pub fn get_last_rebalance(e: &Env) -> Option<u64> {
    e.storage()
        .instance()
        .get(&Symbol::new(e, LAST_REBALANCE_KEY))
}

pub fn set_last_rebalance(e: &Env, timestamp: u64) {
    e.storage()
        .instance()
        .set::<Symbol, u64>(&Symbol::new(e, LAST_REBALANCE_KEY), &timestamp);
}
