use soroban_sdk::{contracttype, unwrap::UnwrapOptimized, Address, Env, Symbol, Vec};

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days
const LEDGER_THRESHOLD_SHARED: u32 = ONE_DAY_LEDGERS * 45; // ~ 45 days
const LEDGER_BUMP_SHARED: u32 = LEDGER_THRESHOLD_SHARED + ONE_DAY_LEDGERS; // ~ 46 days

// Instance storage key strings
const ADMIN: &str = "Admin";
const POOL: &str = "Pool";
const PAUSED: &str = "Paused";
const ASSET_LIST: &str = "AssetList";

// Persistent storage keys
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum StrategyDataKey {
    Decimals(Address), // Stores the precision the pool registered the asset with
}

pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

pub fn get_admin(e: &Env) -> Address {
    e.storage().instance().get(&Symbol::new(e, ADMIN)).unwrap_optimized()
}

pub fn set_admin(e: &Env, admin: &Address) {
    e.storage().instance().set(&Symbol::new(e, ADMIN), admin);
}

pub fn get_pool(e: &Env) -> Address {
    e.storage().instance().get(&Symbol::new(e, POOL)).unwrap_optimized()
}

pub fn set_pool(e: &Env, pool: &Address) {
    e.storage().instance().set(&Symbol::new(e, POOL), pool);
}

pub fn get_paused(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&Symbol::new(e, PAUSED))
        .unwrap_or(false)
}

pub fn set_paused(e: &Env, paused: &bool) {
    e.storage().instance().set(&Symbol::new(e, PAUSED), paused);
}

pub fn get_asset_list(e: &Env) -> Vec<Address> {
    e.storage()
        .instance()
        .get(&Symbol::new(e, ASSET_LIST))
        .unwrap_or(Vec::new(e))
}

pub fn set_asset_list(e: &Env, assets: &Vec<Address>) {
    e.storage().instance().set(&Symbol::new(e, ASSET_LIST), assets);
}

pub fn get_decimals(e: &Env, asset: &Address) -> u32 {
    let key = StrategyDataKey::Decimals(asset.clone());
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
    e.storage()
        .persistent()
        .get::<StrategyDataKey, u32>(&key)
        .unwrap_optimized()
}

pub fn set_decimals(e: &Env, asset: &Address, decimals: &u32) {
    let key = StrategyDataKey::Decimals(asset.clone());
    e.storage().persistent().set(&key, decimals);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}
