use soroban_sdk::{panic_with_error, token::TokenClient, vec, Address, Env, Vec};

use crate::errors::StrategyError;
use crate::storage;
use crate::types::AssetAmount;

// Must match the pool's common unit
const COMMON_DECIMALS: u32 = 18;

fn scale(e: &Env, decimals: u32) -> i128 {
    if decimals > COMMON_DECIMALS {
        panic_with_error!(e, StrategyError::InvalidDecimals);
    }
    10i128.pow(COMMON_DECIMALS - decimals)
}

pub fn normalize(e: &Env, decimals: u32, amount: i128) -> i128 {
    match amount.checked_mul(scale(e, decimals)) {
        Some(value) => value,
        None => panic_with_error!(e, StrategyError::Overflow),
    }
}

/// Smallest raw amount worth at least `value`
pub fn denormalize_ceil(e: &Env, decimals: u32, value: i128) -> i128 {
    let scale = scale(e, decimals);
    (value + scale - 1) / scale
}

fn held(e: &Env, asset: &Address) -> i128 {
    TokenClient::new(e, asset).balance(&e.current_contract_address())
}

/// Remember the precision of an asset the first time it is invested
pub fn track_asset(e: &Env, asset: &Address, decimals: u32) {
    scale(e, decimals);
    let mut assets = storage::get_asset_list(e);
    if !assets.contains(asset) {
        storage::set_decimals(e, asset, &decimals);
        assets.push_back(asset.clone());
        storage::set_asset_list(e, &assets);
    }
}

/// Normalized value of everything the venue holds. Balances include any yield
/// credited to the venue since the funds were invested.
pub fn managed_value(e: &Env) -> i128 {
    let mut total: i128 = 0;
    for asset in storage::get_asset_list(e).iter() {
        let value = normalize(e, storage::get_decimals(e, &asset), held(e, &asset));
        total = match total.checked_add(value) {
            Some(t) => t,
            None => panic_with_error!(e, StrategyError::Overflow),
        };
    }
    total
}

/// Send at least `value` back to `pool`, draining assets in the order they
/// were first invested
pub fn release(e: &Env, pool: &Address, value: i128) -> Vec<AssetAmount> {
    let venue = e.current_contract_address();
    let mut returned = vec![e];
    let mut remaining = value;
    for asset in storage::get_asset_list(e).iter() {
        if remaining <= 0 {
            break;
        }
        let balance = held(e, &asset);
        if balance == 0 {
            continue;
        }
        let decimals = storage::get_decimals(e, &asset);
        let amount = denormalize_ceil(e, decimals, remaining).min(balance);

        TokenClient::new(e, &asset).transfer(&venue, pool, &amount);
        remaining -= normalize(e, decimals, amount);
        returned.push_back(AssetAmount { asset, amount });
    }
    if remaining > 0 {
        panic_with_error!(e, StrategyError::InsufficientManagedValue);
    }
    returned
}

/// Send every held balance back to `pool`
pub fn release_all(e: &Env, pool: &Address) -> Vec<AssetAmount> {
    let venue = e.current_contract_address();
    let mut returned = vec![e];
    for asset in storage::get_asset_list(e).iter() {
        let balance = held(e, &asset);
        if balance > 0 {
            TokenClient::new(e, &asset).transfer(&venue, pool, &balance);
            returned.push_back(AssetAmount { asset, amount: balance });
        }
    }
    returned
}
