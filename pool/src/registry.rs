use soroban_sdk::{panic_with_error, Address, Env};

use crate::constants::{COMMON_DECIMALS, MAX_ASSETS};
use crate::errors::PoolError;
use crate::storage;
use crate::types::AssetConfig;

/// Register a new asset at the end of the registry
///
/// ### Panics
/// - `DuplicateAsset` if the asset is already registered
/// - `InvalidDecimals` if the asset is more precise than the common unit
/// - `MaxAssetsReached` if the registry is full
pub fn register(e: &Env, asset: &Address, decimals: u32) -> AssetConfig {
    if storage::has_asset(e, asset) {
        panic_with_error!(e, PoolError::DuplicateAsset);
    }
    if decimals > COMMON_DECIMALS {
        panic_with_error!(e, PoolError::InvalidDecimals);
    }
    let mut assets = storage::get_asset_list(e);
    if assets.len() >= MAX_ASSETS {
        panic_with_error!(e, PoolError::MaxAssetsReached);
    }

    let config = AssetConfig {
        token: asset.clone(),
        decimals,
        index: assets.len(),
    };
    storage::set_asset(e, asset, &config);
    assets.push_back(asset.clone());
    storage::set_asset_list(e, &assets);
    config
}

/// Fetch a registered asset
///
/// ### Panics
/// - `UnknownAsset` if the asset was never registered
pub fn load(e: &Env, asset: &Address) -> AssetConfig {
    match storage::get_asset(e, asset) {
        Some(config) => config,
        None => panic_with_error!(e, PoolError::UnknownAsset),
    }
}

/// Multiplier taking an amount with `decimals` places to the common unit
pub fn scale(e: &Env, decimals: u32) -> i128 {
    if decimals > COMMON_DECIMALS {
        panic_with_error!(e, PoolError::InvalidDecimals);
    }
    10i128.pow(COMMON_DECIMALS - decimals)
}

/// Convert a raw amount of an asset to common units
pub fn normalize(e: &Env, asset: &AssetConfig, amount: i128) -> i128 {
    match amount.checked_mul(scale(e, asset.decimals)) {
        Some(value) => value,
        None => panic_with_error!(e, PoolError::Overflow),
    }
}

/// Convert common units back to a raw amount of an asset, rounding toward zero
pub fn denormalize(e: &Env, asset: &AssetConfig, value: i128) -> i128 {
    value / scale(e, asset.decimals)
}
