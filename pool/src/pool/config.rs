use soroban_sdk::{panic_with_error, Address, Env};

use crate::dependencies::StrategyClient;
use crate::errors::PoolError;
use crate::events::PoolEvents;
use crate::pool::pool::Pool;
use crate::types::{AssetConfig, PoolConfig};
use crate::{registry, storage};

pub fn execute_initialize(e: &Env, config: &PoolConfig) {
    storage::set_config(e, config);
    storage::set_total_shares(e, &0);
    storage::set_managed_checkpoint(e, &0);
}

pub fn execute_register_asset(e: &Env, asset: &Address, decimals: u32) -> AssetConfig {
    let config = registry::register(e, asset, decimals);
    PoolEvents::register_asset(e, asset.clone(), config.decimals, config.index);
    config
}

/// Bind `new_strategy`, first draining the previously bound one
///
/// ### Panics
/// - `StrategyMismatch` if the strategy was deployed for another pool
/// - `RecallIncomplete` if the previous strategy cannot be fully drained
pub fn execute_set_strategy(e: &Env, new_strategy: &Address) {
    if StrategyClient::new(e, new_strategy).pool() != e.current_contract_address() {
        panic_with_error!(e, PoolError::StrategyMismatch);
    }

    let mut pool = Pool::load(e);
    let old_strategy = pool.strategy.clone();
    if let Some(old) = &old_strategy {
        pool.sync_managed(e);
        if pool.recall(e, old, None).is_none() {
            panic_with_error!(e, PoolError::RecallIncomplete);
        }
        if StrategyClient::new(e, old).report_managed_value() != 0 {
            panic_with_error!(e, PoolError::RecallIncomplete);
        }
        pool.store(e);
    }

    storage::set_strategy(e, new_strategy);
    pool.strategy = Some(new_strategy.clone());
    pool.checkpoint_managed(e);
    PoolEvents::set_strategy(e, old_strategy, new_strategy.clone());
}
