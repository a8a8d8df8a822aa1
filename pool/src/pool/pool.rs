use soroban_sdk::{log, map, panic_with_error, token::TokenClient, vec, Address, Env, Map, Vec};

use crate::dependencies::StrategyClient;
use crate::errors::PoolError;
use crate::events::PoolEvents;
use crate::types::{AssetAmount, AssetConfig, PoolConfig};
use crate::{registry, storage};

/// Working copy of the pool state for a single invocation. Idle balances are
/// cached and only written back on `store`.
pub struct Pool {
    pub config: PoolConfig,
    pub strategy: Option<Address>,
    pub assets: Vec<AssetConfig>,
    idle: Map<Address, i128>,
    idle_to_store: Vec<Address>,
}

impl Pool {
    pub fn load(e: &Env) -> Self {
        let mut assets = vec![e];
        let mut idle = map![e];
        for asset in storage::get_asset_list(e).iter() {
            idle.set(asset.clone(), storage::get_idle(e, &asset));
            assets.push_back(registry::load(e, &asset));
        }
        Pool {
            config: storage::get_config(e),
            strategy: storage::get_strategy(e),
            assets,
            idle,
            idle_to_store: vec![e],
        }
    }

    pub fn store(&mut self, e: &Env) {
        for asset in self.idle_to_store.iter() {
            storage::set_idle(e, &asset, &self.idle(&asset));
        }
        self.idle_to_store = vec![e];
    }

    /// Fetch a registered asset or panic with `UnknownAsset`
    pub fn asset(&self, e: &Env, token: &Address) -> AssetConfig {
        for asset in self.assets.iter() {
            if asset.token == *token {
                return asset;
            }
        }
        panic_with_error!(e, PoolError::UnknownAsset)
    }

    pub fn idle(&self, token: &Address) -> i128 {
        self.idle.get(token.clone()).unwrap_or(0)
    }

    pub fn set_idle(&mut self, token: &Address, amount: i128) {
        self.idle.set(token.clone(), amount);
        if !self.idle_to_store.contains(token) {
            self.idle_to_store.push_back(token.clone());
        }
    }

    pub fn credit_idle(&mut self, e: &Env, token: &Address, amount: i128) {
        match self.idle(token).checked_add(amount) {
            Some(new_idle) => self.set_idle(token, new_idle),
            None => panic_with_error!(e, PoolError::Overflow),
        }
    }

    /// Sum of all idle balances in common units
    pub fn idle_value(&self, e: &Env) -> i128 {
        let mut total: i128 = 0;
        for asset in self.assets.iter() {
            let value = registry::normalize(e, &asset, self.idle(&asset.token));
            total = match total.checked_add(value) {
                Some(t) => t,
                None => panic_with_error!(e, PoolError::Overflow),
            };
        }
        total
    }

    /// Value reported by the bound strategy, 0 if none is bound
    ///
    /// ### Panics
    /// - `InvalidStrategyReport` if the strategy reports a negative value
    pub fn managed_value(&self, e: &Env) -> i128 {
        match &self.strategy {
            Some(strategy) => {
                let value = StrategyClient::new(e, strategy).report_managed_value();
                if value < 0 {
                    panic_with_error!(e, PoolError::InvalidStrategyReport);
                }
                value
            }
            None => 0,
        }
    }

    /// Idle plus managed value, without touching storage
    pub fn total_value(&self, e: &Env) -> i128 {
        match self.idle_value(e).checked_add(self.managed_value(e)) {
            Some(total) => total,
            None => panic_with_error!(e, PoolError::Overflow),
        }
    }

    /// Read the managed value and compare it with the last checkpoint. A drop
    /// not caused by the pool's own recalls is published as a strategy loss.
    pub fn sync_managed(&self, e: &Env) -> i128 {
        let current = self.managed_value(e);
        let previous = storage::get_managed_checkpoint(e);
        if current < previous {
            if let Some(strategy) = &self.strategy {
                log!(e, "strategy reported a loss", strategy.clone(), previous, current);
                PoolEvents::strategy_loss(e, strategy.clone(), previous, current);
            }
        }
        storage::set_managed_checkpoint(e, &current);
        current
    }

    /// Store the managed value after the pool itself moved funds in or out
    pub fn checkpoint_managed(&self, e: &Env) -> i128 {
        let current = self.managed_value(e);
        storage::set_managed_checkpoint(e, &current);
        current
    }

    /// Idle plus managed value, publishing any loss since the last checkpoint
    pub fn sync_total_value(&self, e: &Env) -> i128 {
        let managed = self.sync_managed(e);
        match self.idle_value(e).checked_add(managed) {
            Some(total) => total,
            None => panic_with_error!(e, PoolError::Overflow),
        }
    }

    fn custody_balances(&self, e: &Env) -> Map<Address, i128> {
        let pool = e.current_contract_address();
        let mut balances = map![e];
        for asset in self.assets.iter() {
            let balance = TokenClient::new(e, &asset.token).balance(&pool);
            balances.set(asset.token.clone(), balance);
        }
        balances
    }

    /// Pull value back from `strategy`. Passing `None` recalls everything.
    ///
    /// Idle balances are credited with what actually reached the pool's
    /// custody, not with what the strategy claims to have sent. Returns the
    /// received value in common units, or `None` if the strategy call failed.
    pub fn recall(&mut self, e: &Env, strategy: &Address, value: Option<i128>) -> Option<i128> {
        let before = self.custody_balances(e);
        let client = StrategyClient::new(e, strategy);
        let succeeded = match value {
            Some(value) => matches!(client.try_withdraw(&value), Ok(Ok(_))),
            None => matches!(client.try_withdraw_all(), Ok(Ok(_))),
        };
        if !succeeded {
            return None;
        }

        let after = self.custody_balances(e);
        let mut received: i128 = 0;
        for asset in self.assets.iter() {
            let delta = after.get(asset.token.clone()).unwrap_or(0)
                - before.get(asset.token.clone()).unwrap_or(0);
            if delta < 0 {
                panic_with_error!(e, PoolError::InvalidStrategyReport);
            }
            if delta > 0 {
                self.credit_idle(e, &asset.token, delta);
                received += registry::normalize(e, &asset, delta);
            }
        }
        PoolEvents::strategy_recall(e, strategy.clone(), value.unwrap_or(0), received);
        Some(received)
    }

    /// Debit idle balances for up to `value` common units, walking assets in
    /// registration order. A remainder smaller than one raw unit of the assets
    /// still holding balance stays in the pool.
    ///
    /// Returns the basket and the value it is worth.
    pub fn take_basket(&mut self, e: &Env, value: i128) -> (Vec<AssetAmount>, i128) {
        let mut basket = vec![e];
        let mut remaining = value;
        let mut paid: i128 = 0;
        for asset in self.assets.clone().iter() {
            if remaining <= 0 {
                break;
            }
            let idle = self.idle(&asset.token);
            if idle == 0 {
                continue;
            }
            let take = if registry::normalize(e, &asset, idle) <= remaining {
                idle
            } else {
                registry::denormalize(e, &asset, remaining)
            };
            if take == 0 {
                continue;
            }

            let take_value = registry::normalize(e, &asset, take);
            self.set_idle(&asset.token, idle - take);
            remaining -= take_value;
            paid += take_value;
            basket.push_back(AssetAmount {
                asset: asset.token.clone(),
                amount: take,
            });
        }
        (basket, paid)
    }
}

/// Move `amount` of `token` between custody holders
///
/// ### Panics
/// - `CustodyTransferFailed` if the token contract rejects the transfer
pub fn transfer_custody(e: &Env, token: &Address, from: &Address, to: &Address, amount: i128) {
    let result = TokenClient::new(e, token).try_transfer(from, to, &amount);
    if !matches!(result, Ok(Ok(()))) {
        panic_with_error!(e, PoolError::CustodyTransferFailed);
    }
}
