use soroban_sdk::auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation};
use soroban_sdk::{
    log, panic_with_error, token::TokenClient, vec, Address, Env, IntoVal, Symbol, Val, Vec,
};

use crate::dependencies::StrategyClient;
use crate::errors::PoolError;
use crate::events::PoolEvents;
use crate::pool::pool::Pool;
use crate::types::{AssetConfig, RebalanceResult};
use crate::{registry, storage};

/// Offer every idle balance to the bound strategy
///
/// A rejected investment is not fatal: the strategy's effects are rolled
/// back, the amount stays idle and the result entry reports `invested: false`.
/// The same applies to any part of an accepted investment the strategy did
/// not actually pull from the pool's custody.
///
/// ### Panics
/// - `NoStrategy` if no strategy is bound
/// - `RebalanceTooSoon` if the configured minimum interval has not elapsed
pub fn execute_rebalance(e: &Env) -> Vec<RebalanceResult> {
    let mut pool = Pool::load(e);
    let strategy = match pool.strategy.clone() {
        Some(strategy) => strategy,
        None => panic_with_error!(e, PoolError::NoStrategy),
    };

    let now = e.ledger().timestamp();
    if pool.config.min_rebalance_interval > 0 {
        if let Some(last) = storage::get_last_rebalance(e) {
            if now < last.saturating_add(pool.config.min_rebalance_interval) {
                panic_with_error!(e, PoolError::RebalanceTooSoon);
            }
        }
    }

    pool.sync_managed(e);
    let client = StrategyClient::new(e, &strategy);
    let pool_address = e.current_contract_address();
    let mut results = vec![e];
    let mut invested_value: i128 = 0;
    for asset in pool.assets.clone().iter() {
        let amount = pool.idle(&asset.token);
        if amount == 0 {
            continue;
        }

        // Funds leave the idle ledger before the strategy is called
        pool.set_idle(&asset.token, 0);
        pool.store(e);
        let token = TokenClient::new(e, &asset.token);
        let custody_before = token.balance(&pool_address);
        authorize_pull(e, &asset, &strategy, amount);
        let accepted = matches!(
            client.try_invest(&asset.token, &asset.decimals, &amount),
            Ok(Ok(()))
        );

        // Only what actually left custody counts as invested
        let pulled = (custody_before - token.balance(&pool_address)).clamp(0, amount);
        let left_behind = amount - pulled;
        invested_value += registry::normalize(e, &asset, pulled);
        let invested = accepted && left_behind == 0;
        if left_behind > 0 {
            pool.set_idle(&asset.token, left_behind);
            pool.store(e);
            log!(e, "strategy left funds in custody", asset.token.clone(), left_behind);
            PoolEvents::invest_failed(e, strategy.clone(), asset.token.clone(), left_behind);
        }
        results.push_back(RebalanceResult {
            asset: asset.token.clone(),
            amount,
            invested,
        });
    }

    storage::set_last_rebalance(e, now);
    let managed = pool.checkpoint_managed(e);
    PoolEvents::rebalance(e, strategy, invested_value, managed);
    results
}

// The strategy pulls the tokens itself, so the pool signs off on exactly
// that one transfer.
fn authorize_pull(e: &Env, asset: &AssetConfig, strategy: &Address, amount: i128) {
    let args: Vec<Val> = vec![
        e,
        e.current_contract_address().into_val(e),
        strategy.into_val(e),
        amount.into_val(e),
    ];
    e.authorize_as_current_contract(vec![
        e,
        InvokerContractAuthEntry::Contract(SubContractInvocation {
            context: ContractContext {
                contract: asset.token.clone(),
                fn_name: Symbol::new(e, "transfer"),
                args,
            },
            sub_invocations: vec![e],
        }),
    ]);
}
