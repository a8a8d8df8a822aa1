use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::constants::MINIMUM_SUPPLY;
use crate::errors::PoolError;
use crate::events::PoolEvents;
use crate::ledger;
use crate::pool::pool::{transfer_custody, Pool};
use crate::types::AssetAmount;

/// Burn `shares` from `depositor` and pay out their value as a basket of assets
///
/// Value owed is `shares * total_value / total_shares`, rounded down. It is
/// paid from idle balances in registration order; any shortfall is recalled
/// from the strategy first.
///
/// ### Panics
/// - `ZeroAmount` if shares <= 0
/// - `InsufficientShares` if the depositor holds fewer shares
/// - `StrategyWithdrawalFailed` if the shortfall cannot be recalled and the
///   pool does not accept partial withdrawals
/// - `BelowMinimumSupply` if fewer than `MINIMUM_SUPPLY` shares would remain
///   outstanding without the supply reaching 0
/// - `CustodyTransferFailed` if a payout transfer fails
pub fn execute_withdraw(e: &Env, depositor: &Address, shares: i128) -> Vec<AssetAmount> {
    if shares <= 0 {
        panic_with_error!(e, PoolError::ZeroAmount);
    }
    if shares > ledger::balance_of(e, depositor) {
        panic_with_error!(e, PoolError::InsufficientShares);
    }

    let mut pool = Pool::load(e);
    let total_shares = ledger::total_supply(e);
    let total_value = pool.sync_total_value(e);
    let value_owed = shares.fixed_mul_floor(e, &total_value, &total_shares);

    let mut available = pool.idle_value(e);
    if available < value_owed {
        let shortfall = value_owed - available;
        let received = match pool.strategy.clone() {
            Some(strategy) => pool.recall(e, &strategy, Some(shortfall)),
            None => None,
        };
        available += received.unwrap_or(0);
        pool.checkpoint_managed(e);
        if available < value_owed && !pool.config.partial_withdrawals {
            panic_with_error!(e, PoolError::StrategyWithdrawalFailed);
        }
    }

    let partial = available < value_owed;
    let (basket, paid) = pool.take_basket(e, if partial { available } else { value_owed });

    // Partial fills burn only the shares covering what was paid, rounded up
    let burned = if partial {
        paid.fixed_mul_ceil(e, &total_shares, &total_value).min(shares)
    } else {
        shares
    };
    let remaining_supply = total_shares - burned;
    if remaining_supply > 0 && remaining_supply < MINIMUM_SUPPLY {
        panic_with_error!(e, PoolError::BelowMinimumSupply);
    }
    ledger::burn(e, depositor, burned);
    pool.store(e);

    let pool_address = e.current_contract_address();
    for item in basket.iter() {
        transfer_custody(e, &item.asset, &pool_address, depositor, item.amount);
    }

    PoolEvents::withdraw(e, depositor.clone(), burned, paid, basket.clone());
    basket
}
