use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{panic_with_error, Address, Env};

use crate::constants::MINIMUM_SUPPLY;
use crate::errors::PoolError;
use crate::events::PoolEvents;
use crate::pool::pool::{transfer_custody, Pool};
use crate::{ledger, registry};

/// Deposit `amount` of `asset` from `depositor` and mint shares for its value
///
/// The first deposit mints shares 1:1 with normalized value and must mint at
/// least `MINIMUM_SUPPLY`. Later deposits mint `value * total_shares / total_value`,
/// rounded down.
///
/// ### Panics
/// - `ZeroAmount` if amount <= 0
/// - `UnknownAsset` if the asset is not registered
/// - `ZeroValueDeposit` if the deposit is worth less than one share
/// - `PoolInsolvent` if shares are outstanding but the pool holds no value
/// - `BelowMinimumSupply` if a first deposit mints fewer than `MINIMUM_SUPPLY` shares
/// - `CustodyTransferFailed` if the depositor's tokens cannot be pulled
pub fn execute_deposit(e: &Env, depositor: &Address, asset: &Address, amount: i128) -> i128 {
    if amount <= 0 {
        panic_with_error!(e, PoolError::ZeroAmount);
    }

    let mut pool = Pool::load(e);
    let asset_config = pool.asset(e, asset);
    let value = registry::normalize(e, &asset_config, amount);
    if value == 0 {
        panic_with_error!(e, PoolError::ZeroValueDeposit);
    }

    let total_shares = ledger::total_supply(e);
    let total_value = pool.sync_total_value(e);
    let shares = if total_shares == 0 {
        value
    } else if total_value == 0 {
        // Outstanding shares are backed by nothing, new value would be split with them
        panic_with_error!(e, PoolError::PoolInsolvent)
    } else {
        value.fixed_mul_floor(e, &total_shares, &total_value)
    };
    if shares == 0 {
        panic_with_error!(e, PoolError::ZeroValueDeposit);
    }
    if total_shares == 0 && shares < MINIMUM_SUPPLY {
        panic_with_error!(e, PoolError::BelowMinimumSupply);
    }

    ledger::mint(e, depositor, shares);
    pool.credit_idle(e, asset, amount);
    pool.store(e);

    transfer_custody(e, asset, depositor, &e.current_contract_address(), amount);

    PoolEvents::deposit(e, depositor.clone(), asset.clone(), amount, value, shares);
    shares
}
