use soroban_sdk::{panic_with_error, Address, Env};

use crate::errors::PoolError;
use crate::storage;

pub fn balance_of(e: &Env, user: &Address) -> i128 {
    storage::get_shares(e, user)
}

pub fn total_supply(e: &Env) -> i128 {
    storage::get_total_shares(e)
}

/// Mint `shares` to `user`, growing the total supply by the same amount
///
/// ### Panics
/// - `Overflow` if either the balance or the supply would overflow
pub fn mint(e: &Env, user: &Address, shares: i128) {
    let total = storage::get_total_shares(e);
    let balance = storage::get_shares(e, user);
    let (new_total, new_balance) = match (total.checked_add(shares), balance.checked_add(shares)) {
        (Some(t), Some(b)) => (t, b),
        _ => panic_with_error!(e, PoolError::Overflow),
    };

    storage::set_shares(e, user, &new_balance);
    storage::set_total_shares(e, &new_total);
    require_consistent(e, new_balance, new_total);
}

/// Burn `shares` from `user`, shrinking the total supply by the same amount
///
/// ### Panics
/// - `InsufficientShares` if the user holds fewer than `shares`
pub fn burn(e: &Env, user: &Address, shares: i128) {
    let balance = storage::get_shares(e, user);
    if shares > balance {
        panic_with_error!(e, PoolError::InsufficientShares);
    }
    let total = storage::get_total_shares(e);

    let new_balance = balance - shares;
    let new_total = total - shares;
    storage::set_shares(e, user, &new_balance);
    storage::set_total_shares(e, &new_total);
    require_consistent(e, new_balance, new_total);
}

// A single balance can never exceed the supply it is part of
fn require_consistent(e: &Env, balance: i128, total: i128) {
    if balance < 0 || total < 0 || balance > total {
        panic_with_error!(e, PoolError::LedgerInvariant);
    }
}
