#![cfg(any(test, feature = "testutils"))]

use crate::FixedStrategyContract;
use soroban_sdk::{Address, Env};

pub fn create_strategy(e: &Env, admin: &Address, pool: &Address) -> Address {
    e.register(FixedStrategyContract {}, (admin.clone(), pool.clone()))
}
