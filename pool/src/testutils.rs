#![cfg(any(test, feature = "testutils"))]

use crate::ValuePoolContract;
use soroban_sdk::{Address, Env};

/// Register a pool that reverts withdrawals the strategy cannot cover
pub fn create_pool(e: &Env, controller: &Address) -> Address {
    e.register(ValuePoolContract {}, (controller.clone(), 0u64, false))
}

/// Register a pool that pays out what it holds when a recall falls short
pub fn create_partial_pool(e: &Env, controller: &Address) -> Address {
    e.register(ValuePoolContract {}, (controller.clone(), 0u64, true))
}
