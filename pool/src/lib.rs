#![no_std]

mod constants;
mod contract;
mod dependencies;
mod errors;
mod events;
mod ledger;
mod pool;
mod registry;
pub mod storage;
mod types;

pub mod testutils;

pub use constants::{COMMON_DECIMALS, MINIMUM_SUPPLY, SCALAR_18};
pub use contract::*;
pub use errors::PoolError;
pub use types::*;
