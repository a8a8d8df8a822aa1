#![no_std]

mod errors;
mod storage;
mod contract;
pub use contract::{FixedStrategyClient, FixedStrategyContract, FixedStrategyContractClient};
pub use errors::StrategyError;
pub use types::AssetAmount;
mod events;
mod types;
mod venue;
pub mod testutils;
