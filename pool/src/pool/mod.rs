mod pool;
mod config;
pub use config::{execute_initialize, execute_register_asset, execute_set_strategy};
mod deposit;
pub use deposit::execute_deposit;
mod rebalance;
pub use rebalance::execute_rebalance;
mod withdraw;
pub use withdraw::execute_withdraw;
pub use pool::Pool;
