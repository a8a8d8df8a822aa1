use soroban_sdk::{contractclient, Address, Env};

/// Pool client interface - only the administrative surface the controller drives
#[contractclient(name = "Client")]
pub trait PoolInterface {
    /// Adds an asset to the pool's registry
    fn register_asset(e: Env, asset: Address, decimals: u32);

    /// Binds a strategy after draining the previous one
    fn set_strategy(e: Env, strategy: Address);

    /// Returns the currently bound strategy, if any
    fn strategy(e: Env) -> Option<Address>;
}
