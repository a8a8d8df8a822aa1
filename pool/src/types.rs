use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    pub controller: Address,          // Only address allowed to register assets and bind strategies
    pub min_rebalance_interval: u64,  // Seconds between rebalances, 0 disables the gate
    pub partial_withdrawals: bool,    // Pay what is available instead of reverting on a failed recall
}

/// A registered asset. The token contract address doubles as the custody
/// reference: the pool holds custody by holding a balance of that token.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetConfig {
    pub token: Address,
    pub decimals: u32,
    pub index: u32, // Registration order, used for deterministic iteration
}

/// An amount of one asset in its native units
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetAmount {
    pub asset: Address,
    pub amount: i128,
}

/// Per-asset outcome of a rebalance
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RebalanceResult {
    pub asset: Address,
    pub amount: i128,   // Raw amount offered to the strategy
    pub invested: bool, // False if the strategy rejected it and it stayed idle
}
