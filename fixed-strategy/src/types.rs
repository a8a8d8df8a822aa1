use soroban_sdk::{contracttype, Address};

/// An amount of one asset in its native units
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetAmount {
    pub asset: Address,
    pub amount: i128,
}
