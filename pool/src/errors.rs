use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    // Input errors
    ZeroAmount = 5201,
    UnknownAsset = 5202,
    DuplicateAsset = 5203,
    InvalidDecimals = 5204,
    ZeroValueDeposit = 5205,
    MaxAssetsReached = 5206,

    // Ledger errors
    Overflow = 5220,
    InsufficientShares = 5221,
    LedgerInvariant = 5222,
    PoolInsolvent = 5223,
    BelowMinimumSupply = 5224,

    // Strategy and custody errors
    NoStrategy = 5240,
    StrategyWithdrawalFailed = 5241,
    InvalidStrategyReport = 5242,
    CustodyTransferFailed = 5243,
    StrategyMismatch = 5244,
    RebalanceTooSoon = 5245,

    // Strategy rebinding
    RecallIncomplete = 5260,
}
