// Value precision
pub const COMMON_DECIMALS: u32 = 18; // every normalized amount carries 18 decimals
pub const SCALAR_18: i128 = 1_000_000_000_000_000_000; // one share priced at 1.0

// Limits
pub const MINIMUM_SUPPLY: i128 = 1_000_000_000; // outstanding shares are either 0 or at least this many
pub const MAX_ASSETS: u32 = 8; // bounds the per-operation asset loops
