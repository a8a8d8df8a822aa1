use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StrategyError {
    // Amount validation errors
    ZeroAmount = 5301,
    InvalidDecimals = 5302,
    Overflow = 5303,

    // Venue errors
    VenueUnavailable = 5310,
    InsufficientManagedValue = 5311,
}
