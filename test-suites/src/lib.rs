pub mod setup;
pub mod test_fixture;

pub const E18: i128 = 1_000_000_000_000_000_000;
pub const E6: i128 = 1_000_000;

pub const ONE_DAY: u64 = 60 * 60 * 24;
