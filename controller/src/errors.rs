use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ControllerError {
    // Pool administration
    DuplicatePool = 5101,
    PoolNotFound = 5102,

    // Admin handover
    NoProposedAdmin = 5110,
}
