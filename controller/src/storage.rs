use soroban_sdk::{contracttype, unwrap::UnwrapOptimized, Address, Env, Symbol};

/********** Ledger Thresholds **********/

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days
const LEDGER_THRESHOLD_SHARED: u32 = ONE_DAY_LEDGERS * 45; // ~ 45 days
const LEDGER_BUMP_SHARED: u32 = LEDGER_THRESHOLD_SHARED + ONE_DAY_LEDGERS; // ~ 46 days

/********** Storage Types **********/

const ADMIN_KEY: &str = "Admin";
const PROPOSED_ADMIN_KEY: &str = "PropAdmin";

#[derive(Clone)]
#[contracttype]
pub enum ControllerDataKey {
    // Marks a pool as administered by this controller
    Pool(Address),
}

/********** Storage **********/

/// Bump the instance rent for the contract
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

/********** Admin **********/

/// Fetch the current admin Address
///
/// ### Panics
/// If the admin does not exist
pub fn get_admin(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, ADMIN_KEY))
        .unwrap_optimized()
}

/// Set a new admin
///
/// ### Arguments
/// * `new_admin` - The Address for the admin
pub fn set_admin(e: &Env, new_admin: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, ADMIN_KEY), new_admin);
}

/// Fetch the proposed admin, if any
pub fn get_proposed_admin(e: &Env) -> Option<Address> {
    e.storage()
        .instance()
        .get(&Symbol::new(e, PROPOSED_ADMIN_KEY))
}

/// Set a proposed admin that still has to accept the role
///
/// ### Arguments
/// * `proposed_admin` - The Address for the proposed admin
pub fn set_proposed_admin(e: &Env, proposed_admin: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, PROPOSED_ADMIN_KEY), proposed_admin);
}

pub fn del_proposed_admin(e: &Env) {
    e.storage()
        .instance()
        .remove(&Symbol::new(e, PROPOSED_ADMIN_KEY));
}

/********** Pools **********/

/// Check if a pool was added
///
/// ### Arguments
/// * `pool` - The pool address
pub fn is_pool(e: &Env, pool: &Address) -> bool {
    let key = ControllerDataKey::Pool(pool.clone());
    if e.storage().persistent().has(&key) {
        e.storage()
            .persistent()
            .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
        true
    } else {
        false
    }
}

/// Mark a pool as administered
///
/// ### Arguments
/// * `pool` - The pool address
pub fn set_pool(e: &Env, pool: &Address) {
    let key = ControllerDataKey::Pool(pool.clone());
    e.storage().persistent().set::<ControllerDataKey, bool>(&key, &true);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}
