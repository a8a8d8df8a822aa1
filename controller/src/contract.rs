use soroban_sdk::{contract, contractclient, contractimpl, panic_with_error, Address, Env};

use crate::dependencies::PoolClient;
use crate::errors::ControllerError;
use crate::events::ControllerEvents;
use crate::storage;

#[contract]
pub struct ControllerContract;

#[contractclient(name = "ControllerClient")]
pub trait Controller {
    /// Returns the current admin
    fn admin(e: Env) -> Address;

    /// Returns true if `pool` was added to this controller
    fn is_pool(e: Env, pool: Address) -> bool;

    /// Returns the strategy currently bound to `pool`
    ///
    /// ### Panics
    /// If the pool was never added
    fn pool_strategy(e: Env, pool: Address) -> Option<Address>;

    /// (Admin only) Set a new address to become the admin of the controller.
    /// This must be accepted by the new admin w/ `accept_admin` to take effect.
    ///
    /// ### Arguments
    /// * `new_admin` - The new admin address
    ///
    /// ### Panics
    /// If the caller is not the admin
    fn propose_admin(e: Env, new_admin: Address);

    /// (Proposed admin only) Accept the admin role.
    ///
    /// ### Panics
    /// If there is no proposed admin or the caller is not the proposed admin
    fn accept_admin(e: Env);

    /// (Admin only) Places a pool under this controller
    ///
    /// ### Arguments
    /// * `pool` - The pool address
    ///
    /// ### Panics
    /// If the caller is not the admin or the pool was already added
    fn add_pool(e: Env, pool: Address);

    /// (Admin only) Registers an asset on an administered pool
    ///
    /// ### Arguments
    /// * `pool` - The pool address
    /// * `asset` - The token contract address
    /// * `decimals` - Native precision of the token
    ///
    /// ### Panics
    /// If the caller is not the admin or the pool was never added
    fn register_asset(e: Env, pool: Address, asset: Address, decimals: u32);

    /// (Admin only) Binds `strategy` to `pool`
    ///
    /// The pool recalls everything from its current strategy before the new
    /// one is bound, so funds are never split across two strategies.
    ///
    /// ### Arguments
    /// * `pool` - The pool address
    /// * `strategy` - The strategy address
    ///
    /// ### Panics
    /// If the caller is not the admin, the pool was never added or the
    /// previous strategy cannot be fully recalled
    fn update_strategy(e: Env, pool: Address, strategy: Address);
}

fn require_pool(e: &Env, pool: &Address) {
    if !storage::is_pool(e, pool) {
        panic_with_error!(e, ControllerError::PoolNotFound);
    }
}

#[contractimpl]
impl ControllerContract {
    /// Constructor for initializing the contract when deployed
    pub fn __constructor(e: Env, admin: Address) {
        storage::set_admin(&e, &admin);
        storage::extend_instance(&e);
    }
}

#[contractimpl]
impl Controller for ControllerContract {
    fn admin(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_admin(&e)
    }

    fn is_pool(e: Env, pool: Address) -> bool {
        storage::extend_instance(&e);
        storage::is_pool(&e, &pool)
    }

    fn pool_strategy(e: Env, pool: Address) -> Option<Address> {
        storage::extend_instance(&e);
        require_pool(&e, &pool);
        PoolClient::new(&e, &pool).strategy()
    }

    fn propose_admin(e: Env, new_admin: Address) {
        storage::extend_instance(&e);
        let admin = storage::get_admin(&e);
        admin.require_auth();

        storage::set_proposed_admin(&e, &new_admin);
        ControllerEvents::propose_admin(&e, admin, new_admin);
    }

    fn accept_admin(e: Env) {
        storage::extend_instance(&e);
        let proposed_admin = match storage::get_proposed_admin(&e) {
            Some(proposed_admin) => proposed_admin,
            None => panic_with_error!(e, ControllerError::NoProposedAdmin),
        };
        proposed_admin.require_auth();

        storage::set_admin(&e, &proposed_admin);
        storage::del_proposed_admin(&e);
        ControllerEvents::accept_admin(&e, proposed_admin);
    }

    fn add_pool(e: Env, pool: Address) {
        storage::extend_instance(&e);
        let admin = storage::get_admin(&e);
        admin.require_auth();

        if storage::is_pool(&e, &pool) {
            panic_with_error!(e, ControllerError::DuplicatePool);
        }
        storage::set_pool(&e, &pool);
        ControllerEvents::add_pool(&e, pool, admin);
    }

    fn register_asset(e: Env, pool: Address, asset: Address, decimals: u32) {
        storage::extend_instance(&e);
        storage::get_admin(&e).require_auth();
        require_pool(&e, &pool);

        PoolClient::new(&e, &pool).register_asset(&asset, &decimals);
        ControllerEvents::register_asset(&e, pool, asset, decimals);
    }

    fn update_strategy(e: Env, pool: Address, strategy: Address) {
        storage::extend_instance(&e);
        storage::get_admin(&e).require_auth();
        require_pool(&e, &pool);

        let pool_client = PoolClient::new(&e, &pool);
        let old_strategy = pool_client.strategy();
        pool_client.set_strategy(&strategy);
        ControllerEvents::update_strategy(&e, pool, old_strategy, strategy);
    }
}
