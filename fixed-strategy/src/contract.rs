use soroban_sdk::{contract, contractclient, contractimpl, panic_with_error, token::TokenClient, Address, Env, Vec};

use crate::{
    errors::StrategyError,
    events::StrategyEvents,
    storage,
    types::AssetAmount,
    venue,
};

#[contract]
pub struct FixedStrategyContract;

#[contractclient(name = "FixedStrategyClient")]
pub trait FixedStrategy {
    /// Returns the pool this strategy invests for
    fn pool(e: Env) -> Address;

    /// Returns the venue admin
    fn admin(e: Env) -> Address;

    /// Returns true while the venue rejects investments and withdrawals
    fn paused(e: Env) -> bool;

    /// (Admin only) Pauses or resumes the venue
    ///
    /// # Arguments
    /// * `paused` - True to make `invest` and `withdraw` fail with `VenueUnavailable`
    fn set_status(e: Env, paused: bool);

    /// (Pool only) Pulls `amount` of `asset` from the pool into the venue
    ///
    /// # Arguments
    /// * `asset` - Token to invest
    /// * `decimals` - Precision the pool registered the token with
    /// * `amount` - Raw amount to pull (must be > 0)
    ///
    /// # Panics
    /// - `ZeroAmount` if amount <= 0
    /// - `VenueUnavailable` if the venue is paused
    fn invest(e: Env, asset: Address, decimals: u32, amount: i128);

    /// (Pool only) Returns at least `value` common units worth of assets to the pool
    ///
    /// # Returns
    /// Raw amounts sent back per asset
    ///
    /// # Panics
    /// - `ZeroAmount` if value <= 0
    /// - `VenueUnavailable` if the venue is paused
    /// - `InsufficientManagedValue` if the venue holds less than `value`
    fn withdraw(e: Env, value: i128) -> Vec<AssetAmount>;

    /// (Pool only) Returns every held balance to the pool
    ///
    /// # Panics
    /// - `VenueUnavailable` if the venue is paused
    fn withdraw_all(e: Env) -> Vec<AssetAmount>;

    /// Returns the normalized value of everything the venue holds
    fn report_managed_value(e: Env) -> i128;
}

#[contractimpl]
impl FixedStrategyContract {
    /// Initializes the strategy for a single pool
    ///
    /// # Arguments
    /// * `admin` - Address allowed to pause the venue
    /// * `pool` - The only pool allowed to invest and withdraw
    pub fn __constructor(e: Env, admin: Address, pool: Address) {
        storage::set_admin(&e, &admin);
        storage::set_pool(&e, &pool);
        storage::set_paused(&e, &false);
        storage::extend_instance(&e);
    }
}

fn require_available(e: &Env) {
    if storage::get_paused(e) {
        panic_with_error!(e, StrategyError::VenueUnavailable);
    }
}

#[contractimpl]
impl FixedStrategy for FixedStrategyContract {
    fn pool(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_pool(&e)
    }

    fn admin(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_admin(&e)
    }

    fn paused(e: Env) -> bool {
        storage::extend_instance(&e);
        storage::get_paused(&e)
    }

    fn set_status(e: Env, paused: bool) {
        storage::extend_instance(&e);
        let admin = storage::get_admin(&e);
        admin.require_auth();

        storage::set_paused(&e, &paused);
        StrategyEvents::set_status(&e, admin, paused);
    }

    fn invest(e: Env, asset: Address, decimals: u32, amount: i128) {
        storage::extend_instance(&e);
        let pool = storage::get_pool(&e);
        pool.require_auth();
        if amount <= 0 {
            panic_with_error!(e, StrategyError::ZeroAmount);
        }
        require_available(&e);

        venue::track_asset(&e, &asset, decimals);
        TokenClient::new(&e, &asset).transfer(&pool, &e.current_contract_address(), &amount);

        StrategyEvents::invest(&e, asset, amount, venue::managed_value(&e));
    }

    fn withdraw(e: Env, value: i128) -> Vec<AssetAmount> {
        storage::extend_instance(&e);
        let pool = storage::get_pool(&e);
        pool.require_auth();
        if value <= 0 {
            panic_with_error!(e, StrategyError::ZeroAmount);
        }
        require_available(&e);

        let returned = venue::release(&e, &pool, value);
        StrategyEvents::divest(&e, pool, value, returned.clone());
        returned
    }

    fn withdraw_all(e: Env) -> Vec<AssetAmount> {
        storage::extend_instance(&e);
        let pool = storage::get_pool(&e);
        pool.require_auth();
        require_available(&e);

        let returned = venue::release_all(&e, &pool);
        StrategyEvents::divest(&e, pool, 0, returned.clone());
        returned
    }

    fn report_managed_value(e: Env) -> i128 {
        storage::extend_instance(&e);
        venue::managed_value(&e)
    }
}
