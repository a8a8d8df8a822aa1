use soroban_sdk::{Address, Env, Symbol};

pub struct ControllerEvents {}

impl ControllerEvents {
    /// Emitted when a pool is placed under the controller
    ///
    /// - topics - `["add_pool", pool: Address]`
    /// - data - `admin: Address`
    pub fn add_pool(e: &Env, pool: Address, admin: Address) {
        let topics = (Symbol::new(e, "add_pool"), pool);
        e.events().publish(topics, admin);
    }

    /// Emitted when a pool is bound to a new strategy
    ///
    /// - topics - `["update_strategy", pool: Address]`
    /// - data - `[old_strategy: Option<Address>, new_strategy: Address]`
    pub fn update_strategy(e: &Env, pool: Address, old_strategy: Option<Address>, new_strategy: Address) {
        let topics = (Symbol::new(e, "update_strategy"), pool);
        e.events().publish(topics, (old_strategy, new_strategy));
    }

    /// Emitted when an asset is registered on a pool through the controller
    ///
    /// - topics - `["register_asset", pool: Address]`
    /// - data - `[asset: Address, decimals: u32]`
    pub fn register_asset(e: &Env, pool: Address, asset: Address, decimals: u32) {
        let topics = (Symbol::new(e, "register_asset"), pool);
        e.events().publish(topics, (asset, decimals));
    }

    /// Emitted when a new admin is proposed
    ///
    /// - topics - `["propose_admin", admin: Address]`
    /// - data - `new_admin: Address`
    pub fn propose_admin(e: &Env, admin: Address, new_admin: Address) {
        let topics = (Symbol::new(e, "propose_admin"), admin);
        e.events().publish(topics, new_admin);
    }

    /// Emitted when the proposed admin accepts the role
    ///
    /// - topics - `["accept_admin", new_admin: Address]`
    /// - data - `()`
    pub fn accept_admin(e: &Env, new_admin: Address) {
        let topics = (Symbol::new(e, "accept_admin"), new_admin);
        e.events().publish(topics, ());
    }
}
