use std::ops::Index;

use controller::{ControllerClient, ControllerContract};
use fixed_strategy::{testutils::create_strategy, FixedStrategyClient};
use pool::{ValuePoolClient, ValuePoolContract};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum AssetIndex {
    DAI = 0,
    USDC = 1,
    USDT = 2,
}

pub const ALL_ASSETS: [AssetIndex; 3] = [AssetIndex::DAI, AssetIndex::USDC, AssetIndex::USDT];

pub struct TestAsset<'a> {
    pub address: Address,
    pub decimals: u32,
    pub token: TokenClient<'a>,
    pub issuer: StellarAssetClient<'a>,
}

// Index implementation for Vec<TestAsset> using AssetIndex
impl<'a> Index<AssetIndex> for Vec<TestAsset<'a>> {
    type Output = TestAsset<'a>;

    fn index(&self, index: AssetIndex) -> &Self::Output {
        &self[index as usize]
    }
}

pub struct TestFixture<'a> {
    pub env: Env,
    pub admin: Address,
    pub users: Vec<Address>,
    pub controller: ControllerClient<'a>,
    pub pool: ValuePoolClient<'a>,
    pub strategy: FixedStrategyClient<'a>,
    pub assets: Vec<TestAsset<'a>>, // Ordered to match AssetIndex and registration order
}

impl TestFixture<'_> {
    /// Deploy a controller, a pool with DAI (18), USDC (6) and USDT (6)
    /// registered, and a fixed strategy bound to the pool
    pub fn create<'a>(partial_withdrawals: bool) -> TestFixture<'a> {
        let e = Env::default();
        e.cost_estimate().budget().reset_unlimited();
        e.mock_all_auths();

        let admin = Address::generate(&e);

        let controller_id = e.register(ControllerContract {}, (admin.clone(),));
        let controller_client = ControllerClient::new(&e, &controller_id);

        let pool_id = e.register(
            ValuePoolContract {},
            (controller_id.clone(), 0u64, partial_withdrawals),
        );
        let pool_client = ValuePoolClient::new(&e, &pool_id);

        let strategy_id = create_strategy(&e, &admin, &pool_id);
        let strategy_client = FixedStrategyClient::new(&e, &strategy_id);

        let assets = vec![
            create_asset(&e, &admin, 18), // AssetIndex::DAI = 0
            create_asset(&e, &admin, 6),  // AssetIndex::USDC = 1
            create_asset(&e, &admin, 6),  // AssetIndex::USDT = 2
        ];

        controller_client.add_pool(&pool_id);
        for asset in assets.iter() {
            controller_client.register_asset(&pool_id, &asset.address, &asset.decimals);
        }
        controller_client.update_strategy(&pool_id, &strategy_id);

        TestFixture {
            env: e,
            admin,
            users: vec![],
            controller: controller_client,
            pool: pool_client,
            strategy: strategy_client,
            assets,
        }
    }

    /// Raw amount for `whole` tokens of an asset
    pub fn units(&self, index: AssetIndex, whole: i128) -> i128 {
        whole * 10i128.pow(self.assets[index].decimals)
    }

    pub fn fund(&self, user: &Address, index: AssetIndex, amount: i128) {
        self.assets[index].issuer.mint(user, &amount);
    }

    pub fn balance(&self, user: &Address, index: AssetIndex) -> i128 {
        self.assets[index].token.balance(user)
    }

    pub fn deposit(&self, user: &Address, index: AssetIndex, amount: i128) -> i128 {
        self.pool.deposit(user, &self.assets[index].address, &amount)
    }

    pub fn idle(&self, index: AssetIndex) -> i128 {
        self.pool.idle_balance(&self.assets[index].address)
    }

    /// Credit the venue with extra tokens, as a yield-bearing venue would
    pub fn simulate_yield(&self, index: AssetIndex, amount: i128) {
        self.assets[index].issuer.mint(&self.strategy.address, &amount);
    }

    /// Remove tokens from the venue, as a venue loss would
    pub fn simulate_loss(&self, index: AssetIndex, amount: i128) {
        self.assets[index].token.burn(&self.strategy.address, &amount);
    }

    /// Sum of every known depositor's shares
    pub fn sum_of_shares(&self) -> i128 {
        self.users.iter().map(|user| self.pool.balance_of(user)).sum()
    }

    /********** Chain Helpers ***********/

    pub fn jump(&self, time: u64) {
        self.env
            .ledger()
            .set_timestamp(self.env.ledger().timestamp().saturating_add(time));
    }
}

fn create_asset<'a>(e: &Env, admin: &Address, decimals: u32) -> TestAsset<'a> {
    let address = e.register_stellar_asset_contract_v2(admin.clone()).address();
    TestAsset {
        token: TokenClient::new(e, &address),
        issuer: StellarAssetClient::new(e, &address),
        address,
        decimals,
    }
}
