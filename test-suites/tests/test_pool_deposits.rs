use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;
use test_suites::setup::{create_fixture_with_deposits, create_fixture_with_holders};
use test_suites::test_fixture::{AssetIndex, TestFixture, ALL_ASSETS};
use pool::MINIMUM_SUPPLY;
use test_suites::{E18, E6};

#[test]
fn test_first_deposit_mints_normalized_value() {
    let fixture = create_fixture_with_holders(false);
    let alice = &fixture.users[0];

    let shares = fixture.deposit(alice, AssetIndex::DAI, 1_000_000 * E18);

    assert_eq!(shares, 1_000_000 * E18);
    assert_eq!(fixture.pool.balance_of(alice), shares);
    assert_eq!(fixture.pool.total_supply(), shares);
    assert_eq!(fixture.balance(alice, AssetIndex::DAI), 0);
    assert_eq!(
        fixture.balance(&fixture.pool.address, AssetIndex::DAI),
        1_000_000 * E18
    );
    assert_eq!(fixture.idle(AssetIndex::DAI), 1_000_000 * E18);
}

#[test]
fn test_equal_value_deposits_mint_equal_shares() {
    let fixture = create_fixture_with_holders(false);
    let alice = &fixture.users[0];
    let bob = &fixture.users[1];
    let john = &fixture.users[2];

    let alice_shares = fixture.deposit(alice, AssetIndex::DAI, 1_000_000 * E18);
    let bob_shares = fixture.deposit(bob, AssetIndex::USDC, 1_000_000 * E6);
    let john_shares = fixture.deposit(john, AssetIndex::USDT, 1_000_000 * E6);

    assert_eq!(alice_shares, bob_shares);
    assert_eq!(bob_shares, john_shares);
    assert_eq!(fixture.pool.total_balance_of_pool(), 3_000_000 * E18);
    assert_eq!(fixture.pool.price_per_share(), E18);
}

#[test]
fn test_raw_amounts_normalize_by_decimal_gap() {
    let fixture = TestFixture::create(false);
    let dai = &fixture.assets[AssetIndex::DAI].address;
    let usdc = &fixture.assets[AssetIndex::USDC].address;

    let dai_value = fixture.pool.normalize(dai, &1_000_000);
    let usdc_value = fixture.pool.normalize(usdc, &1_000_000);

    assert_eq!(usdc_value, dai_value * 1_000_000_000_000);
    assert_eq!(fixture.pool.denormalize(usdc, &usdc_value), 1_000_000);
    assert_eq!(fixture.pool.denormalize(dai, &dai_value), 1_000_000);
    assert_eq!(fixture.pool.asset_decimals(usdc), 6);
}

#[test]
fn test_registry_lists_assets_in_registration_order() {
    let fixture = TestFixture::create(false);

    let assets = fixture.pool.assets();
    assert_eq!(assets.len(), 3);
    assert_eq!(assets.get_unchecked(0), fixture.assets[AssetIndex::DAI].address);
    assert_eq!(assets.get_unchecked(1), fixture.assets[AssetIndex::USDC].address);
    assert_eq!(assets.get_unchecked(2), fixture.assets[AssetIndex::USDT].address);
}

#[test]
fn test_deposit_after_yield_mints_fewer_shares() {
    let mut fixture = create_fixture_with_deposits(false);
    fixture.pool.rebalance();

    // 300k USDC of yield on 3M of value moves the price to 1.1
    fixture.simulate_yield(AssetIndex::USDC, 300_000 * E6);
    assert_eq!(fixture.pool.total_balance_of_pool(), 3_300_000 * E18);
    assert_eq!(fixture.pool.price_per_share(), 1_100_000_000_000_000_000);

    let carol = Address::generate(&fixture.env);
    fixture.fund(&carol, AssetIndex::USDT, 110_000 * E6);
    let shares = fixture.deposit(&carol, AssetIndex::USDT, 110_000 * E6);
    fixture.users.push(carol);

    assert_eq!(shares, 100_000 * E18);
    assert_eq!(fixture.pool.total_supply(), fixture.sum_of_shares());
    assert_eq!(fixture.pool.price_per_share(), 1_100_000_000_000_000_000);
}

#[test]
#[should_panic(expected = "Error(Contract, #5201)")] // ZeroAmount
fn test_deposit_zero_amount() {
    let fixture = create_fixture_with_holders(false);

    fixture.deposit(&fixture.users[0], AssetIndex::DAI, 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #5202)")] // UnknownAsset
fn test_deposit_unknown_asset() {
    let fixture = create_fixture_with_holders(false);
    let stranger = fixture
        .env
        .register_stellar_asset_contract_v2(fixture.admin.clone())
        .address();

    fixture.pool.deposit(&fixture.users[0], &stranger, &1_000);
}

#[test]
#[should_panic(expected = "Error(Contract, #5243)")] // CustodyTransferFailed
fn test_deposit_more_than_held() {
    let fixture = create_fixture_with_holders(false);

    fixture.deposit(&fixture.users[1], AssetIndex::USDC, 1_000_001 * E6);
}

#[test]
#[should_panic(expected = "Error(Contract, #5205)")] // ZeroValueDeposit
fn test_deposit_worth_less_than_a_share() {
    let fixture = create_fixture_with_holders(false);
    let alice = &fixture.users[0];

    // The smallest allowed first deposit, then each share grows far above one wei
    fixture.deposit(alice, AssetIndex::DAI, MINIMUM_SUPPLY);
    fixture.pool.rebalance();
    fixture.simulate_yield(AssetIndex::DAI, 1_000 * E18);

    fixture.deposit(alice, AssetIndex::DAI, 1);
}

#[test]
#[should_panic(expected = "Error(Contract, #5224)")] // BelowMinimumSupply
fn test_first_deposit_below_minimum_supply() {
    let fixture = create_fixture_with_holders(false);

    fixture.deposit(&fixture.users[0], AssetIndex::DAI, MINIMUM_SUPPLY - 1);
}

#[test]
fn test_donation_to_venue_cannot_round_away_a_deposit() {
    let mut fixture = create_fixture_with_holders(false);
    let alice = &fixture.users[0];

    // A first depositor with the minimum supply inflates the share price
    fixture.deposit(alice, AssetIndex::DAI, MINIMUM_SUPPLY);
    fixture.pool.rebalance();
    fixture.simulate_yield(AssetIndex::DAI, 1_000_000 * E18);

    let carol = Address::generate(&fixture.env);
    fixture.fund(&carol, AssetIndex::USDC, 1_500_000 * E6);
    fixture.deposit(&carol, AssetIndex::USDC, 1_500_000 * E6);
    fixture.users.push(carol.clone());

    // Rounding costs carol less than one share, a billionth of the donation
    let carol_value = fixture.pool.balance_of(&carol) * fixture.pool.total_balance_of_pool()
        / fixture.pool.total_supply();
    assert!(carol_value <= 1_500_000 * E18);
    assert!(1_500_000 * E18 - carol_value <= 1_000_000 * E18 / MINIMUM_SUPPLY + 1);
}

#[test]
#[should_panic(expected = "Error(Contract, #5223)")] // PoolInsolvent
fn test_deposit_into_pool_with_no_value() {
    let fixture = create_fixture_with_deposits(false);
    fixture.pool.rebalance();
    for index in ALL_ASSETS {
        fixture.simulate_loss(index, fixture.units(index, 1_000_000));
    }
    assert_eq!(fixture.pool.total_balance_of_pool(), 0);

    let carol = Address::generate(&fixture.env);
    fixture.fund(&carol, AssetIndex::DAI, 1_000_000 * E18);
    fixture.deposit(&carol, AssetIndex::DAI, 1_000_000 * E18);
}

#[test]
fn test_failed_deposit_leaves_no_trace() {
    let fixture = create_fixture_with_holders(false);
    let bob = &fixture.users[1];

    let result = fixture.pool.try_deposit(
        bob,
        &fixture.assets[AssetIndex::USDC].address,
        &(2_000_000 * E6),
    );

    assert!(result.is_err());
    assert_eq!(fixture.pool.balance_of(bob), 0);
    assert_eq!(fixture.pool.total_supply(), 0);
    assert_eq!(fixture.idle(AssetIndex::USDC), 0);
    assert_eq!(fixture.balance(bob, AssetIndex::USDC), 1_000_000 * E6);
}
