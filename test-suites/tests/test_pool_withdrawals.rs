use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{vec, Address, IntoVal, Symbol, Val, Vec};
use test_suites::setup::{create_fixture_with_deposits, create_fixture_with_holders};
use test_suites::test_fixture::AssetIndex;
use test_suites::{E18, E6};

#[test]
fn test_withdraw_from_idle_pays_in_registration_order() {
    let fixture = create_fixture_with_deposits(false);
    let bob = &fixture.users[1];

    // Bob deposited USDC, but DAI is registered first
    let basket = fixture.pool.withdraw(bob, &(500_000 * E18));

    assert_eq!(basket.len(), 1);
    let paid = basket.get_unchecked(0);
    assert_eq!(paid.asset, fixture.assets[AssetIndex::DAI].address);
    assert_eq!(paid.amount, 500_000 * E18);
    assert_eq!(fixture.balance(bob, AssetIndex::DAI), 500_000 * E18);
    assert_eq!(fixture.pool.balance_of(bob), 500_000 * E18);
    assert_eq!(fixture.idle(AssetIndex::DAI), 500_000 * E18);
    assert_eq!(fixture.pool.total_supply(), 2_500_000 * E18);
    assert_eq!(fixture.pool.price_per_share(), E18);
}

#[test]
fn test_withdraw_spans_multiple_assets() {
    let fixture = create_fixture_with_holders(false);
    let bob = &fixture.users[1];
    fixture.fund(bob, AssetIndex::USDT, 500_000 * E6);
    fixture.deposit(bob, AssetIndex::USDC, 500_000 * E6);
    fixture.deposit(bob, AssetIndex::USDT, 500_000 * E6);

    let basket = fixture.pool.withdraw(bob, &(700_000 * E18));

    assert_eq!(basket.len(), 2);
    let usdc = basket.get_unchecked(0);
    assert_eq!(usdc.asset, fixture.assets[AssetIndex::USDC].address);
    assert_eq!(usdc.amount, 500_000 * E6);
    let usdt = basket.get_unchecked(1);
    assert_eq!(usdt.asset, fixture.assets[AssetIndex::USDT].address);
    assert_eq!(usdt.amount, 200_000 * E6);

    assert_eq!(fixture.balance(bob, AssetIndex::USDC), 1_000_000 * E6);
    assert_eq!(fixture.balance(bob, AssetIndex::USDT), 200_000 * E6);
    assert_eq!(fixture.pool.balance_of(bob), 300_000 * E18);
    assert_eq!(fixture.idle(AssetIndex::USDC), 0);
    assert_eq!(fixture.idle(AssetIndex::USDT), 300_000 * E6);
}

#[test]
fn test_withdraw_recalls_shortfall_from_strategy() {
    let fixture = create_fixture_with_deposits(false);
    let alice = &fixture.users[0];
    fixture.pool.rebalance();
    assert_eq!(fixture.idle(AssetIndex::DAI), 0);

    let basket = fixture.pool.withdraw(alice, &(100_000 * E18));
    let events = fixture.env.events().all().filter_by_contract(&fixture.pool.address);

    let e = &fixture.env;
    let expected: Vec<(Address, Vec<Val>, Val)> = vec![
        e,
        (
            fixture.pool.address.clone(),
            (Symbol::new(e, "strategy_recall"), fixture.strategy.address.clone()).into_val(e),
            (100_000 * E18, 100_000 * E18).into_val(e),
        ),
        (
            fixture.pool.address.clone(),
            (Symbol::new(e, "withdraw"), alice.clone()).into_val(e),
            (100_000 * E18, 100_000 * E18, basket.clone()).into_val(e),
        ),
    ];
    assert_eq!(events, expected);

    assert_eq!(basket.len(), 1);
    assert_eq!(basket.get_unchecked(0).amount, 100_000 * E18);
    assert_eq!(fixture.balance(alice, AssetIndex::DAI), 100_000 * E18);
    assert_eq!(fixture.idle(AssetIndex::DAI), 0);
    assert_eq!(fixture.pool.managed_value(), 2_900_000 * E18);
    assert_eq!(fixture.pool.total_balance_of_pool(), 2_900_000 * E18);
    assert_eq!(fixture.pool.total_supply(), 2_900_000 * E18);
}

#[test]
fn test_withdraw_includes_yield() {
    let fixture = create_fixture_with_deposits(false);
    let alice = &fixture.users[0];
    fixture.pool.rebalance();
    fixture.simulate_yield(AssetIndex::USDC, 300_000 * E6);

    // 1M shares are worth 1.1M after the yield
    let basket = fixture.pool.withdraw(alice, &(1_000_000 * E18));

    assert_eq!(basket.len(), 2);
    assert_eq!(basket.get_unchecked(0).amount, 1_000_000 * E18);
    assert_eq!(basket.get_unchecked(1).amount, 100_000 * E6);
    assert_eq!(fixture.balance(alice, AssetIndex::DAI), 1_000_000 * E18);
    assert_eq!(fixture.balance(alice, AssetIndex::USDC), 100_000 * E6);
    assert_eq!(fixture.pool.balance_of(alice), 0);
    assert_eq!(fixture.pool.total_balance_of_pool(), 2_200_000 * E18);
    assert_eq!(fixture.pool.price_per_share(), 1_100_000_000_000_000_000);
}

#[test]
#[should_panic(expected = "Error(Contract, #5241)")] // StrategyWithdrawalFailed
fn test_withdraw_fails_when_strategy_cannot_pay() {
    let fixture = create_fixture_with_deposits(false);
    fixture.pool.rebalance();
    fixture.strategy.set_status(&true);

    fixture.pool.withdraw(&fixture.users[0], &(100_000 * E18));
}

#[test]
fn test_failed_withdraw_is_atomic() {
    let fixture = create_fixture_with_deposits(false);
    let alice = &fixture.users[0];
    fixture.pool.rebalance();
    fixture.strategy.set_status(&true);

    let result = fixture.pool.try_withdraw(alice, &(100_000 * E18));

    assert!(result.is_err());
    assert_eq!(fixture.pool.balance_of(alice), 1_000_000 * E18);
    assert_eq!(fixture.pool.total_supply(), 3_000_000 * E18);
    assert_eq!(fixture.balance(alice, AssetIndex::DAI), 0);
    assert_eq!(fixture.pool.total_balance_of_pool(), 3_000_000 * E18);
}

#[test]
fn test_partial_withdraw_pays_what_is_idle() {
    let mut fixture = create_fixture_with_deposits(true);
    fixture.pool.rebalance();

    let carol = Address::generate(&fixture.env);
    fixture.fund(&carol, AssetIndex::USDT, 300_000 * E6);
    fixture.deposit(&carol, AssetIndex::USDT, 300_000 * E6);
    fixture.users.push(carol);
    fixture.strategy.set_status(&true);

    let bob = &fixture.users[1];
    let basket = fixture.pool.withdraw(bob, &(1_000_000 * E18));
    let events = fixture.env.events().all().filter_by_contract(&fixture.pool.address);

    // Only the idle 300k could be paid, so only 300k shares burn
    let e = &fixture.env;
    let expected: Vec<(Address, Vec<Val>, Val)> = vec![
        e,
        (
            fixture.pool.address.clone(),
            (Symbol::new(e, "withdraw"), bob.clone()).into_val(e),
            (300_000 * E18, 300_000 * E18, basket.clone()).into_val(e),
        ),
    ];
    assert_eq!(events, expected);
    assert_eq!(basket.len(), 1);
    assert_eq!(basket.get_unchecked(0).asset, fixture.assets[AssetIndex::USDT].address);
    assert_eq!(basket.get_unchecked(0).amount, 300_000 * E6);
    assert_eq!(fixture.pool.balance_of(bob), 700_000 * E18);
    assert_eq!(fixture.pool.total_supply(), 3_000_000 * E18);
    assert_eq!(fixture.pool.total_supply(), fixture.sum_of_shares());
    assert_eq!(fixture.pool.price_per_share(), E18);
}

#[test]
fn test_withdraw_rounding_dust_stays_in_pool() {
    let fixture = create_fixture_with_holders(false);
    let bob = &fixture.users[1];
    fixture.deposit(bob, AssetIndex::USDC, 3);
    assert_eq!(fixture.pool.total_supply(), 3_000_000_000_000);

    // Half the shares are worth 1.5 raw units, only 1 can be paid
    let basket = fixture.pool.withdraw(bob, &1_500_000_000_000);

    assert_eq!(basket.get_unchecked(0).amount, 1);
    assert_eq!(fixture.pool.balance_of(bob), 1_500_000_000_000);
    assert_eq!(fixture.idle(AssetIndex::USDC), 2);
    assert!(fixture.pool.price_per_share() > E18);
}

#[test]
#[should_panic(expected = "Error(Contract, #5224)")] // BelowMinimumSupply
fn test_withdraw_leaving_sliver_of_supply() {
    let fixture = create_fixture_with_holders(false);
    let bob = &fixture.users[1];
    fixture.deposit(bob, AssetIndex::USDC, 1_000_000 * E6);

    fixture.pool.withdraw(bob, &(1_000_000 * E18 - 1));
}

#[test]
#[should_panic(expected = "Error(Contract, #5221)")] // InsufficientShares
fn test_withdraw_more_than_owned() {
    let fixture = create_fixture_with_deposits(false);

    fixture.pool.withdraw(&fixture.users[0], &(1_000_000 * E18 + 1));
}

#[test]
#[should_panic(expected = "Error(Contract, #5201)")] // ZeroAmount
fn test_withdraw_zero_shares() {
    let fixture = create_fixture_with_deposits(false);

    fixture.pool.withdraw(&fixture.users[0], &0);
}
