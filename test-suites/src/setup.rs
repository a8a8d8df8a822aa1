use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;

use crate::test_fixture::{AssetIndex, TestFixture};

/// Fixture where three depositors each hold 1M of a single stablecoin:
/// `users[0]` DAI, `users[1]` USDC, `users[2]` USDT
pub fn create_fixture_with_holders<'a>(partial_withdrawals: bool) -> TestFixture<'a> {
    let mut fixture = TestFixture::create(partial_withdrawals);

    let holdings = [AssetIndex::DAI, AssetIndex::USDC, AssetIndex::USDT];
    for index in holdings {
        let user = Address::generate(&fixture.env);
        fixture.fund(&user, index, fixture.units(index, 1_000_000));
        fixture.users.push(user);
    }

    fixture
}

/// Fixture where the three holders have deposited their whole balance
pub fn create_fixture_with_deposits<'a>(partial_withdrawals: bool) -> TestFixture<'a> {
    let fixture = create_fixture_with_holders(partial_withdrawals);

    let holdings = [AssetIndex::DAI, AssetIndex::USDC, AssetIndex::USDT];
    for (user, index) in fixture.users.iter().zip(holdings) {
        fixture.deposit(user, index, fixture.units(index, 1_000_000));
    }

    fixture
}
