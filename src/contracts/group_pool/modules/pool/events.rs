pub use ink::primitives::AccountId;
use pendzl::traits::{Balance, String, Timestamp};
use prediction_market::modules::market::structs::{MarketId, Outcome};

use super::structs::PoolId;

#[ink::event]
pub struct PoolCreated {
    #[ink(topic)]
    pub pool_id: PoolId,
    #[ink(topic)]
    pub creator: AccountId,
    #[ink(topic)]
    pub multisig: AccountId,
    pub name: String,
    pub token: Option<AccountId>,
}

#[ink::event]
pub struct MemberAdded {
    #[ink(topic)]
    pub pool_id: PoolId,
    #[ink(topic)]
    pub member: AccountId,
}

#[ink::event]
pub struct MemberRemoved {
    #[ink(topic)]
    pub pool_id: PoolId,
    #[ink(topic)]
    pub member: AccountId,
}

#[ink::event]
pub struct DepositMade {
    #[ink(topic)]
    pub pool_id: PoolId,
    #[ink(topic)]
    pub member: AccountId,
    pub amount: Balance,
}

#[ink::event]
pub struct WithdrawalRequested {
    #[ink(topic)]
    pub pool_id: PoolId,
    #[ink(topic)]
    pub member: AccountId,
    pub amount: Balance,
}

#[ink::event]
pub struct StakePlacedOnMarket {
    #[ink(topic)]
    pub pool_id: PoolId,
    #[ink(topic)]
    pub market_id: MarketId,
    pub amount: Balance,
    pub outcome: Outcome,
}

#[ink::event]
pub struct WinningsDistributed {
    #[ink(topic)]
    pub pool_id: PoolId,
    #[ink(topic)]
    pub market_id: MarketId,
    pub amount: Balance,
}

#[ink::event]
pub struct MemberPaidOut {
    #[ink(topic)]
    pub pool_id: PoolId,
    #[ink(topic)]
    pub member: AccountId,
    pub amount: Balance,
}

#[ink::event]
pub struct PoolClosed {
    #[ink(topic)]
    pub pool_id: PoolId,
    pub timestamp: Timestamp,
}
