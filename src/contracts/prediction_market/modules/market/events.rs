pub use ink::primitives::AccountId;
use pendzl::traits::{Balance, String, Timestamp};

use super::structs::{BlockNumber, MarketId, Outcome};

#[ink::event]
pub struct MarketCreated {
    #[ink(topic)]
    pub market_id: MarketId,
    pub description: String,
    pub token: Option<AccountId>,
    pub resolution_block: BlockNumber,
    pub created_at: Timestamp,
}

#[ink::event]
pub struct StakePlaced {
    #[ink(topic)]
    pub market_id: MarketId,
    #[ink(topic)]
    pub staker: AccountId,
    pub outcome: Outcome,
    pub amount: Balance,
    pub token: Option<AccountId>,
}

#[ink::event]
pub struct MarketResolved {
    #[ink(topic)]
    pub market_id: MarketId,
    pub outcome: Outcome,
    pub timestamp: Timestamp,
}

#[ink::event]
pub struct MarketCancelled {
    #[ink(topic)]
    pub market_id: MarketId,
    pub timestamp: Timestamp,
}

#[ink::event]
pub struct WinningsWithdrawn {
    #[ink(topic)]
    pub market_id: MarketId,
    #[ink(topic)]
    pub winner: AccountId,
    pub winnings: Balance,
}
