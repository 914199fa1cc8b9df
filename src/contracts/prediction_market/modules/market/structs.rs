use ink::env::{DefaultEnvironment, Environment};
use pendzl::traits::{AccountId, Balance, String, Timestamp};

pub type MarketId = u32;
pub type BlockNumber = <DefaultEnvironment as Environment>::BlockNumber;

#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub enum MarketStatus {
    /// Accepting stakes until the resolution block.
    Open,
    /// Outcome is final.
    Resolved,
    /// Every stake is refundable.
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub enum Outcome {
    Yes,
    No,
    Unresolved,
}

#[derive(Debug, Clone, PartialEq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct Market {
    pub id: MarketId,
    pub description: String,
    /// PSP22 token the market is denominated in. `None` for the native currency.
    pub token: Option<AccountId>,
    pub creator: AccountId,
    pub creation_block: BlockNumber,
    /// first block at which stakes are refused and the oracle may resolve.
    pub resolution_block: BlockNumber,
    /// observed value at or above which the market resolves to `Yes`.
    pub resolution_condition: u128,
    pub status: MarketStatus,
    pub resolved_outcome: Outcome,
    pub total_yes_stakes: Balance,
    pub total_no_stakes: Balance,
    pub created_at: Timestamp,
}

impl Market {
    pub fn total_stakes(&self) -> Option<Balance> {
        self.total_yes_stakes.checked_add(self.total_no_stakes)
    }

    pub fn total_for(&self, outcome: Outcome) -> Balance {
        match outcome {
            Outcome::Yes => self.total_yes_stakes,
            Outcome::No => self.total_no_stakes,
            Outcome::Unresolved => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct Stake {
    pub staker: AccountId,
    pub outcome: Outcome,
    pub amount: Balance,
    pub withdrawn: bool,
}
