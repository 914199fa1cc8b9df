use ink::prelude::vec::Vec;
use pendzl::traits::{AccountId, Balance, String, Timestamp};
use prediction_market::modules::market::structs::{MarketId, Outcome};

pub type PoolId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub enum PoolStatus {
    Open,
    /// No new members, deposits or stakes. Balances stay withdrawable.
    Closed,
}

#[derive(Debug, Clone, PartialEq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct Pool {
    pub id: PoolId,
    pub name: String,
    /// MultiSig Wallet deciding where the pool stakes.
    pub multisig: AccountId,
    /// PSP22 token the pool is denominated in. `None` for the native currency.
    pub token: Option<AccountId>,
    pub creator: AccountId,
    pub total_deposits: Balance,
    /// withdrawals and principal committed to stakes
    pub total_withdrawn: Balance,
    /// winnings credited to members and not yet paid out
    pub total_payouts_due: Balance,
    pub status: PoolStatus,
    pub created_at: Timestamp,
}

impl Pool {
    /// Funds members hold in the pool, excluding committed stakes and due payouts.
    pub fn balance(&self) -> Balance {
        self.total_deposits.saturating_sub(self.total_withdrawn)
    }
}

#[derive(Debug, Clone, Default, PartialEq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct Member {
    pub deposit: Balance,
    pub withdrawn: Balance,
    pub payout_due: Balance,
    pub paid_out: Balance,
    pub active: bool,
}

impl Member {
    pub fn net_balance(&self) -> Balance {
        self.deposit.saturating_sub(self.withdrawn)
    }
}

/// The single stake a pool may have outstanding on a market.
#[derive(Debug, Clone, PartialEq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct PoolStake {
    pub market_id: MarketId,
    /// sum of `shares`, what was actually placed on the market
    pub amount: Balance,
    pub outcome: Outcome,
    /// principal each member committed, snapshotted when the stake was placed
    pub shares: Vec<(AccountId, Balance)>,
}
