use super::{
    errors::GroupPoolError,
    structs::{Member, Pool, PoolId, PoolStake},
};
use ink::prelude::vec::Vec;
use pendzl::traits::{AccountId, Balance, String};
use prediction_market::modules::market::structs::MarketId;

#[ink::trait_definition]
/// Trait defining the functions for the Group Pool module.
///
/// Members pool their funds and the pool's MultiSig Wallet decides which market outcome
/// the pool backs. Winnings are credited to members pro rata to the principal they committed.
pub trait GroupPool {
    /// Creates a pool governed by `multisig` and denominated in `token` (`None` for native).
    /// The caller becomes the creator and first member.
    ///
    /// On success emits `PoolCreated` and `MemberAdded` events.
    ///
    /// # Errors
    ///
    /// Returns `ZeroAddress` if `multisig` is the zero account.
    #[ink(message)]
    fn create_pool(
        &mut self,
        name: String,
        multisig: AccountId,
        token: Option<AccountId>,
    ) -> Result<PoolId, GroupPoolError>;

    /// On success emits `MemberAdded` event.
    ///
    /// # Errors
    ///
    /// Returns `NotAuthorized` if the caller is neither the creator nor the multisig.
    /// Returns `PoolClosed` if the pool is closed.
    /// Returns `AlreadyMember` if `member` is an active member.
    #[ink(message)]
    fn add_member(&mut self, pool_id: PoolId, member: AccountId) -> Result<(), GroupPoolError>;

    /// Deactivates `member`. Its balances stay withdrawable.
    ///
    /// On success emits `MemberRemoved` event.
    ///
    /// # Errors
    ///
    /// Returns `NotAuthorized` if the caller is neither the creator nor the multisig.
    /// Returns `PoolClosed` if the pool is closed.
    /// Returns `NotMember` if `member` is not an active member.
    #[ink(message)]
    fn remove_member(&mut self, pool_id: PoolId, member: AccountId)
        -> Result<(), GroupPoolError>;

    /// Deposits the transferred value.
    ///
    /// On success emits `DepositMade` event.
    ///
    /// # Errors
    ///
    /// Returns `WrongDenomination` if the pool is denominated in a token.
    /// Returns `PoolClosed` if the pool is closed.
    /// Returns `NotMember` if the caller is not an active member.
    /// Returns `InvalidAmount` if nothing was transferred.
    #[ink(message, payable)]
    fn deposit_native(&mut self, pool_id: PoolId) -> Result<(), GroupPoolError>;

    /// Pulls `amount` of the pool token from the caller with `transfer_from`.
    ///
    /// On success emits `DepositMade` event.
    ///
    /// # Errors
    ///
    /// Same as `deposit_native`, `WrongDenomination` if the pool is native.
    #[ink(message)]
    fn deposit_token(&mut self, pool_id: PoolId, amount: Balance) -> Result<(), GroupPoolError>;

    /// Sends `amount` of the caller's uncommitted funds back to the caller.
    ///
    /// On success emits `WithdrawalRequested` event.
    ///
    /// # Errors
    ///
    /// Returns `NotMember` if the caller never was a member.
    /// Returns `InvalidAmount` if `amount` is zero.
    /// Returns `InsufficientMemberBalance` if the caller's withdrawals would exceed its deposits.
    #[ink(message)]
    fn request_withdrawal(&mut self, pool_id: PoolId, amount: Balance)
        -> Result<(), GroupPoolError>;

    /// Stakes the pool on `market_id`. Every active member commits its share of `amount`
    /// in proportion to its current balance. Must be called by the pool's multisig,
    /// `stake_call_data` returns the payload of such a transaction.
    ///
    /// On success emits `StakePlacedOnMarket` event.
    ///
    /// # Errors
    ///
    /// Returns `NotAuthorized` if the caller is not the pool's multisig.
    /// Returns `StakeAlreadyActive` if the pool has a stake outstanding.
    /// Returns `PoolClosed` if the pool is closed.
    /// Returns `InvalidAmount` if `amount` is zero or rounds down to zero for every member.
    /// Returns `InsufficientPoolBalance` if members hold less than `amount`.
    /// Returns `WrongDenomination` if the market's currency differs from the pool's.
    #[ink(message)]
    fn stake_pool_on_market(
        &mut self,
        pool_id: PoolId,
        market_id: MarketId,
        amount: Balance,
        outcome_yes: bool,
    ) -> Result<(), GroupPoolError>;

    /// Withdraws what the market owes the pool and credits it to members' payouts.
    /// A lost stake is cleared with nothing to credit.
    ///
    /// On success emits `WinningsDistributed` event.
    ///
    /// # Errors
    ///
    /// Returns `NoActiveStake` if the pool has no stake outstanding.
    /// Returns `MarketNotSettled` if the market is neither resolved nor cancelled.
    #[ink(message)]
    fn claim_and_distribute_winnings(&mut self, pool_id: PoolId) -> Result<Balance, GroupPoolError>;

    /// Sends `member` its due payout.
    ///
    /// On success emits `MemberPaidOut` event.
    ///
    /// # Errors
    ///
    /// Returns `NothingToPay` if no payout is due.
    #[ink(message)]
    fn distribute_member_payout(
        &mut self,
        pool_id: PoolId,
        member: AccountId,
    ) -> Result<Balance, GroupPoolError>;

    /// On success emits `PoolClosed` event.
    ///
    /// # Errors
    ///
    /// Returns `NotAuthorized` if the caller is not the pool's multisig.
    /// Returns `StakeAlreadyActive` if the pool has a stake outstanding.
    /// Returns `PoolClosed` if the pool is already closed.
    #[ink(message)]
    fn close_pool(&mut self, pool_id: PoolId) -> Result<(), GroupPoolError>;
}

#[ink::trait_definition]
pub trait GroupPoolView {
    /// Returns the Prediction Market the pools stake on.
    #[ink(message)]
    fn prediction_market(&self) -> AccountId;

    #[ink(message)]
    fn pool(&self, pool_id: PoolId) -> Option<Pool>;

    #[ink(message)]
    fn pool_count(&self) -> PoolId;

    /// Returns the funds members hold in the pool, excluding committed stakes.
    #[ink(message)]
    fn pool_balance(&self, pool_id: PoolId) -> Balance;

    #[ink(message)]
    fn member_count(&self, pool_id: PoolId) -> u32;

    #[ink(message)]
    fn member_info(&self, pool_id: PoolId, member: AccountId) -> Option<Member>;

    /// Returns active members.
    #[ink(message)]
    fn pool_members(&self, pool_id: PoolId) -> Vec<AccountId>;

    #[ink(message)]
    fn is_member(&self, pool_id: PoolId, account: AccountId) -> bool;

    #[ink(message)]
    fn market_stake_info(&self, pool_id: PoolId) -> Option<PoolStake>;

    /// Returns the data of a MultiSig Wallet transaction calling `stake_pool_on_market`.
    #[ink(message)]
    fn stake_call_data(
        &self,
        pool_id: PoolId,
        market_id: MarketId,
        amount: Balance,
        outcome_yes: bool,
    ) -> Vec<u8>;
}
