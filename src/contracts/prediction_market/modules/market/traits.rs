use super::{
    errors::PredictionMarketError,
    structs::{BlockNumber, Market, MarketId, Outcome, Stake},
};
use ink::{contract_ref, env::DefaultEnvironment, prelude::vec::Vec};
use pendzl::traits::{AccountId, Balance, String};

pub type PredictionMarketRef = contract_ref!(PredictionMarket, DefaultEnvironment);
pub type PredictionMarketViewRef = contract_ref!(PredictionMarketView, DefaultEnvironment);

#[ink::trait_definition]
/// Trait defining the functions for the Prediction Market module.
pub trait PredictionMarket {
    /// Creates a binary market resolving at `resolution_block`.
    ///
    /// On success emits `MarketCreated` event.
    ///
    /// # Errors
    ///
    /// Returns `ResolutionInPast` if `resolution_block` is not in the future.
    #[ink(message)]
    fn create_market(
        &mut self,
        description: String,
        token: Option<AccountId>,
        resolution_block: BlockNumber,
        resolution_condition: u128,
    ) -> Result<MarketId, PredictionMarketError>;

    /// Stakes `amount` on `outcome`. For native markets the transferred value must equal `amount`,
    /// for token markets `amount` is pulled from the caller with `transfer_from`.
    ///
    /// On success emits `StakePlaced` event.
    ///
    /// # Errors
    ///
    /// Returns `UnknownMarket` if the market doesn't exist.
    /// Returns `MarketClosed` if the market is not open or the resolution block was reached.
    /// Returns `InvalidOutcome` if `outcome` is `Unresolved`.
    /// Returns `InvalidAmount` if `amount` is zero or doesn't match the transferred value.
    /// Returns `WrongDenomination` if native value is sent to a token market.
    /// Returns `OutcomeMismatch` if the caller already backs the other outcome.
    #[ink(message, payable)]
    fn place_stake(
        &mut self,
        market_id: MarketId,
        outcome: Outcome,
        amount: Balance,
    ) -> Result<(), PredictionMarketError>;

    /// Pays out the caller's winnings, or refunds the stake of a cancelled market.
    ///
    /// On success emits `WinningsWithdrawn` event.
    ///
    /// # Errors
    ///
    /// Returns `MarketNotSettled` if the market is still open.
    /// Returns `NoStake` if the caller never staked.
    /// Returns `AlreadyWithdrawn` if the stake was already paid out.
    /// Returns `NoWinnings` if the caller backed the losing outcome.
    #[ink(message)]
    fn withdraw_winnings(&mut self, market_id: MarketId) -> Result<Balance, PredictionMarketError>;

    /// Resolves the market to `outcome`.
    ///
    /// On success emits `MarketResolved` event.
    ///
    /// # Errors
    ///
    /// Returns `AccessControlError` if the caller is not a market admin.
    /// Returns `MarketNotOpen` if the market was already resolved or cancelled.
    /// Returns `InvalidOutcome` if `outcome` is `Unresolved`.
    #[ink(message)]
    fn admin_resolve_market(
        &mut self,
        market_id: MarketId,
        outcome: Outcome,
    ) -> Result<(), PredictionMarketError>;

    /// Resolves the market from an observed value: `Yes` if `observed_value` reaches the
    /// resolution condition, `No` otherwise.
    ///
    /// On success emits `MarketResolved` event.
    ///
    /// # Errors
    ///
    /// Returns `AccessControlError` if the caller is not an oracle.
    /// Returns `MarketNotOpen` if the market was already resolved or cancelled.
    /// Returns `ResolutionNotReached` if the resolution block wasn't reached yet.
    #[ink(message)]
    fn auto_resolve_market(
        &mut self,
        market_id: MarketId,
        observed_value: u128,
    ) -> Result<(), PredictionMarketError>;

    /// Cancels the market. All stakes become refundable.
    ///
    /// On success emits `MarketCancelled` event.
    #[ink(message)]
    fn cancel_market(&mut self, market_id: MarketId) -> Result<(), PredictionMarketError>;
}

#[ink::trait_definition]
pub trait PredictionMarketView {
    #[ink(message)]
    fn market(&self, market_id: MarketId) -> Option<Market>;

    /// Returns the number of created markets (also the next market id).
    #[ink(message)]
    fn market_count(&self) -> MarketId;

    #[ink(message)]
    fn market_stakes(&self, market_id: MarketId) -> Vec<Stake>;

    #[ink(message)]
    fn user_stake(&self, market_id: MarketId, user: AccountId) -> Option<(Balance, Outcome)>;

    /// Returns what `user` could withdraw now. `None` while the market is open or doesn't exist.
    #[ink(message)]
    fn claimable(&self, market_id: MarketId, user: AccountId) -> Option<Balance>;
}
