use ink::{prelude::vec::Vec, storage::Mapping};
use pendzl::{
    math::errors::MathError,
    traits::{AccountId, Balance, String, Timestamp},
};

use crate::modules::market::{
    errors::PredictionMarketError,
    structs::{BlockNumber, Market, MarketId, MarketStatus, Outcome, Stake},
};

#[derive(Debug, Default)]
#[pendzl::storage_item]
pub struct MarketsStorage {
    #[lazy]
    next_market_id: MarketId,
    markets: Mapping<MarketId, Market>,
    stakes: Mapping<(MarketId, AccountId), Stake>,
    stakers: Mapping<MarketId, Vec<AccountId>>,
}

impl MarketsStorage {
    pub fn next_market_id(&self) -> MarketId {
        self.next_market_id.get().unwrap_or(0)
    }

    pub fn market(&self, id: MarketId) -> Option<Market> {
        self.markets.get(id)
    }

    pub fn stake_of(&self, id: MarketId, staker: &AccountId) -> Option<Stake> {
        self.stakes.get((id, *staker))
    }

    pub fn stakes_of(&self, id: MarketId) -> Vec<Stake> {
        self.stakers
            .get(id)
            .unwrap_or_default()
            .iter()
            .filter_map(|staker| self.stake_of(id, staker))
            .collect()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn insert_market(
        &mut self,
        description: String,
        token: Option<AccountId>,
        creator: &AccountId,
        creation_block: BlockNumber,
        resolution_block: BlockNumber,
        resolution_condition: u128,
        created_at: Timestamp,
    ) -> Result<MarketId, PredictionMarketError> {
        if resolution_block <= creation_block {
            return Err(PredictionMarketError::ResolutionInPast);
        }

        let market_id = self.next_market_id();
        self.markets.insert(
            market_id,
            &Market {
                id: market_id,
                description,
                token,
                creator: *creator,
                creation_block,
                resolution_block,
                resolution_condition,
                status: MarketStatus::Open,
                resolved_outcome: Outcome::Unresolved,
                total_yes_stakes: 0,
                total_no_stakes: 0,
                created_at,
            },
        );

        self.next_market_id
            .set(&(market_id.checked_add(1).ok_or(MathError::Overflow)?));
        Ok(market_id)
    }

    /// Adds `amount` to the stake of `staker`, keeping one outcome per staker.
    /// Open-ness of the market is checked by the caller.
    pub fn record_stake(
        &mut self,
        id: MarketId,
        staker: &AccountId,
        outcome: Outcome,
        amount: Balance,
    ) -> Result<Stake, PredictionMarketError> {
        if outcome == Outcome::Unresolved {
            return Err(PredictionMarketError::InvalidOutcome);
        }
        let mut market = self
            .market(id)
            .ok_or(PredictionMarketError::UnknownMarket)?;

        let stake = match self.stake_of(id, staker) {
            Some(mut existing) => {
                if existing.outcome != outcome {
                    return Err(PredictionMarketError::OutcomeMismatch);
                }
                existing.amount = existing
                    .amount
                    .checked_add(amount)
                    .ok_or(MathError::Overflow)?;
                existing
            }
            None => {
                let mut stakers = self.stakers.get(id).unwrap_or_default();
                stakers.push(*staker);
                self.stakers.insert(id, &stakers);
                Stake {
                    staker: *staker,
                    outcome,
                    amount,
                    withdrawn: false,
                }
            }
        };

        match outcome {
            Outcome::Yes => {
                market.total_yes_stakes = market
                    .total_yes_stakes
                    .checked_add(amount)
                    .ok_or(MathError::Overflow)?
            }
            _ => {
                market.total_no_stakes = market
                    .total_no_stakes
                    .checked_add(amount)
                    .ok_or(MathError::Overflow)?
            }
        }

        self.stakes.insert((id, *staker), &stake);
        self.markets.insert(id, &market);
        Ok(stake)
    }

    pub fn mark_withdrawn(
        &mut self,
        id: MarketId,
        staker: &AccountId,
    ) -> Result<(), PredictionMarketError> {
        let mut stake = self
            .stake_of(id, staker)
            .ok_or(PredictionMarketError::NoStake)?;
        if stake.withdrawn {
            return Err(PredictionMarketError::AlreadyWithdrawn);
        }
        stake.withdrawn = true;
        self.stakes.insert((id, *staker), &stake);
        Ok(())
    }

    pub fn resolve(&mut self, id: MarketId, outcome: Outcome) -> Result<(), PredictionMarketError> {
        if outcome == Outcome::Unresolved {
            return Err(PredictionMarketError::InvalidOutcome);
        }
        let mut market = self.open_market(id)?;
        market.status = MarketStatus::Resolved;
        market.resolved_outcome = outcome;
        self.markets.insert(id, &market);
        Ok(())
    }

    pub fn cancel(&mut self, id: MarketId) -> Result<(), PredictionMarketError> {
        let mut market = self.open_market(id)?;
        market.status = MarketStatus::Cancelled;
        self.markets.insert(id, &market);
        Ok(())
    }

    fn open_market(&self, id: MarketId) -> Result<Market, PredictionMarketError> {
        let market = self
            .market(id)
            .ok_or(PredictionMarketError::UnknownMarket)?;
        if market.status != MarketStatus::Open {
            return Err(PredictionMarketError::MarketNotOpen);
        }
        Ok(market)
    }
}
