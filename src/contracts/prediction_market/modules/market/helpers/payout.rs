use pendzl::{
    math::{
        errors::MathError,
        operations::{mul_div, Rounding},
    },
    traits::Balance,
};

use crate::modules::market::structs::{Market, MarketStatus, Outcome, Stake};

/// Amount owed to `stake` on a settled `market`.
///
/// A cancelled market refunds every stake. A resolved market pays winners
/// `amount * all_stakes / winning_stakes`; if nobody backed the winning outcome
/// the stakes are refunded. Open markets and withdrawn stakes owe nothing.
pub fn claimable_amount(market: &Market, stake: &Stake) -> Result<Balance, MathError> {
    if stake.withdrawn {
        return Ok(0);
    }

    match market.status {
        MarketStatus::Open => Ok(0),
        MarketStatus::Cancelled => Ok(stake.amount),
        MarketStatus::Resolved => {
            let winning_total = market.total_for(market.resolved_outcome);
            if winning_total == 0 {
                return Ok(stake.amount);
            }
            if stake.outcome != market.resolved_outcome
                || market.resolved_outcome == Outcome::Unresolved
            {
                return Ok(0);
            }
            let total = market.total_stakes().ok_or(MathError::Overflow)?;
            let payout = mul_div(stake.amount, total, winning_total, Rounding::Down)?;
            ink::env::debug_println!(
                "payout: {} (stake {}, total {}, winning {})",
                payout,
                stake.amount,
                total,
                winning_total
            );
            Ok(payout)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::market::structs::MarketId;
    use ink::primitives::AccountId;

    fn market(status: MarketStatus, outcome: Outcome, yes: Balance, no: Balance) -> Market {
        Market {
            id: 0 as MarketId,
            description: "rain tomorrow".into(),
            token: None,
            creator: AccountId::from([1; 32]),
            creation_block: 0,
            resolution_block: 10,
            resolution_condition: 1,
            status,
            resolved_outcome: outcome,
            total_yes_stakes: yes,
            total_no_stakes: no,
            created_at: 0,
        }
    }

    fn stake(outcome: Outcome, amount: Balance) -> Stake {
        Stake {
            staker: AccountId::from([2; 32]),
            outcome,
            amount,
            withdrawn: false,
        }
    }

    #[test]
    fn winner_takes_share_of_losing_side() {
        let m = market(MarketStatus::Resolved, Outcome::Yes, 100, 50);
        assert_eq!(claimable_amount(&m, &stake(Outcome::Yes, 40)), Ok(60));
        assert_eq!(claimable_amount(&m, &stake(Outcome::Yes, 100)), Ok(150));
    }

    #[test]
    fn loser_gets_nothing() {
        let m = market(MarketStatus::Resolved, Outcome::No, 100, 50);
        assert_eq!(claimable_amount(&m, &stake(Outcome::Yes, 100)), Ok(0));
    }

    #[test]
    fn cancelled_and_empty_winning_side_refund() {
        let cancelled = market(MarketStatus::Cancelled, Outcome::Unresolved, 100, 50);
        assert_eq!(claimable_amount(&cancelled, &stake(Outcome::No, 50)), Ok(50));

        let nobody_won = market(MarketStatus::Resolved, Outcome::No, 100, 0);
        assert_eq!(claimable_amount(&nobody_won, &stake(Outcome::Yes, 100)), Ok(100));
    }

    #[test]
    fn open_market_and_withdrawn_stake_owe_nothing() {
        let open = market(MarketStatus::Open, Outcome::Unresolved, 100, 50);
        assert_eq!(claimable_amount(&open, &stake(Outcome::Yes, 100)), Ok(0));

        let resolved = market(MarketStatus::Resolved, Outcome::Yes, 100, 50);
        let mut paid = stake(Outcome::Yes, 100);
        paid.withdrawn = true;
        assert_eq!(claimable_amount(&resolved, &paid), Ok(0));
    }
}
