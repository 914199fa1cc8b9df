use ink::prelude::vec::Vec;
use pendzl::{
    math::{
        errors::MathError,
        operations::{mul_div, Rounding},
    },
    traits::{AccountId, Balance},
};

fn total_of(weights: &[(AccountId, Balance)]) -> Result<Balance, MathError> {
    weights.iter().try_fold(0 as Balance, |acc, (_, weight)| {
        acc.checked_add(*weight).ok_or(MathError::Overflow)
    })
}

/// Splits `amount` across `balances` pro rata, rounding each part down.
///
/// Members without balance are left out. The parts may sum to less than `amount`;
/// the dust stays with the members.
pub fn commit_shares(
    amount: Balance,
    balances: &[(AccountId, Balance)],
) -> Result<Vec<(AccountId, Balance)>, MathError> {
    let total = total_of(balances)?;
    let mut shares = Vec::with_capacity(balances.len());
    for (member, balance) in balances.iter().filter(|(_, balance)| *balance > 0) {
        let part = mul_div(amount, *balance, total, Rounding::Down)?;
        if part > 0 {
            shares.push((*member, part));
        }
    }
    Ok(shares)
}

/// Splits `payout` across `shares` pro rata. Every part is rounded down and the
/// remainder goes to the last share, so the parts always sum to `payout`.
pub fn split_payout(
    payout: Balance,
    shares: &[(AccountId, Balance)],
) -> Result<Vec<(AccountId, Balance)>, MathError> {
    let total = total_of(shares)?;
    let mut parts = Vec::with_capacity(shares.len());
    if payout == 0 || total == 0 {
        return Ok(parts);
    }

    let mut distributed: Balance = 0;
    for (i, (member, share)) in shares.iter().enumerate() {
        let part = if i + 1 == shares.len() {
            payout
                .checked_sub(distributed)
                .ok_or(MathError::Underflow)?
        } else {
            mul_div(payout, *share, total, Rounding::Down)?
        };
        distributed = distributed.checked_add(part).ok_or(MathError::Overflow)?;
        parts.push((*member, part));
    }
    ink::env::debug_println!("split {} across {} shares", payout, parts.len());
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> AccountId {
        AccountId::from([1; 32])
    }
    fn bob() -> AccountId {
        AccountId::from([2; 32])
    }
    fn charlie() -> AccountId {
        AccountId::from([3; 32])
    }

    #[test]
    fn stake_winnings_follow_deposits() {
        let shares = commit_shares(100, &[(alice(), 60), (bob(), 40)]).unwrap();
        assert_eq!(shares, vec![(alice(), 60), (bob(), 40)]);

        let payout = split_payout(150, &shares).unwrap();
        assert_eq!(payout, vec![(alice(), 90), (bob(), 60)]);
    }

    #[test]
    fn commit_rounds_down_and_skips_empty_balances() {
        let shares = commit_shares(10, &[(alice(), 1), (bob(), 0), (charlie(), 2)]).unwrap();
        assert_eq!(shares, vec![(alice(), 3), (charlie(), 6)]);
    }

    #[test]
    fn payout_remainder_goes_to_last_share() {
        let parts = split_payout(100, &[(alice(), 1), (bob(), 1), (charlie(), 1)]).unwrap();
        assert_eq!(parts, vec![(alice(), 33), (bob(), 33), (charlie(), 34)]);
    }

    #[test]
    fn lost_stake_pays_nothing() {
        assert!(split_payout(0, &[(alice(), 60), (bob(), 40)])
            .unwrap()
            .is_empty());
    }
}
