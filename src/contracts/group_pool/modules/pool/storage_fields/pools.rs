use ink::{prelude::vec::Vec, storage::Mapping};
use pendzl::{
    math::errors::MathError,
    traits::{AccountId, Balance, String, Timestamp},
};
use prediction_market::modules::market::structs::{MarketId, Outcome};

use crate::modules::pool::{
    errors::GroupPoolError,
    helpers::distribution::{commit_shares, split_payout},
    structs::{Member, Pool, PoolId, PoolStake, PoolStatus},
};

#[derive(Debug, Default)]
#[pendzl::storage_item]
pub struct PoolsStorage {
    #[lazy]
    next_pool_id: PoolId,
    pools: Mapping<PoolId, Pool>,
    members: Mapping<(PoolId, AccountId), Member>,
    /// every account ever added, active or not
    member_list: Mapping<PoolId, Vec<AccountId>>,
    stakes: Mapping<PoolId, PoolStake>,
}

impl PoolsStorage {
    pub fn next_pool_id(&self) -> PoolId {
        self.next_pool_id.get().unwrap_or(0)
    }

    pub fn pool(&self, id: PoolId) -> Option<Pool> {
        self.pools.get(id)
    }

    pub fn member(&self, id: PoolId, account: &AccountId) -> Option<Member> {
        self.members.get((id, *account))
    }

    pub fn is_active_member(&self, id: PoolId, account: &AccountId) -> bool {
        self.member(id, account).map_or(false, |member| member.active)
    }

    pub fn active_members(&self, id: PoolId) -> Vec<AccountId> {
        self.member_list
            .get(id)
            .unwrap_or_default()
            .into_iter()
            .filter(|account| self.is_active_member(id, account))
            .collect()
    }

    pub fn stake(&self, id: PoolId) -> Option<PoolStake> {
        self.stakes.get(id)
    }

    pub fn existing_pool(&self, id: PoolId) -> Result<Pool, GroupPoolError> {
        self.pool(id).ok_or(GroupPoolError::UnknownPool)
    }

    pub fn open_pool(&self, id: PoolId) -> Result<Pool, GroupPoolError> {
        let pool = self.existing_pool(id)?;
        if pool.status != PoolStatus::Open {
            return Err(GroupPoolError::PoolClosed);
        }
        Ok(pool)
    }

    /// Funds of active members that a stake may commit.
    pub fn stakeable_balance(&self, id: PoolId) -> Result<Balance, GroupPoolError> {
        let mut total: Balance = 0;
        for account in self.active_members(id) {
            let net = self
                .member(id, &account)
                .map(|member| member.net_balance())
                .unwrap_or_default();
            total = total.checked_add(net).ok_or(MathError::Overflow)?;
        }
        Ok(total)
    }

    /// Registers a pool with `creator` as its first member.
    pub fn insert_pool(
        &mut self,
        name: String,
        multisig: AccountId,
        token: Option<AccountId>,
        creator: &AccountId,
        created_at: Timestamp,
    ) -> Result<PoolId, GroupPoolError> {
        let pool_id = self.next_pool_id();
        self.pools.insert(
            pool_id,
            &Pool {
                id: pool_id,
                name,
                multisig,
                token,
                creator: *creator,
                total_deposits: 0,
                total_withdrawn: 0,
                total_payouts_due: 0,
                status: PoolStatus::Open,
                created_at,
            },
        );
        self.next_pool_id
            .set(&(pool_id.checked_add(1).ok_or(MathError::Overflow)?));

        self.add_member(pool_id, creator)?;
        Ok(pool_id)
    }

    /// Adds `account` or reactivates it if it was removed before.
    pub fn add_member(&mut self, id: PoolId, account: &AccountId) -> Result<(), GroupPoolError> {
        self.open_pool(id)?;
        let member = match self.member(id, account) {
            Some(member) if member.active => return Err(GroupPoolError::AlreadyMember),
            Some(member) => member,
            None => {
                let mut list = self.member_list.get(id).unwrap_or_default();
                list.push(*account);
                self.member_list.insert(id, &list);
                Member::default()
            }
        };
        self.members.insert(
            (id, *account),
            &Member {
                active: true,
                ..member
            },
        );
        Ok(())
    }

    /// Deactivates `account`. Its balances stay claimable.
    pub fn remove_member(&mut self, id: PoolId, account: &AccountId) -> Result<(), GroupPoolError> {
        self.open_pool(id)?;
        let mut member = self
            .member(id, account)
            .filter(|member| member.active)
            .ok_or(GroupPoolError::NotMember)?;
        member.active = false;
        self.members.insert((id, *account), &member);
        Ok(())
    }

    pub fn record_deposit(
        &mut self,
        id: PoolId,
        account: &AccountId,
        amount: Balance,
    ) -> Result<(), GroupPoolError> {
        let mut pool = self.open_pool(id)?;
        let mut member = self
            .member(id, account)
            .filter(|member| member.active)
            .ok_or(GroupPoolError::NotMember)?;
        if amount == 0 {
            return Err(GroupPoolError::InvalidAmount);
        }

        member.deposit = member
            .deposit
            .checked_add(amount)
            .ok_or(MathError::Overflow)?;
        pool.total_deposits = pool
            .total_deposits
            .checked_add(amount)
            .ok_or(MathError::Overflow)?;

        self.members.insert((id, *account), &member);
        self.pools.insert(id, &pool);
        Ok(())
    }

    pub fn record_withdrawal(
        &mut self,
        id: PoolId,
        account: &AccountId,
        amount: Balance,
    ) -> Result<(), GroupPoolError> {
        let mut pool = self.existing_pool(id)?;
        let mut member = self
            .member(id, account)
            .ok_or(GroupPoolError::NotMember)?;
        if amount == 0 {
            return Err(GroupPoolError::InvalidAmount);
        }

        let withdrawn = member
            .withdrawn
            .checked_add(amount)
            .ok_or(MathError::Overflow)?;
        if withdrawn > member.deposit {
            return Err(GroupPoolError::InsufficientMemberBalance);
        }
        member.withdrawn = withdrawn;
        pool.total_withdrawn = pool
            .total_withdrawn
            .checked_add(amount)
            .ok_or(MathError::Overflow)?;

        self.members.insert((id, *account), &member);
        self.pools.insert(id, &pool);
        Ok(())
    }

    /// Commits the pro-rata principal of every active member to a stake on `market_id`
    /// and returns the effective stake. Authorization is checked by the caller.
    pub fn commit_stake(
        &mut self,
        id: PoolId,
        market_id: MarketId,
        amount: Balance,
        outcome: Outcome,
    ) -> Result<Balance, GroupPoolError> {
        if self.stake(id).is_some() {
            return Err(GroupPoolError::StakeAlreadyActive);
        }
        let mut pool = self.open_pool(id)?;
        if amount == 0 {
            return Err(GroupPoolError::InvalidAmount);
        }
        if amount > self.stakeable_balance(id)? {
            return Err(GroupPoolError::InsufficientPoolBalance);
        }

        let balances: Vec<(AccountId, Balance)> = self
            .active_members(id)
            .into_iter()
            .filter_map(|account| {
                self.member(id, &account)
                    .map(|member| (account, member.net_balance()))
            })
            .collect();
        let shares = commit_shares(amount, &balances)?;

        let mut effective: Balance = 0;
        for (account, part) in shares.iter() {
            let mut member = self
                .member(id, account)
                .ok_or(GroupPoolError::NotMember)?;
            member.withdrawn = member
                .withdrawn
                .checked_add(*part)
                .ok_or(MathError::Overflow)?;
            self.members.insert((id, *account), &member);
            effective = effective.checked_add(*part).ok_or(MathError::Overflow)?;
        }
        if effective == 0 {
            return Err(GroupPoolError::InvalidAmount);
        }

        pool.total_withdrawn = pool
            .total_withdrawn
            .checked_add(effective)
            .ok_or(MathError::Overflow)?;
        self.pools.insert(id, &pool);
        self.stakes.insert(
            id,
            &PoolStake {
                market_id,
                amount: effective,
                outcome,
                shares,
            },
        );
        Ok(effective)
    }

    /// Credits `received` to the members of the outstanding stake and clears it.
    pub fn settle_stake(
        &mut self,
        id: PoolId,
        received: Balance,
    ) -> Result<PoolStake, GroupPoolError> {
        let mut pool = self.existing_pool(id)?;
        let stake = self.stake(id).ok_or(GroupPoolError::NoActiveStake)?;

        for (account, part) in split_payout(received, &stake.shares)? {
            let mut member = self.member(id, &account).unwrap_or_default();
            member.payout_due = member
                .payout_due
                .checked_add(part)
                .ok_or(MathError::Overflow)?;
            self.members.insert((id, account), &member);
        }
        pool.total_payouts_due = pool
            .total_payouts_due
            .checked_add(received)
            .ok_or(MathError::Overflow)?;

        self.pools.insert(id, &pool);
        self.stakes.remove(id);
        Ok(stake)
    }

    /// Clears the payout due to `account` and returns it.
    pub fn take_payout(
        &mut self,
        id: PoolId,
        account: &AccountId,
    ) -> Result<Balance, GroupPoolError> {
        let mut pool = self.existing_pool(id)?;
        let mut member = self
            .member(id, account)
            .ok_or(GroupPoolError::NothingToPay)?;
        let amount = member.payout_due;
        if amount == 0 {
            return Err(GroupPoolError::NothingToPay);
        }

        member.payout_due = 0;
        member.paid_out = member
            .paid_out
            .checked_add(amount)
            .ok_or(MathError::Overflow)?;
        pool.total_payouts_due = pool
            .total_payouts_due
            .checked_sub(amount)
            .ok_or(MathError::Underflow)?;

        self.members.insert((id, *account), &member);
        self.pools.insert(id, &pool);
        Ok(amount)
    }

    pub fn close(&mut self, id: PoolId) -> Result<(), GroupPoolError> {
        if self.stake(id).is_some() {
            return Err(GroupPoolError::StakeAlreadyActive);
        }
        let mut pool = self.open_pool(id)?;
        pool.status = PoolStatus::Closed;
        self.pools.insert(id, &pool);
        Ok(())
    }
}
