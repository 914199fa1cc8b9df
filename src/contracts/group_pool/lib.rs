#![cfg_attr(not(feature = "std"), no_std, no_main)]

pub mod modules;

/// Group Pools staking collectively on the Prediction Market.
///
/// Members deposit into a pool denominated in the native currency or a PSP22 token.
/// Each pool is governed by a MultiSig Wallet: staking the pool on a market and closing the pool
/// are messages only the multisig may call, so they go through its confirm and execute flow.
/// When the pool stakes, every active member commits principal in proportion to its balance and
/// the winnings are later credited back in the same proportions.
#[ink::contract]
pub mod group_pool {
    pub use crate::modules::pool::{
        errors::GroupPoolError,
        events::{
            DepositMade, MemberAdded, MemberPaidOut, MemberRemoved, PoolClosed, PoolCreated,
            StakePlacedOnMarket, WinningsDistributed, WithdrawalRequested,
        },
        storage_fields::pools::PoolsStorage,
        structs::{Member, Pool, PoolId, PoolStake},
        traits::{GroupPool, GroupPoolView},
    };
    use ink::codegen::TraitCallBuilder;
    pub use ink::prelude::{string::String, vec::Vec};
    pub use pendzl::contracts::psp22::{PSP22Ref, PSP22};
    use prediction_market::modules::market::{
        errors::PredictionMarketError,
        structs::{MarketId, Outcome},
        traits::{
            PredictionMarket, PredictionMarketRef, PredictionMarketView, PredictionMarketViewRef,
        },
    };
    use scale::Encode;

    #[ink(storage)]
    #[derive(pendzl::traits::StorageFieldGetter)]
    pub struct GroupPoolContract {
        prediction_market: AccountId,
        #[storage_field]
        pools: PoolsStorage,
    }

    impl GroupPoolContract {
        #[ink(constructor)]
        pub fn new(prediction_market: AccountId) -> Self {
            GroupPoolContract {
                prediction_market,
                pools: Default::default(),
            }
        }

        fn _ensure_manager(&self, pool: &Pool) -> Result<(), GroupPoolError> {
            let caller = self.env().caller();
            if caller != pool.creator && caller != pool.multisig {
                return Err(GroupPoolError::NotAuthorized);
            }
            Ok(())
        }

        fn _ensure_multisig(&self, pool: &Pool) -> Result<(), GroupPoolError> {
            if self.env().caller() != pool.multisig {
                return Err(GroupPoolError::NotAuthorized);
            }
            Ok(())
        }

        fn _transfer_out(
            &self,
            token: Option<AccountId>,
            to: AccountId,
            amount: Balance,
        ) -> Result<(), GroupPoolError> {
            match token {
                Some(token) => {
                    let mut psp22: PSP22Ref = token.into();
                    psp22
                        .call_mut()
                        .transfer(to, amount, Vec::<u8>::new())
                        .call_v1()
                        .invoke()?;
                }
                None => {
                    self.env()
                        .transfer(to, amount)
                        .map_err(|_| GroupPoolError::NativeTransferFailed)?;
                }
            }
            Ok(())
        }

        fn _place_on_market(
            &self,
            pool: &Pool,
            market_id: MarketId,
            outcome: Outcome,
            amount: Balance,
        ) -> Result<(), GroupPoolError> {
            let view: PredictionMarketViewRef = self.prediction_market.into();
            let market = view
                .call()
                .market(market_id)
                .call_v1()
                .invoke()
                .ok_or(PredictionMarketError::UnknownMarket)?;
            if market.token != pool.token {
                return Err(GroupPoolError::WrongDenomination);
            }

            let mut prediction_market: PredictionMarketRef = self.prediction_market.into();
            match pool.token {
                Some(token) => {
                    let mut psp22: PSP22Ref = token.into();
                    psp22
                        .call_mut()
                        .approve(self.prediction_market, amount)
                        .call_v1()
                        .invoke()?;
                    prediction_market
                        .call_mut()
                        .place_stake(market_id, outcome, amount)
                        .call_v1()
                        .invoke()?;
                }
                None => {
                    prediction_market
                        .call_mut()
                        .place_stake(market_id, outcome, amount)
                        .call_v1()
                        .transferred_value(amount)
                        .invoke()?;
                }
            }
            Ok(())
        }
    }

    impl GroupPool for GroupPoolContract {
        #[ink(message)]
        fn create_pool(
            &mut self,
            name: String,
            multisig: AccountId,
            token: Option<AccountId>,
        ) -> Result<PoolId, GroupPoolError> {
            if multisig == AccountId::from([0; 32]) {
                return Err(GroupPoolError::ZeroAddress);
            }

            let creator = self.env().caller();
            let pool_id = self.pools.insert_pool(
                name.clone(),
                multisig,
                token,
                &creator,
                self.env().block_timestamp(),
            )?;

            self.env().emit_event::<PoolCreated>(PoolCreated {
                pool_id,
                creator,
                multisig,
                name,
                token,
            });
            self.env().emit_event::<MemberAdded>(MemberAdded {
                pool_id,
                member: creator,
            });

            Ok(pool_id)
        }

        #[ink(message)]
        fn add_member(&mut self, pool_id: PoolId, member: AccountId) -> Result<(), GroupPoolError> {
            let pool = self.pools.existing_pool(pool_id)?;
            self._ensure_manager(&pool)?;

            self.pools.add_member(pool_id, &member)?;
            self.env()
                .emit_event::<MemberAdded>(MemberAdded { pool_id, member });
            Ok(())
        }

        #[ink(message)]
        fn remove_member(
            &mut self,
            pool_id: PoolId,
            member: AccountId,
        ) -> Result<(), GroupPoolError> {
            let pool = self.pools.existing_pool(pool_id)?;
            self._ensure_manager(&pool)?;

            self.pools.remove_member(pool_id, &member)?;
            self.env()
                .emit_event::<MemberRemoved>(MemberRemoved { pool_id, member });
            Ok(())
        }

        #[ink(message, payable)]
        fn deposit_native(&mut self, pool_id: PoolId) -> Result<(), GroupPoolError> {
            let member = self.env().caller();
            let amount = self.env().transferred_value();
            if self.pools.existing_pool(pool_id)?.token.is_some() {
                return Err(GroupPoolError::WrongDenomination);
            }

            self.pools.record_deposit(pool_id, &member, amount)?;
            self.env().emit_event::<DepositMade>(DepositMade {
                pool_id,
                member,
                amount,
            });
            Ok(())
        }

        #[ink(message)]
        fn deposit_token(
            &mut self,
            pool_id: PoolId,
            amount: Balance,
        ) -> Result<(), GroupPoolError> {
            let member = self.env().caller();
            let token = self
                .pools
                .existing_pool(pool_id)?
                .token
                .ok_or(GroupPoolError::WrongDenomination)?;

            self.pools.record_deposit(pool_id, &member, amount)?;
            let mut psp22: PSP22Ref = token.into();
            psp22
                .call_mut()
                .transfer_from(member, self.env().account_id(), amount, Vec::<u8>::new())
                .call_v1()
                .invoke()?;

            self.env().emit_event::<DepositMade>(DepositMade {
                pool_id,
                member,
                amount,
            });
            Ok(())
        }

        #[ink(message)]
        fn request_withdrawal(
            &mut self,
            pool_id: PoolId,
            amount: Balance,
        ) -> Result<(), GroupPoolError> {
            let member = self.env().caller();
            let pool = self.pools.existing_pool(pool_id)?;

            self.pools.record_withdrawal(pool_id, &member, amount)?;
            self._transfer_out(pool.token, member, amount)?;

            self.env()
                .emit_event::<WithdrawalRequested>(WithdrawalRequested {
                    pool_id,
                    member,
                    amount,
                });
            Ok(())
        }

        #[ink(message)]
        fn stake_pool_on_market(
            &mut self,
            pool_id: PoolId,
            market_id: MarketId,
            amount: Balance,
            outcome_yes: bool,
        ) -> Result<(), GroupPoolError> {
            let pool = self.pools.existing_pool(pool_id)?;
            self._ensure_multisig(&pool)?;

            let outcome = if outcome_yes { Outcome::Yes } else { Outcome::No };
            let staked = self
                .pools
                .commit_stake(pool_id, market_id, amount, outcome)?;
            ink::env::debug_println!("pool {} stakes {} of {}", pool_id, staked, amount);

            self._place_on_market(&pool, market_id, outcome, staked)?;

            self.env()
                .emit_event::<StakePlacedOnMarket>(StakePlacedOnMarket {
                    pool_id,
                    market_id,
                    amount: staked,
                    outcome,
                });
            Ok(())
        }

        #[ink(message)]
        fn claim_and_distribute_winnings(
            &mut self,
            pool_id: PoolId,
        ) -> Result<Balance, GroupPoolError> {
            self.pools.existing_pool(pool_id)?;
            let stake = self
                .pools
                .stake(pool_id)
                .ok_or(GroupPoolError::NoActiveStake)?;

            let view: PredictionMarketViewRef = self.prediction_market.into();
            let owed = view
                .call()
                .claimable(stake.market_id, self.env().account_id())
                .call_v1()
                .invoke()
                .ok_or(GroupPoolError::MarketNotSettled)?;

            let received = if owed > 0 {
                let mut prediction_market: PredictionMarketRef = self.prediction_market.into();
                prediction_market
                    .call_mut()
                    .withdraw_winnings(stake.market_id)
                    .call_v1()
                    .invoke()?
            } else {
                0
            };

            self.pools.settle_stake(pool_id, received)?;
            self.env()
                .emit_event::<WinningsDistributed>(WinningsDistributed {
                    pool_id,
                    market_id: stake.market_id,
                    amount: received,
                });
            Ok(received)
        }

        #[ink(message)]
        fn distribute_member_payout(
            &mut self,
            pool_id: PoolId,
            member: AccountId,
        ) -> Result<Balance, GroupPoolError> {
            let pool = self.pools.existing_pool(pool_id)?;

            let amount = self.pools.take_payout(pool_id, &member)?;
            self._transfer_out(pool.token, member, amount)?;

            self.env().emit_event::<MemberPaidOut>(MemberPaidOut {
                pool_id,
                member,
                amount,
            });
            Ok(amount)
        }

        #[ink(message)]
        fn close_pool(&mut self, pool_id: PoolId) -> Result<(), GroupPoolError> {
            let pool = self.pools.existing_pool(pool_id)?;
            self._ensure_multisig(&pool)?;

            self.pools.close(pool_id)?;
            self.env().emit_event::<PoolClosed>(PoolClosed {
                pool_id,
                timestamp: self.env().block_timestamp(),
            });
            Ok(())
        }
    }

    impl GroupPoolView for GroupPoolContract {
        #[ink(message)]
        fn prediction_market(&self) -> AccountId {
            self.prediction_market
        }

        #[ink(message)]
        fn pool(&self, pool_id: PoolId) -> Option<Pool> {
            self.pools.pool(pool_id)
        }

        #[ink(message)]
        fn pool_count(&self) -> PoolId {
            self.pools.next_pool_id()
        }

        #[ink(message)]
        fn pool_balance(&self, pool_id: PoolId) -> Balance {
            self.pools
                .pool(pool_id)
                .map(|pool| pool.balance())
                .unwrap_or_default()
        }

        #[ink(message)]
        fn member_count(&self, pool_id: PoolId) -> u32 {
            self.pools.active_members(pool_id).len() as u32
        }

        #[ink(message)]
        fn member_info(&self, pool_id: PoolId, member: AccountId) -> Option<Member> {
            self.pools.member(pool_id, &member)
        }

        #[ink(message)]
        fn pool_members(&self, pool_id: PoolId) -> Vec<AccountId> {
            self.pools.active_members(pool_id)
        }

        #[ink(message)]
        fn is_member(&self, pool_id: PoolId, account: AccountId) -> bool {
            self.pools.is_active_member(pool_id, &account)
        }

        #[ink(message)]
        fn market_stake_info(&self, pool_id: PoolId) -> Option<PoolStake> {
            self.pools.stake(pool_id)
        }

        #[ink(message)]
        fn stake_call_data(
            &self,
            pool_id: PoolId,
            market_id: MarketId,
            amount: Balance,
            outcome_yes: bool,
        ) -> Vec<u8> {
            let mut data: Vec<u8> = ink::selector_bytes!("GroupPool::stake_pool_on_market").into();
            (pool_id, market_id, amount, outcome_yes).encode_to(&mut data);
            data
        }
    }

}
