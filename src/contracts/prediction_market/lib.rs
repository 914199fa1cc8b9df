#![cfg_attr(not(feature = "std"), no_std, no_main)]

pub mod modules;

/// Binary prediction markets.
///
/// Anyone may open a market with a resolution block and a condition. Stakes on `Yes` or `No`
/// are accepted while the market is open and before the resolution block. Once resolved, by a
/// market admin or by an oracle reporting the observed value, the winning side shares the whole
/// pot pro rata. Cancelled markets refund every stake.
///
/// Contract is using pendzl Access Control to manage access to the admin messages.
#[pendzl::implementation(AccessControl)]
#[ink::contract]
pub mod prediction_market {
    pub use crate::modules::market::{
        errors::PredictionMarketError,
        events::{MarketCancelled, MarketCreated, MarketResolved, StakePlaced, WinningsWithdrawn},
        helpers::payout::claimable_amount,
        storage_fields::markets::MarketsStorage,
        structs::{Market, MarketId, MarketStatus, Outcome, Stake},
        traits::{PredictionMarket, PredictionMarketView},
    };
    use ink::codegen::TraitCallBuilder;
    pub use ink::prelude::{string::String, vec::Vec};
    pub use pendzl::contracts::psp22::{PSP22Ref, PSP22};

    /// resolves and cancels markets
    pub const MARKET_ADMIN: RoleType = ink::selector_id!("MARKET_ADMIN");
    /// reports observed values once the resolution block is reached
    pub const ORACLE: RoleType = ink::selector_id!("ORACLE");

    #[ink(storage)]
    #[derive(pendzl::traits::StorageFieldGetter)]
    pub struct PredictionMarketContract {
        #[storage_field]
        access: AccessControlData,
        #[storage_field]
        markets: MarketsStorage,
    }

    impl PredictionMarketContract {
        #[ink(constructor)]
        pub fn new(admin: AccountId) -> Result<Self, PredictionMarketError> {
            let mut instance = PredictionMarketContract {
                access: AccessControlData::new(Some(admin)),
                markets: Default::default(),
            };

            instance._grant_role(MARKET_ADMIN, Some(admin))?;
            instance._grant_role(ORACLE, Some(admin))?;

            Ok(instance)
        }

        fn _pay_out(
            &self,
            market: &Market,
            to: AccountId,
            amount: Balance,
        ) -> Result<(), PredictionMarketError> {
            match market.token {
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
                        .map_err(|_| PredictionMarketError::NativeTransferFailed)?;
                }
            }
            Ok(())
        }
    }

    impl PredictionMarket for PredictionMarketContract {
        #[ink(message)]
        fn create_market(
            &mut self,
            description: String,
            token: Option<AccountId>,
            resolution_block: BlockNumber,
            resolution_condition: u128,
        ) -> Result<MarketId, PredictionMarketError> {
            let created_at = self.env().block_timestamp();
            let market_id = self.markets.insert_market(
                description.clone(),
                token,
                &self.env().caller(),
                self.env().block_number(),
                resolution_block,
                resolution_condition,
                created_at,
            )?;

            self.env().emit_event::<MarketCreated>(MarketCreated {
                market_id,
                description,
                token,
                resolution_block,
                created_at,
            });

            Ok(market_id)
        }

        #[ink(message, payable)]
        fn place_stake(
            &mut self,
            market_id: MarketId,
            outcome: Outcome,
            amount: Balance,
        ) -> Result<(), PredictionMarketError> {
            let staker = self.env().caller();
            let market = self
                .markets
                .market(market_id)
                .ok_or(PredictionMarketError::UnknownMarket)?;

            if market.status != MarketStatus::Open
                || self.env().block_number() >= market.resolution_block
            {
                return Err(PredictionMarketError::MarketClosed);
            }
            if amount == 0 {
                return Err(PredictionMarketError::InvalidAmount);
            }

            let transferred = self.env().transferred_value();
            match market.token {
                None if transferred != amount => {
                    return Err(PredictionMarketError::InvalidAmount);
                }
                Some(_) if transferred != 0 => {
                    return Err(PredictionMarketError::WrongDenomination);
                }
                _ => {}
            }

            self.markets
                .record_stake(market_id, &staker, outcome, amount)?;

            if let Some(token) = market.token {
                let mut psp22: PSP22Ref = token.into();
                psp22
                    .call_mut()
                    .transfer_from(staker, self.env().account_id(), amount, Vec::<u8>::new())
                    .call_v1()
                    .invoke()?;
            }

            self.env().emit_event::<StakePlaced>(StakePlaced {
                market_id,
                staker,
                outcome,
                amount,
                token: market.token,
            });

            Ok(())
        }

        #[ink(message)]
        fn withdraw_winnings(
            &mut self,
            market_id: MarketId,
        ) -> Result<Balance, PredictionMarketError> {
            let caller = self.env().caller();
            let market = self
                .markets
                .market(market_id)
                .ok_or(PredictionMarketError::UnknownMarket)?;
            if market.status == MarketStatus::Open {
                return Err(PredictionMarketError::MarketNotSettled);
            }

            let stake = self
                .markets
                .stake_of(market_id, &caller)
                .ok_or(PredictionMarketError::NoStake)?;
            if stake.withdrawn {
                return Err(PredictionMarketError::AlreadyWithdrawn);
            }

            let winnings = claimable_amount(&market, &stake)?;
            if winnings == 0 {
                return Err(PredictionMarketError::NoWinnings);
            }

            self.markets.mark_withdrawn(market_id, &caller)?;
            self._pay_out(&market, caller, winnings)?;

            self.env().emit_event::<WinningsWithdrawn>(WinningsWithdrawn {
                market_id,
                winner: caller,
                winnings,
            });

            Ok(winnings)
        }

        #[ink(message)]
        fn admin_resolve_market(
            &mut self,
            market_id: MarketId,
            outcome: Outcome,
        ) -> Result<(), PredictionMarketError> {
            self._ensure_has_role(MARKET_ADMIN, Some(self.env().caller()))?;

            self.markets.resolve(market_id, outcome)?;
            self.env().emit_event::<MarketResolved>(MarketResolved {
                market_id,
                outcome,
                timestamp: self.env().block_timestamp(),
            });

            Ok(())
        }

        #[ink(message)]
        fn auto_resolve_market(
            &mut self,
            market_id: MarketId,
            observed_value: u128,
        ) -> Result<(), PredictionMarketError> {
            self._ensure_has_role(ORACLE, Some(self.env().caller()))?;

            let market = self
                .markets
                .market(market_id)
                .ok_or(PredictionMarketError::UnknownMarket)?;
            if market.status != MarketStatus::Open {
                return Err(PredictionMarketError::MarketNotOpen);
            }
            if self.env().block_number() < market.resolution_block {
                return Err(PredictionMarketError::ResolutionNotReached);
            }

            let outcome = if observed_value >= market.resolution_condition {
                Outcome::Yes
            } else {
                Outcome::No
            };
            ink::env::debug_println!(
                "observed {} against condition {}",
                observed_value,
                market.resolution_condition
            );

            self.markets.resolve(market_id, outcome)?;
            self.env().emit_event::<MarketResolved>(MarketResolved {
                market_id,
                outcome,
                timestamp: self.env().block_timestamp(),
            });

            Ok(())
        }

        #[ink(message)]
        fn cancel_market(&mut self, market_id: MarketId) -> Result<(), PredictionMarketError> {
            self._ensure_has_role(MARKET_ADMIN, Some(self.env().caller()))?;

            self.markets.cancel(market_id)?;
            self.env().emit_event::<MarketCancelled>(MarketCancelled {
                market_id,
                timestamp: self.env().block_timestamp(),
            });

            Ok(())
        }
    }

    impl PredictionMarketView for PredictionMarketContract {
        #[ink(message)]
        fn market(&self, market_id: MarketId) -> Option<Market> {
            self.markets.market(market_id)
        }

        #[ink(message)]
        fn market_count(&self) -> MarketId {
            self.markets.next_market_id()
        }

        #[ink(message)]
        fn market_stakes(&self, market_id: MarketId) -> Vec<Stake> {
            self.markets.stakes_of(market_id)
        }

        #[ink(message)]
        fn user_stake(&self, market_id: MarketId, user: AccountId) -> Option<(Balance, Outcome)> {
            self.markets
                .stake_of(market_id, &user)
                .map(|stake| (stake.amount, stake.outcome))
        }

        #[ink(message)]
        fn claimable(&self, market_id: MarketId, user: AccountId) -> Option<Balance> {
            let market = self.markets.market(market_id)?;
            if market.status == MarketStatus::Open {
                return None;
            }
            match self.markets.stake_of(market_id, &user) {
                Some(stake) => claimable_amount(&market, &stake).ok(),
                None => Some(0),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use ink::env::{
            test::{self, DefaultAccounts},
            DefaultEnvironment,
        };

        const RESOLUTION_BLOCK: BlockNumber = 10;
        const FUNDS: Balance = 1_000_000_000;

        fn accounts() -> DefaultAccounts<DefaultEnvironment> {
            test::default_accounts::<DefaultEnvironment>()
        }

        fn set_caller(account: AccountId) {
            test::set_caller::<DefaultEnvironment>(account);
        }

        fn balance_of(account: AccountId) -> Balance {
            test::get_account_balance::<DefaultEnvironment>(account).unwrap_or_default()
        }

        fn advance_blocks(n: BlockNumber) {
            for _ in 0..n {
                test::advance_block::<DefaultEnvironment>();
            }
        }

        fn setup() -> (PredictionMarketContract, MarketId) {
            let accounts = accounts();
            for account in [accounts.alice, accounts.bob, accounts.charlie] {
                test::set_account_balance::<DefaultEnvironment>(account, FUNDS);
            }
            test::set_callee::<DefaultEnvironment>(AccountId::from([0x42; 32]));
            set_caller(accounts.alice);
            let mut contract = PredictionMarketContract::new(accounts.alice).unwrap();
            let market_id = contract
                .create_market("gas above 30 gwei".into(), None, RESOLUTION_BLOCK, 30)
                .unwrap();
            (contract, market_id)
        }

        fn stake(
            contract: &mut PredictionMarketContract,
            who: AccountId,
            market_id: MarketId,
            outcome: Outcome,
            amount: Balance,
        ) -> Result<(), PredictionMarketError> {
            set_caller(who);
            ink::env::pay_with_call!(contract.place_stake(market_id, outcome, amount), amount)
        }

        #[ink::test]
        fn create_market_assigns_increasing_ids() {
            let (mut contract, first) = setup();
            let second = contract
                .create_market("second".into(), None, RESOLUTION_BLOCK, 1)
                .unwrap();

            assert_eq!((first, second), (0, 1));
            assert_eq!(contract.market_count(), 2);
            let market = contract.market(first).unwrap();
            assert_eq!(market.status, MarketStatus::Open);
            assert_eq!(market.resolved_outcome, Outcome::Unresolved);
        }

        #[ink::test]
        fn create_market_rejects_past_resolution() {
            let (mut contract, _) = setup();
            advance_blocks(5);
            assert_eq!(
                contract.create_market("late".into(), None, 5, 1),
                Err(PredictionMarketError::ResolutionInPast)
            );
        }

        #[ink::test]
        fn stakes_accumulate_per_outcome() {
            let (mut contract, market_id) = setup();
            let accounts = accounts();

            stake(&mut contract, accounts.alice, market_id, Outcome::Yes, 100).unwrap();
            stake(&mut contract, accounts.alice, market_id, Outcome::Yes, 20).unwrap();
            stake(&mut contract, accounts.bob, market_id, Outcome::No, 50).unwrap();

            let market = contract.market(market_id).unwrap();
            assert_eq!(market.total_yes_stakes, 120);
            assert_eq!(market.total_no_stakes, 50);
            assert_eq!(
                contract.user_stake(market_id, accounts.alice),
                Some((120, Outcome::Yes))
            );
            assert_eq!(contract.market_stakes(market_id).len(), 2);
        }

        #[ink::test]
        fn staker_cannot_switch_outcome() {
            let (mut contract, market_id) = setup();
            let accounts = accounts();

            stake(&mut contract, accounts.bob, market_id, Outcome::Yes, 10).unwrap();
            assert_eq!(
                stake(&mut contract, accounts.bob, market_id, Outcome::No, 10),
                Err(PredictionMarketError::OutcomeMismatch)
            );
        }

        #[ink::test]
        fn stake_value_must_match_amount() {
            let (mut contract, market_id) = setup();
            set_caller(accounts().bob);
            let result =
                ink::env::pay_with_call!(contract.place_stake(market_id, Outcome::Yes, 100), 40);
            assert_eq!(result, Err(PredictionMarketError::InvalidAmount));
        }

        #[ink::test]
        fn unresolved_is_not_a_stakeable_outcome() {
            let (mut contract, market_id) = setup();
            assert_eq!(
                stake(&mut contract, accounts().bob, market_id, Outcome::Unresolved, 10),
                Err(PredictionMarketError::InvalidOutcome)
            );
        }

        #[ink::test]
        fn stake_after_resolution_is_rejected() {
            let (mut contract, market_id) = setup();
            let accounts = accounts();
            set_caller(accounts.alice);
            contract
                .admin_resolve_market(market_id, Outcome::Yes)
                .unwrap();

            assert_eq!(
                stake(&mut contract, accounts.bob, market_id, Outcome::Yes, 10),
                Err(PredictionMarketError::MarketClosed)
            );
        }

        #[ink::test]
        fn stake_at_resolution_block_is_rejected() {
            let (mut contract, market_id) = setup();
            advance_blocks(RESOLUTION_BLOCK);
            assert_eq!(
                stake(&mut contract, accounts().bob, market_id, Outcome::No, 10),
                Err(PredictionMarketError::MarketClosed)
            );
        }

        #[ink::test]
        fn resolution_is_terminal() {
            let (mut contract, market_id) = setup();
            set_caller(accounts().alice);
            contract
                .admin_resolve_market(market_id, Outcome::No)
                .unwrap();

            assert_eq!(
                contract.admin_resolve_market(market_id, Outcome::Yes),
                Err(PredictionMarketError::MarketNotOpen)
            );
            assert_eq!(
                contract.cancel_market(market_id),
                Err(PredictionMarketError::MarketNotOpen)
            );
            assert_eq!(
                contract.market(market_id).unwrap().resolved_outcome,
                Outcome::No
            );
        }

        #[ink::test]
        fn only_admin_resolves() {
            let (mut contract, market_id) = setup();
            set_caller(accounts().bob);
            assert!(matches!(
                contract.admin_resolve_market(market_id, Outcome::Yes),
                Err(PredictionMarketError::AccessControlError(_))
            ));
            assert!(matches!(
                contract.auto_resolve_market(market_id, 100),
                Err(PredictionMarketError::AccessControlError(_))
            ));
        }

        #[ink::test]
        fn auto_resolution_waits_for_resolution_block() {
            let (mut contract, market_id) = setup();
            set_caller(accounts().alice);
            assert_eq!(
                contract.auto_resolve_market(market_id, 100),
                Err(PredictionMarketError::ResolutionNotReached)
            );

            advance_blocks(RESOLUTION_BLOCK);
            contract.auto_resolve_market(market_id, 29).unwrap();
            let market = contract.market(market_id).unwrap();
            assert_eq!(market.status, MarketStatus::Resolved);
            assert_eq!(market.resolved_outcome, Outcome::No);
        }

        #[ink::test]
        fn auto_resolution_meets_condition() {
            let (mut contract, market_id) = setup();
            set_caller(accounts().alice);
            advance_blocks(RESOLUTION_BLOCK);
            contract.auto_resolve_market(market_id, 30).unwrap();
            assert_eq!(
                contract.market(market_id).unwrap().resolved_outcome,
                Outcome::Yes
            );
        }

        #[ink::test]
        fn winners_withdraw_pro_rata() {
            let (mut contract, market_id) = setup();
            let accounts = accounts();

            stake(&mut contract, accounts.alice, market_id, Outcome::Yes, 100).unwrap();
            stake(&mut contract, accounts.charlie, market_id, Outcome::Yes, 50).unwrap();
            stake(&mut contract, accounts.bob, market_id, Outcome::No, 150).unwrap();

            set_caller(accounts.bob);
            assert_eq!(
                contract.withdraw_winnings(market_id),
                Err(PredictionMarketError::MarketNotSettled)
            );
            assert_eq!(contract.claimable(market_id, accounts.bob), None);

            set_caller(accounts.alice);
            contract
                .admin_resolve_market(market_id, Outcome::Yes)
                .unwrap();
            assert_eq!(contract.claimable(market_id, accounts.alice), Some(200));
            assert_eq!(contract.claimable(market_id, accounts.bob), Some(0));

            let alice_before = balance_of(accounts.alice);
            assert_eq!(contract.withdraw_winnings(market_id), Ok(200));
            assert_eq!(balance_of(accounts.alice), alice_before + 200);
            assert_eq!(
                contract.withdraw_winnings(market_id),
                Err(PredictionMarketError::AlreadyWithdrawn)
            );

            set_caller(accounts.charlie);
            assert_eq!(contract.withdraw_winnings(market_id), Ok(100));

            set_caller(accounts.bob);
            assert_eq!(
                contract.withdraw_winnings(market_id),
                Err(PredictionMarketError::NoWinnings)
            );

            set_caller(accounts.django);
            assert_eq!(
                contract.withdraw_winnings(market_id),
                Err(PredictionMarketError::NoStake)
            );
        }

        #[ink::test]
        fn cancelled_market_refunds() {
            let (mut contract, market_id) = setup();
            let accounts = accounts();

            stake(&mut contract, accounts.bob, market_id, Outcome::No, 70).unwrap();

            set_caller(accounts.alice);
            contract.cancel_market(market_id).unwrap();

            set_caller(accounts.bob);
            let before = balance_of(accounts.bob);
            assert_eq!(contract.withdraw_winnings(market_id), Ok(70));
            assert_eq!(balance_of(accounts.bob), before + 70);
        }
    }
}
