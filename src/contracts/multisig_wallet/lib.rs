#![cfg_attr(not(feature = "std"), no_std, no_main)]

pub mod modules;

/// MultiSig Wallet holding native funds on behalf of a fixed set of owners.
///
/// Anyone may submit a transaction. Owners confirm it and, once the number of confirmations given
/// by current owners reaches the threshold, any owner may execute it. Execution either transfers
/// native value or calls another contract with the stored selector and arguments.
///
/// The owner set and the threshold are managed by the wallet itself, so changing them requires
/// a transaction targeting this contract to be confirmed and executed.
#[ink::contract]
pub mod multisig_wallet {
    pub use crate::modules::multisig::{
        errors::MultiSigError,
        events::{
            ConfirmationRevoked, Deposit, OwnerAddition, OwnerRemoval,
            RequiredConfirmationsChanged, TransactionCancelled, TransactionConfirmed,
            TransactionExecuted, TransactionSubmitted,
        },
        helpers::call_data::{is_zero_address, split_call_data, CallInput, CallOutcome},
        storage_fields::{owners::OwnersStorage, transactions::TransactionsStorage},
        structs::{Transaction, TransactionStatus, TxId},
        traits::{MultiSigWallet, MultiSigWalletManage, MultiSigWalletView},
    };
    use ink::env::{
        call::{build_call, ExecutionInput, Selector},
        CallFlags, DefaultEnvironment,
    };
    pub use ink::prelude::vec::Vec;
    use pendzl::traits::Flush;

    #[ink(storage)]
    #[derive(pendzl::traits::StorageFieldGetter)]
    pub struct MultiSigWalletContract {
        #[storage_field]
        owners: OwnersStorage,
        #[storage_field]
        transactions: TransactionsStorage,
    }

    impl MultiSigWalletContract {
        #[ink(constructor)]
        pub fn new(
            owners: Vec<AccountId>,
            required_confirmations: u32,
        ) -> Result<Self, MultiSigError> {
            Ok(MultiSigWalletContract {
                owners: OwnersStorage::new(owners, required_confirmations)?,
                transactions: Default::default(),
            })
        }

        fn _ensure_wallet(&self) -> Result<(), MultiSigError> {
            if self.env().caller() != self.env().account_id() {
                return Err(MultiSigError::OnlyWallet);
            }
            Ok(())
        }

        /// Performs the effect of an already executed transaction.
        fn _dispatch(&mut self, tx: &Transaction) -> Result<(), MultiSigError> {
            if tx.data.is_empty() {
                return self
                    .env()
                    .transfer(tx.to, tx.value)
                    .map_err(|_| MultiSigError::TransferFailed);
            }

            let (selector, input) = split_call_data(&tx.data)?;
            self.flush();
            let result = build_call::<DefaultEnvironment>()
                .call(tx.to)
                .transferred_value(tx.value)
                .exec_input(ExecutionInput::new(Selector::new(selector)).push_arg(CallInput(input)))
                .call_flags(CallFlags::ALLOW_REENTRY)
                .returns::<CallOutcome>()
                .try_invoke();
            self.load();

            match result {
                Ok(Ok(CallOutcome::Succeeded)) => Ok(()),
                _ => {
                    ink::env::debug_println!("transaction {} reverted in {:?}", tx.id, tx.to);
                    Err(MultiSigError::UnderlyingCallReverted)
                }
            }
        }
    }

    impl MultiSigWallet for MultiSigWalletContract {
        #[ink(message)]
        fn submit_transaction(
            &mut self,
            to: AccountId,
            value: Balance,
            data: Vec<u8>,
        ) -> Result<TxId, MultiSigError> {
            if is_zero_address(&to) {
                return Err(MultiSigError::InvalidTarget);
            }

            let initiator = self.env().caller();
            let tx_id = self.transactions.insert_transaction(
                to,
                value,
                data,
                &initiator,
                self.env().block_timestamp(),
            )?;

            self.env().emit_event::<TransactionSubmitted>(TransactionSubmitted {
                tx_id,
                initiator,
                to,
                value,
            });

            Ok(tx_id)
        }

        #[ink(message)]
        fn confirm_transaction(&mut self, tx_id: TxId) -> Result<u32, MultiSigError> {
            let confirmer = self.env().caller();
            if self.transactions.transaction(tx_id).is_none() {
                return Err(MultiSigError::UnknownProposal);
            }
            self.owners.ensure_owner(&confirmer)?;

            let confirmation_count = self.transactions.confirm(
                tx_id,
                &confirmer,
                &self.owners.owners(),
                self.owners.required_confirmations(),
            )?;

            self.env().emit_event::<TransactionConfirmed>(TransactionConfirmed {
                tx_id,
                confirmer,
                confirmation_count,
            });

            Ok(confirmation_count)
        }

        #[ink(message)]
        fn revoke_confirmation(&mut self, tx_id: TxId) -> Result<u32, MultiSigError> {
            let owner = self.env().caller();
            let confirmation_count = self.transactions.revoke(
                tx_id,
                &owner,
                &self.owners.owners(),
                self.owners.required_confirmations(),
            )?;

            self.env().emit_event::<ConfirmationRevoked>(ConfirmationRevoked {
                tx_id,
                owner,
                confirmation_count,
            });

            Ok(confirmation_count)
        }

        #[ink(message)]
        fn execute_transaction(&mut self, tx_id: TxId) -> Result<(), MultiSigError> {
            let executor = self.env().caller();
            self.transactions
                .transaction(tx_id)
                .ok_or(MultiSigError::UnknownProposal)?
                .ensure_live()?;
            self.owners.ensure_owner(&executor)?;

            let tx = self.transactions.mark_executed(
                tx_id,
                &self.owners.owners(),
                self.owners.required_confirmations(),
            )?;
            self._dispatch(&tx)?;

            self.env().emit_event::<TransactionExecuted>(TransactionExecuted {
                tx_id,
                executor,
                timestamp: self.env().block_timestamp(),
            });

            Ok(())
        }

        #[ink(message)]
        fn cancel_transaction(&mut self, tx_id: TxId) -> Result<(), MultiSigError> {
            let caller = self.env().caller();
            let tx = self
                .transactions
                .transaction(tx_id)
                .ok_or(MultiSigError::UnknownProposal)?;
            tx.ensure_live()?;
            if caller != tx.initiator && caller != self.env().account_id() {
                return Err(MultiSigError::NotInitiator);
            }

            self.transactions.cancel(tx_id)?;
            self.env().emit_event::<TransactionCancelled>(TransactionCancelled {
                tx_id,
                timestamp: self.env().block_timestamp(),
            });

            Ok(())
        }

        #[ink(message, payable)]
        fn deposit(&mut self) -> Result<(), MultiSigError> {
            self.env().emit_event::<Deposit>(Deposit {
                from: self.env().caller(),
                amount: self.env().transferred_value(),
                balance: self.env().balance(),
            });
            Ok(())
        }
    }

    impl MultiSigWalletManage for MultiSigWalletContract {
        #[ink(message)]
        fn add_owner(&mut self, owner: AccountId) -> Result<(), MultiSigError> {
            self._ensure_wallet()?;
            self.owners.add_owner(&owner)?;
            self.env()
                .emit_event::<OwnerAddition>(OwnerAddition { owner });
            Ok(())
        }

        #[ink(message)]
        fn remove_owner(&mut self, owner: AccountId) -> Result<(), MultiSigError> {
            self._ensure_wallet()?;
            self.owners.remove_owner(&owner)?;
            self.env().emit_event::<OwnerRemoval>(OwnerRemoval { owner });
            Ok(())
        }

        #[ink(message)]
        fn update_required_confirmations(&mut self, required: u32) -> Result<(), MultiSigError> {
            self._ensure_wallet()?;
            self.owners.set_required_confirmations(required)?;
            self.env()
                .emit_event::<RequiredConfirmationsChanged>(RequiredConfirmationsChanged {
                    new_required_confirmations: required,
                    timestamp: self.env().block_timestamp(),
                });
            Ok(())
        }
    }

    impl MultiSigWalletView for MultiSigWalletContract {
        #[ink(message)]
        fn owners(&self) -> Vec<AccountId> {
            self.owners.owners()
        }

        #[ink(message)]
        fn is_owner(&self, account: AccountId) -> bool {
            self.owners.is_owner(&account)
        }

        #[ink(message)]
        fn required_confirmations(&self) -> u32 {
            self.owners.required_confirmations()
        }

        #[ink(message)]
        fn transaction(&self, tx_id: TxId) -> Option<Transaction> {
            self.transactions.transaction_with_quorum(
                tx_id,
                &self.owners.owners(),
                self.owners.required_confirmations(),
            )
        }

        #[ink(message)]
        fn transaction_count(&self) -> TxId {
            self.transactions.next_tx_id()
        }

        #[ink(message)]
        fn transaction_confirmers(&self, tx_id: TxId) -> Vec<AccountId> {
            self.transactions.confirmers(tx_id)
        }

        #[ink(message)]
        fn has_confirmed(&self, tx_id: TxId, owner: AccountId) -> bool {
            self.transactions.has_confirmed(tx_id, &owner)
        }

        #[ink(message)]
        fn confirmation_status(&self, tx_id: TxId) -> Option<(u32, u32)> {
            self.transactions.transaction(tx_id)?;
            Some((
                self.transactions
                    .valid_confirmations(tx_id, &self.owners.owners()),
                self.owners.required_confirmations(),
            ))
        }

        #[ink(message)]
        fn wallet_details(&self) -> (u32, u32, Balance, TxId) {
            (
                self.owners.owners().len() as u32,
                self.owners.required_confirmations(),
                self.env().balance(),
                self.transactions.next_tx_id(),
            )
        }

        #[ink(message)]
        fn balance(&self) -> Balance {
            self.env().balance()
        }
    }

}
