use super::{
    errors::MultiSigError,
    structs::{Transaction, TxId},
};
use ink::prelude::vec::Vec;
use pendzl::traits::{AccountId, Balance};

#[ink::trait_definition]
/// Trait defining the transaction lifecycle of the MultiSig Wallet.
pub trait MultiSigWallet {
    /// Records a transaction sending `value` to `to`, optionally calling it with `data`.
    /// The caller becomes the initiator. No confirmation is recorded.
    ///
    /// On success emits `TransactionSubmitted` event.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTarget` if `to` is the zero account.
    #[ink(message)]
    fn submit_transaction(
        &mut self,
        to: AccountId,
        value: Balance,
        data: Vec<u8>,
    ) -> Result<TxId, MultiSigError>;

    /// Confirms the transaction on behalf of the caller and returns the confirmation count.
    /// Once confirmations reach the threshold the transaction becomes `ReadyForExecution`.
    ///
    /// On success emits `TransactionConfirmed` event.
    ///
    /// # Errors
    ///
    /// Returns `UnknownProposal` if the transaction doesn't exist.
    /// Returns `NotAuthorizedSigner` if the caller is not an owner.
    /// Returns `NotPending` if the transaction was executed or cancelled.
    /// Returns `AlreadyConfirmed` if the caller already confirmed.
    #[ink(message)]
    fn confirm_transaction(&mut self, tx_id: TxId) -> Result<u32, MultiSigError>;

    /// Withdraws the caller's confirmation and returns the remaining count.
    /// Falling below the threshold moves the transaction back to `Pending`.
    ///
    /// On success emits `ConfirmationRevoked` event.
    ///
    /// # Errors
    ///
    /// Returns `UnknownProposal` if the transaction doesn't exist.
    /// Returns `AlreadyExecuted` or `AlreadyCancelled` if the transaction is settled.
    /// Returns `NotConfirmed` if the caller has no confirmation to revoke.
    #[ink(message)]
    fn revoke_confirmation(&mut self, tx_id: TxId) -> Result<u32, MultiSigError>;

    /// Executes the transaction. It is marked `Executed` before the transfer or call is dispatched.
    ///
    /// On success emits `TransactionExecuted` event.
    ///
    /// # Errors
    ///
    /// Returns `UnknownProposal` if the transaction doesn't exist.
    /// Returns `AlreadyExecuted` or `AlreadyCancelled` if the transaction is settled.
    /// Returns `NotAuthorizedSigner` if the caller is not an owner.
    /// Returns `QuorumNotMet` if confirmations of current owners are below the threshold.
    /// Returns `InvalidPayload` if `data` is non-empty but shorter than a selector.
    /// Returns `TransferFailed` if the plain transfer fails.
    /// Returns `UnderlyingCallReverted` if the called contract fails.
    #[ink(message)]
    fn execute_transaction(&mut self, tx_id: TxId) -> Result<(), MultiSigError>;

    /// Cancels a live transaction.
    ///
    /// On success emits `TransactionCancelled` event.
    ///
    /// # Errors
    ///
    /// Returns `UnknownProposal` if the transaction doesn't exist.
    /// Returns `AlreadyExecuted` or `AlreadyCancelled` if the transaction is settled.
    /// Returns `NotInitiator` if the caller is neither the initiator nor the wallet.
    #[ink(message)]
    fn cancel_transaction(&mut self, tx_id: TxId) -> Result<(), MultiSigError>;

    /// Accepts native funds.
    ///
    /// On success emits `Deposit` event.
    #[ink(message, payable)]
    fn deposit(&mut self) -> Result<(), MultiSigError>;
}

#[ink::trait_definition]
/// Owner set management. Every message may only be called by the wallet itself,
/// which means through an executed transaction targeting the wallet.
pub trait MultiSigWalletManage {
    /// On success emits `OwnerAddition` event.
    ///
    /// # Errors
    ///
    /// Returns `OnlyWallet` if the caller is not the wallet.
    /// Returns `ZeroAddress` if `owner` is the zero account.
    /// Returns `DuplicateOwner` if `owner` already is an owner.
    #[ink(message)]
    fn add_owner(&mut self, owner: AccountId) -> Result<(), MultiSigError>;

    /// On success emits `OwnerRemoval` event.
    ///
    /// # Errors
    ///
    /// Returns `OnlyWallet` if the caller is not the wallet.
    /// Returns `NotAuthorizedSigner` if `owner` is not an owner.
    /// Returns `InvalidThreshold` if fewer owners than required confirmations would remain.
    #[ink(message)]
    fn remove_owner(&mut self, owner: AccountId) -> Result<(), MultiSigError>;

    /// On success emits `RequiredConfirmationsChanged` event.
    ///
    /// # Errors
    ///
    /// Returns `OnlyWallet` if the caller is not the wallet.
    /// Returns `InvalidThreshold` if `required` is zero or above the number of owners.
    #[ink(message)]
    fn update_required_confirmations(&mut self, required: u32) -> Result<(), MultiSigError>;
}

#[ink::trait_definition]
pub trait MultiSigWalletView {
    #[ink(message)]
    fn owners(&self) -> Vec<AccountId>;

    #[ink(message)]
    fn is_owner(&self, account: AccountId) -> bool;

    #[ink(message)]
    fn required_confirmations(&self) -> u32;

    /// Returns the transaction. For a live one the confirmation count and status reflect the
    /// current owners and threshold.
    #[ink(message)]
    fn transaction(&self, tx_id: TxId) -> Option<Transaction>;

    /// Returns the number of submitted transactions (also the next transaction id).
    #[ink(message)]
    fn transaction_count(&self) -> TxId;

    #[ink(message)]
    fn transaction_confirmers(&self, tx_id: TxId) -> Vec<AccountId>;

    #[ink(message)]
    fn has_confirmed(&self, tx_id: TxId, owner: AccountId) -> bool;

    /// Returns confirmations of current owners and the required threshold.
    #[ink(message)]
    fn confirmation_status(&self, tx_id: TxId) -> Option<(u32, u32)>;

    /// Returns owners count, required confirmations, native balance and transaction count.
    #[ink(message)]
    fn wallet_details(&self) -> (u32, u32, Balance, TxId);

    #[ink(message)]
    fn balance(&self) -> Balance;
}
