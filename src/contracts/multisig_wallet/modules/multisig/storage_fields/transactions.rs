use ink::{prelude::vec::Vec, storage::Mapping};
use pendzl::{
    math::errors::MathError,
    traits::{AccountId, Balance, Timestamp},
};

use crate::modules::multisig::{
    errors::MultiSigError,
    structs::{Transaction, TransactionStatus, TxId},
};

#[derive(Debug, Default)]
#[pendzl::storage_item]
pub struct TransactionsStorage {
    #[lazy]
    next_tx_id: TxId,
    transactions: Mapping<TxId, Transaction>,
    confirmations: Mapping<(TxId, AccountId), ()>,
    /// confirmers in confirmation order
    confirmers: Mapping<TxId, Vec<AccountId>>,
}

impl TransactionsStorage {
    pub fn next_tx_id(&self) -> TxId {
        self.next_tx_id.get().unwrap_or(0)
    }

    pub fn transaction(&self, id: TxId) -> Option<Transaction> {
        self.transactions.get(id)
    }

    pub fn confirmers(&self, id: TxId) -> Vec<AccountId> {
        self.confirmers.get(id).unwrap_or_default()
    }

    pub fn has_confirmed(&self, id: TxId, owner: &AccountId) -> bool {
        self.confirmations.contains((id, *owner))
    }

    /// Counts confirmations given by accounts that are still in `owners`.
    pub fn valid_confirmations(&self, id: TxId, owners: &[AccountId]) -> u32 {
        self.confirmers(id)
            .iter()
            .filter(|confirmer| owners.contains(confirmer))
            .count() as u32
    }

    pub fn insert_transaction(
        &mut self,
        to: AccountId,
        value: Balance,
        data: Vec<u8>,
        initiator: &AccountId,
        created_at: Timestamp,
    ) -> Result<TxId, MultiSigError> {
        let tx_id = self.next_tx_id();
        self.transactions.insert(
            tx_id,
            &Transaction {
                id: tx_id,
                to,
                value,
                data,
                status: TransactionStatus::Pending,
                confirmations: 0,
                created_at,
                initiator: *initiator,
            },
        );
        self.next_tx_id
            .set(&(tx_id.checked_add(1).ok_or(MathError::Overflow)?));
        Ok(tx_id)
    }

    /// Returns the transaction with its count and status evaluated against the current
    /// `owners` and `required` threshold. Settled transactions are returned as stored.
    pub fn transaction_with_quorum(
        &self,
        id: TxId,
        owners: &[AccountId],
        required: u32,
    ) -> Option<Transaction> {
        let mut tx = self.transaction(id)?;
        if tx.ensure_live().is_ok() {
            self.apply_quorum(&mut tx, owners, required);
        }
        Some(tx)
    }

    fn apply_quorum(&self, tx: &mut Transaction, owners: &[AccountId], required: u32) {
        tx.confirmations = self.valid_confirmations(tx.id, owners);
        tx.status = if tx.confirmations >= required {
            TransactionStatus::ReadyForExecution
        } else {
            TransactionStatus::Pending
        };
    }

    /// Records the confirmation of `owner` and returns the confirmations of current `owners`.
    /// Authorization of `owner` is checked by the caller.
    pub fn confirm(
        &mut self,
        id: TxId,
        owner: &AccountId,
        owners: &[AccountId],
        required: u32,
    ) -> Result<u32, MultiSigError> {
        let mut tx = self
            .transaction(id)
            .ok_or(MultiSigError::UnknownProposal)?;
        if tx.ensure_live().is_err() {
            return Err(MultiSigError::NotPending);
        }
        if self.has_confirmed(id, owner) {
            return Err(MultiSigError::AlreadyConfirmed);
        }

        self.confirmations.insert((id, *owner), &());
        let mut confirmers = self.confirmers(id);
        confirmers.push(*owner);
        self.confirmers.insert(id, &confirmers);

        self.apply_quorum(&mut tx, owners, required);
        self.transactions.insert(id, &tx);
        Ok(tx.confirmations)
    }

    pub fn revoke(
        &mut self,
        id: TxId,
        owner: &AccountId,
        owners: &[AccountId],
        required: u32,
    ) -> Result<u32, MultiSigError> {
        let mut tx = self
            .transaction(id)
            .ok_or(MultiSigError::UnknownProposal)?;
        tx.ensure_live()?;
        if !self.has_confirmed(id, owner) {
            return Err(MultiSigError::NotConfirmed);
        }

        self.confirmations.remove((id, *owner));
        let mut confirmers = self.confirmers(id);
        confirmers.retain(|confirmer| confirmer != owner);
        self.confirmers.insert(id, &confirmers);

        self.apply_quorum(&mut tx, owners, required);
        self.transactions.insert(id, &tx);
        Ok(tx.confirmations)
    }

    /// Marks a live transaction `Executed` if `owners` hold enough confirmations.
    pub fn mark_executed(
        &mut self,
        id: TxId,
        owners: &[AccountId],
        required: u32,
    ) -> Result<Transaction, MultiSigError> {
        let mut tx = self
            .transaction(id)
            .ok_or(MultiSigError::UnknownProposal)?;
        tx.ensure_live()?;
        self.apply_quorum(&mut tx, owners, required);
        if tx.status != TransactionStatus::ReadyForExecution {
            return Err(MultiSigError::QuorumNotMet);
        }
        tx.status = TransactionStatus::Executed;
        self.transactions.insert(id, &tx);
        Ok(tx)
    }

    pub fn cancel(&mut self, id: TxId) -> Result<(), MultiSigError> {
        let mut tx = self
            .transaction(id)
            .ok_or(MultiSigError::UnknownProposal)?;
        tx.ensure_live()?;
        tx.status = TransactionStatus::Cancelled;
        self.transactions.insert(id, &tx);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(id: u8) -> AccountId {
        AccountId::from([id; 32])
    }

    fn owners() -> [AccountId; 3] {
        [account(1), account(2), account(3)]
    }

    fn storage_with_tx() -> (TransactionsStorage, TxId) {
        let mut storage = TransactionsStorage::default();
        let id = storage
            .insert_transaction(account(9), 10, Vec::new(), &account(1), 0)
            .unwrap();
        (storage, id)
    }

    #[ink::test]
    fn confirmations_are_a_set() {
        let (mut storage, id) = storage_with_tx();

        assert_eq!(storage.confirm(id, &account(1), &owners(), 2), Ok(1));
        assert_eq!(
            storage.confirm(id, &account(1), &owners(), 2),
            Err(MultiSigError::AlreadyConfirmed)
        );
        assert_eq!(storage.confirm(id, &account(2), &owners(), 2), Ok(2));
        assert_eq!(storage.confirmers(id), vec![account(1), account(2)]);
        assert_eq!(
            storage.transaction(id).unwrap().status,
            TransactionStatus::ReadyForExecution
        );
    }

    #[ink::test]
    fn revoke_below_threshold_returns_to_pending() {
        let (mut storage, id) = storage_with_tx();
        storage.confirm(id, &account(1), &owners(), 2).unwrap();
        storage.confirm(id, &account(2), &owners(), 2).unwrap();

        assert_eq!(storage.revoke(id, &account(1), &owners(), 2), Ok(1));
        assert!(!storage.has_confirmed(id, &account(1)));
        assert_eq!(
            storage.transaction(id).unwrap().status,
            TransactionStatus::Pending
        );
        assert_eq!(
            storage.revoke(id, &account(1), &owners(), 2),
            Err(MultiSigError::NotConfirmed)
        );
    }

    #[ink::test]
    fn only_current_owners_count_towards_quorum() {
        let (mut storage, id) = storage_with_tx();
        storage.confirm(id, &account(1), &owners(), 2).unwrap();
        storage.confirm(id, &account(2), &owners(), 2).unwrap();

        let remaining_owners = [account(1), account(3)];
        assert_eq!(storage.valid_confirmations(id, &remaining_owners), 1);
        assert_eq!(
            storage.mark_executed(id, &remaining_owners, 2).err(),
            Some(MultiSigError::QuorumNotMet)
        );

        let owners = [account(1), account(2), account(3)];
        assert_eq!(
            storage.mark_executed(id, &owners, 2).map(|tx| tx.status),
            Ok(TransactionStatus::Executed)
        );
        assert_eq!(
            storage.mark_executed(id, &owners, 2).err(),
            Some(MultiSigError::AlreadyExecuted)
        );
        assert_eq!(
            storage.confirm(id, &account(3), &self::owners(), 2),
            Err(MultiSigError::NotPending)
        );
    }

    #[ink::test]
    fn cancelled_transaction_is_terminal() {
        let (mut storage, id) = storage_with_tx();
        storage.cancel(id).unwrap();

        assert_eq!(storage.cancel(id), Err(MultiSigError::AlreadyCancelled));
        assert_eq!(
            storage.revoke(id, &account(1), &owners(), 1),
            Err(MultiSigError::AlreadyCancelled)
        );
        assert_eq!(storage.cancel(7), Err(MultiSigError::UnknownProposal));
    }

    #[ink::test]
    fn confirmation_count_ignores_removed_owners() {
        let (mut storage, id) = storage_with_tx();
        storage.confirm(id, &account(2), &owners(), 2).unwrap();

        let remaining_owners = [account(1), account(3)];
        assert_eq!(storage.confirm(id, &account(1), &remaining_owners, 2), Ok(1));
        let tx = storage.transaction(id).unwrap();
        assert_eq!(tx.confirmations, 1);
        assert_eq!(tx.status, TransactionStatus::Pending);

        assert_eq!(storage.revoke(id, &account(2), &remaining_owners, 2), Ok(1));
        assert_eq!(storage.confirm(id, &account(3), &remaining_owners, 2), Ok(2));
        assert_eq!(
            storage.transaction(id).unwrap().status,
            TransactionStatus::ReadyForExecution
        );
    }

    #[ink::test]
    fn readiness_follows_current_threshold() {
        let (mut storage, id) = storage_with_tx();
        storage.confirm(id, &account(1), &owners(), 2).unwrap();

        let stored = storage.transaction(id).unwrap();
        assert_eq!(stored.status, TransactionStatus::Pending);
        let evaluated = storage.transaction_with_quorum(id, &owners(), 1).unwrap();
        assert_eq!(evaluated.status, TransactionStatus::ReadyForExecution);
        assert_eq!(evaluated.confirmations, 1);

        let evaluated = storage
            .transaction_with_quorum(id, &[account(2), account(3)], 1)
            .unwrap();
        assert_eq!(evaluated.status, TransactionStatus::Pending);
        assert_eq!(evaluated.confirmations, 0);

        storage.mark_executed(id, &owners(), 1).unwrap();
        let settled = storage.transaction_with_quorum(id, &[], 1).unwrap();
        assert_eq!(settled.status, TransactionStatus::Executed);
        assert_eq!(settled.confirmations, 1);
        assert_eq!(storage.transaction_with_quorum(9, &owners(), 1), None);
    }
}
