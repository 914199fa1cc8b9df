use ink::prelude::vec::Vec;
use pendzl::traits::{AccountId, Balance, Timestamp};

use super::errors::MultiSigError;

pub type TxId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub enum TransactionStatus {
    /// collecting confirmations, below the threshold
    Pending,
    /// confirmations reached the threshold
    ReadyForExecution,
    Executed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct Transaction {
    pub id: TxId,
    /// The `AccountId` receiving `value` or being called with `data`.
    pub to: AccountId,
    /// The amount of chain balance that is transferred to `to`.
    pub value: Balance,
    /// Empty for a plain transfer. Otherwise the 4 selector bytes followed by the SCALE encoded
    /// arguments. The called message must return `()` or a `Result`: the first output byte is
    /// read as the `Result` tag, so any other non-zero leading byte counts as a revert.
    pub data: Vec<u8>,
    pub status: TransactionStatus,
    /// number of distinct owners that confirmed
    pub confirmations: u32,
    pub created_at: Timestamp,
    pub initiator: AccountId,
}

impl Transaction {
    /// Fails if the transaction reached a terminal status.
    pub fn ensure_live(&self) -> Result<(), MultiSigError> {
        match self.status {
            TransactionStatus::Executed => Err(MultiSigError::AlreadyExecuted),
            TransactionStatus::Cancelled => Err(MultiSigError::AlreadyCancelled),
            TransactionStatus::Pending | TransactionStatus::ReadyForExecution => Ok(()),
        }
    }
}
