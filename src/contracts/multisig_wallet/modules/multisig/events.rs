pub use ink::primitives::AccountId;
use pendzl::traits::{Balance, Timestamp};

use super::structs::TxId;

#[ink::event]
pub struct TransactionSubmitted {
    #[ink(topic)]
    pub tx_id: TxId,
    #[ink(topic)]
    pub initiator: AccountId,
    #[ink(topic)]
    pub to: AccountId,
    pub value: Balance,
}

#[ink::event]
pub struct TransactionConfirmed {
    #[ink(topic)]
    pub tx_id: TxId,
    #[ink(topic)]
    pub confirmer: AccountId,
    pub confirmation_count: u32,
}

#[ink::event]
pub struct ConfirmationRevoked {
    #[ink(topic)]
    pub tx_id: TxId,
    #[ink(topic)]
    pub owner: AccountId,
    pub confirmation_count: u32,
}

#[ink::event]
pub struct TransactionExecuted {
    #[ink(topic)]
    pub tx_id: TxId,
    #[ink(topic)]
    pub executor: AccountId,
    pub timestamp: Timestamp,
}

#[ink::event]
pub struct TransactionCancelled {
    #[ink(topic)]
    pub tx_id: TxId,
    pub timestamp: Timestamp,
}

#[ink::event]
pub struct OwnerAddition {
    #[ink(topic)]
    pub owner: AccountId,
}

#[ink::event]
pub struct OwnerRemoval {
    #[ink(topic)]
    pub owner: AccountId,
}

#[ink::event]
pub struct RequiredConfirmationsChanged {
    pub new_required_confirmations: u32,
    pub timestamp: Timestamp,
}

#[ink::event]
pub struct Deposit {
    #[ink(topic)]
    pub from: AccountId,
    pub amount: Balance,
    pub balance: Balance,
}
