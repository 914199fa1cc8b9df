pub mod owners;
pub mod transactions;
