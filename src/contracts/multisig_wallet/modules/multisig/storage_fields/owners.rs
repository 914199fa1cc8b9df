use ink::prelude::vec::Vec;
use pendzl::traits::AccountId;

use crate::modules::multisig::{errors::MultiSigError, helpers::call_data::is_zero_address};

#[derive(Debug, Default)]
#[pendzl::storage_item]
pub struct OwnersStorage {
    #[lazy]
    owners: Vec<AccountId>,
    #[lazy]
    required_confirmations: u32,
}

impl OwnersStorage {
    pub fn new(owners: Vec<AccountId>, required: u32) -> Result<Self, MultiSigError> {
        if owners.is_empty() {
            return Err(MultiSigError::NoOwners);
        }
        for (i, owner) in owners.iter().enumerate() {
            if is_zero_address(owner) {
                return Err(MultiSigError::ZeroAddress);
            }
            if owners[..i].contains(owner) {
                return Err(MultiSigError::DuplicateOwner);
            }
        }
        Self::check_threshold(required, owners.len())?;

        let mut instance = Self::default();
        instance.owners.set(&owners);
        instance.required_confirmations.set(&required);
        Ok(instance)
    }

    pub fn owners(&self) -> Vec<AccountId> {
        self.owners.get().unwrap_or_default()
    }

    pub fn is_owner(&self, account: &AccountId) -> bool {
        self.owners().contains(account)
    }

    pub fn required_confirmations(&self) -> u32 {
        self.required_confirmations.get().unwrap_or(1)
    }

    pub fn ensure_owner(&self, account: &AccountId) -> Result<(), MultiSigError> {
        if !self.is_owner(account) {
            return Err(MultiSigError::NotAuthorizedSigner);
        }
        Ok(())
    }

    pub fn add_owner(&mut self, owner: &AccountId) -> Result<(), MultiSigError> {
        if is_zero_address(owner) {
            return Err(MultiSigError::ZeroAddress);
        }
        let mut owners = self.owners();
        if owners.contains(owner) {
            return Err(MultiSigError::DuplicateOwner);
        }
        owners.push(*owner);
        self.owners.set(&owners);
        Ok(())
    }

    pub fn remove_owner(&mut self, owner: &AccountId) -> Result<(), MultiSigError> {
        let mut owners = self.owners();
        let position = owners
            .iter()
            .position(|o| o == owner)
            .ok_or(MultiSigError::NotAuthorizedSigner)?;
        Self::check_threshold(self.required_confirmations(), owners.len() - 1)?;
        owners.remove(position);
        self.owners.set(&owners);
        Ok(())
    }

    pub fn set_required_confirmations(&mut self, required: u32) -> Result<(), MultiSigError> {
        Self::check_threshold(required, self.owners().len())?;
        self.required_confirmations.set(&required);
        Ok(())
    }

    fn check_threshold(required: u32, owners_count: usize) -> Result<(), MultiSigError> {
        if required == 0 || required as usize > owners_count {
            return Err(MultiSigError::InvalidThreshold);
        }
        Ok(())
    }
}
