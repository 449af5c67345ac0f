multiversx_sc::imports!();

use crate::{error::RewardPoolError, types::BeneficiarySlot};

/// The two skim recipients. Each slot is self-service: only its current
/// occupant may hand it over.
#[derive(Debug)]
pub struct Beneficiaries<M: ManagedTypeApi> {
    pub a: ManagedAddress<M>,
    pub b: ManagedAddress<M>,
}

impl<M: ManagedTypeApi> Clone for Beneficiaries<M> {
    fn clone(&self) -> Self {
        Beneficiaries::new(self.a.clone(), self.b.clone())
    }
}

impl<M: ManagedTypeApi> Beneficiaries<M> {
    pub fn new(a: ManagedAddress<M>, b: ManagedAddress<M>) -> Self {
        Beneficiaries { a, b }
    }

    /// First slot held by `account`, A before B.
    pub fn slot_of(&self, account: &ManagedAddress<M>) -> Option<BeneficiarySlot> {
        if self.a == *account {
            Some(BeneficiarySlot::A)
        } else if self.b == *account {
            Some(BeneficiarySlot::B)
        } else {
            None
        }
    }

    /// Hands `slot` (or, when omitted, the caller's own slot) to
    /// `new_account`. Returns the slot that changed and its previous holder.
    pub fn reassign(
        &mut self,
        caller: &ManagedAddress<M>,
        slot: Option<BeneficiarySlot>,
        new_account: ManagedAddress<M>,
    ) -> Result<(BeneficiarySlot, ManagedAddress<M>), RewardPoolError> {
        let slot = match slot {
            Some(slot) => slot,
            None => self.slot_of(caller).ok_or(RewardPoolError::NotBeneficiary)?,
        };

        let holder = match slot {
            BeneficiarySlot::A => &mut self.a,
            BeneficiarySlot::B => &mut self.b,
        };
        if *holder != *caller {
            return Err(RewardPoolError::NotBeneficiary);
        }

        let previous = core::mem::replace(holder, new_account);
        Ok((slot, previous))
    }
}
