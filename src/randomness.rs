multiversx_sc::imports!();

/// Per-height pseudorandom values published by the ledger.
///
/// A source that cannot serve a height yields `None` and the caller must
/// not fall back to a substitute value.
pub trait RandomnessSource<M: ManagedTypeApi> {
    fn value_at(&self, height: u64) -> Option<BigUint<M>>;
}

/// The executing block's random seed, read as a big-endian integer.
///
/// Only the executing height is served. An all-zero seed is never produced
/// by block proposers, so it is treated as missing.
pub struct LedgerRandomness<M: ManagedTypeApi> {
    height: u64,
    seed: BigUint<M>,
}

impl<M: ManagedTypeApi> LedgerRandomness<M> {
    pub fn new(height: u64, seed: &ManagedByteArray<M, 48>) -> Self {
        LedgerRandomness {
            height,
            seed: BigUint::from_bytes_be_buffer(seed.as_managed_buffer()),
        }
    }
}

impl<M: ManagedTypeApi> RandomnessSource<M> for LedgerRandomness<M> {
    fn value_at(&self, height: u64) -> Option<BigUint<M>> {
        if height != self.height || self.seed == 0u64 {
            return None;
        }
        Some(self.seed.clone())
    }
}
