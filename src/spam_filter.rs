multiversx_sc::imports!();

use crate::types::Classification;

/// Smallest transfer that earns lottery weight: 10_000 gwei-equivalent (1e13 units).
pub const SPAM_THRESHOLD: u64 = 10_000_000_000_000;

pub fn classify<M: ManagedTypeApi>(value: &BigUint<M>) -> Classification {
    if *value >= SPAM_THRESHOLD {
        Classification::Qualifying
    } else {
        Classification::Dust
    }
}

/// Weight a transfer adds to the active period. Dust still lands in the
/// pool balance but is never selectable.
pub fn weight_of<M: ManagedTypeApi>(value: &BigUint<M>) -> BigUint<M> {
    match classify(value) {
        Classification::Qualifying => value.clone(),
        Classification::Dust => BigUint::zero(),
    }
}
