multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::payout::PayoutAmounts;

// ============================================================
// Transfer classification
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Classification {
    /// At or above the spam threshold; counts toward lottery weight.
    Qualifying,
    /// Below the spam threshold; adds to the pool but carries no weight.
    Dust,
}

// ============================================================
// Beneficiary slots
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum BeneficiarySlot {
    A,
    B,
}

// ============================================================
// Settlement outcomes
// ============================================================

#[derive(Debug)]
pub enum Settlement<M: ManagedTypeApi> {
    /// External winner drawn; three transfers to apply.
    Paid {
        period_start: u64,
        winner: ManagedAddress<M>,
        beneficiary_a: ManagedAddress<M>,
        beneficiary_b: ManagedAddress<M>,
        amounts: PayoutAmounts<M>,
    },
    /// The period had no qualifying weight, so there was nothing to draw.
    /// Value carries forward.
    PoolWon { period_start: u64 },
    /// Pool balance under the operating minimum. Period consumed, nothing paid.
    Skipped {
        period_start: u64,
        pool_balance: BigUint<M>,
    },
    /// Randomness for the settling height was unavailable; the closed period
    /// stays pending for the next call.
    Deferred { period_start: u64, draw_height: u64 },
}

impl<M: ManagedTypeApi> Settlement<M> {
    /// Whether the closed period was consumed by this outcome.
    pub fn consumes_period(&self) -> bool {
        !matches!(self, Settlement::Deferred { .. })
    }
}

/// Summary of a period closed during a transfer.
#[derive(Debug)]
pub struct ClosedSummary<M: ManagedTypeApi> {
    pub start_height: u64,
    pub draw_height: u64,
    pub total_weight: BigUint<M>,
}

// ============================================================
// TransferReceipt: everything one inbound transfer caused
// ============================================================

#[derive(Debug)]
pub struct TransferReceipt<M: ManagedTypeApi> {
    pub classification: Classification,
    pub weight: BigUint<M>,
    pub settlement: Option<Settlement<M>>,
    pub closed: Option<ClosedSummary<M>>,
}
