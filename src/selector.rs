multiversx_sc::imports!();

use crate::ledger::ContributionLedger;

/// Weighted draw over a closed period.
///
/// `randomness mod total_weight` picks a point on a line of length
/// `total_weight`. The period's entries cover consecutive segments of that
/// line in arrival order, and the account owning the segment under the
/// point wins. Entries carry running totals, so the owning entry is found
/// by binary search rather than a walk.
///
/// Returns `None` when nothing qualifying was contributed.
pub fn select_winner<M: ManagedTypeApi, L: ContributionLedger<M>>(
    ledger: &L,
    period: u64,
    total_weight: &BigUint<M>,
    randomness: &BigUint<M>,
) -> Option<ManagedAddress<M>> {
    if *total_weight == 0u64 {
        return None;
    }

    let position = randomness % total_weight;
    let count = ledger.entry_count(period);

    // first entry whose cumulative weight exceeds the position
    let (mut low, mut high) = (0usize, count);
    while low < high {
        let mid = low + (high - low) / 2;
        if ledger.entry(period, mid).cumulative_weight > position {
            high = mid;
        } else {
            low = mid + 1;
        }
    }

    if low < count {
        Some(ledger.entry(period, low).account)
    } else {
        None
    }
}
