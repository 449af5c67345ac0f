multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// DrawEntry: one qualifying contribution on the draw line
// ============================================================

/// Entries are appended in arrival order. `cumulative_weight` is the
/// period's running total including this entry, so consecutive entries
/// cover consecutive segments of `[0, total_weight)`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Debug)]
pub struct DrawEntry<M: ManagedTypeApi> {
    pub account: ManagedAddress<M>,
    pub cumulative_weight: BigUint<M>,
}

// ============================================================
// PendingDraw: a closed period awaiting its draw
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub struct PendingDraw {
    pub period_start: u64,
    /// Earliest height whose randomness may settle the period
    pub draw_height: u64,
}

// ============================================================
// ContributionLedger
// ============================================================

/// Per-period contribution storage. A period is keyed by its start height
/// and its entries are never rewritten, so recording a contribution costs
/// the same no matter how many accounts already took part.
pub trait ContributionLedger<M: ManagedTypeApi> {
    fn total_weight(&self, period: u64) -> BigUint<M>;

    fn set_total_weight(&mut self, period: u64, total: &BigUint<M>);

    /// Aggregated weight of `account` in `period`.
    fn weight_of(&self, period: u64, account: &ManagedAddress<M>) -> BigUint<M>;

    fn set_weight(&mut self, period: u64, account: &ManagedAddress<M>, weight: &BigUint<M>);

    fn contributor_count(&self, period: u64) -> u64;

    fn set_contributor_count(&mut self, period: u64, count: u64);

    fn entry_count(&self, period: u64) -> usize;

    /// Zero-based, in arrival order.
    fn entry(&self, period: u64, index: usize) -> DrawEntry<M>;

    fn push_entry(&mut self, period: u64, entry: &DrawEntry<M>);

    /// Adds `weight` to `account` and appends it to the draw line. Zero
    /// weight (dust) leaves the period untouched.
    fn record(&mut self, period: u64, account: &ManagedAddress<M>, weight: &BigUint<M>) {
        if *weight == 0u64 {
            return;
        }

        let previous = self.weight_of(period, account);
        if previous == 0u64 {
            let count = self.contributor_count(period);
            self.set_contributor_count(period, count + 1);
        }
        self.set_weight(period, account, &(&previous + weight));

        let total = &self.total_weight(period) + weight;
        self.push_entry(
            period,
            &DrawEntry {
                account: account.clone(),
                cumulative_weight: total.clone(),
            },
        );
        self.set_total_weight(period, &total);
    }
}
