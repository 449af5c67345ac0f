multiversx_sc::imports!();

/// Pool balance below which settlement is skipped: 1 EGLD.
pub const MIN_SETTLEMENT_BALANCE: u64 = 1_000_000_000_000_000_000;

/// Winner receives 90% of the settled period's qualifying weight.
pub const WINNER_SHARE_BPS: u64 = 9_000;

/// Each beneficiary receives 5% of the winner's payout.
pub const BENEFICIARY_SKIM_BPS: u64 = 500;

pub const BPS_DENOMINATOR: u64 = 10_000;

#[derive(Debug)]
pub struct PayoutAmounts<M: ManagedTypeApi> {
    pub reward_base: BigUint<M>,
    pub winner_payout: BigUint<M>,
    /// Paid once to each of the two beneficiaries
    pub beneficiary_payout: BigUint<M>,
    /// What stays in the pool after the three transfers
    pub remainder: BigUint<M>,
}

impl<M: ManagedTypeApi> PayoutAmounts<M> {
    pub fn total_paid(&self) -> BigUint<M> {
        &self.winner_payout + &(&self.beneficiary_payout * 2u64)
    }
}

pub fn meets_minimum_balance<M: ManagedTypeApi>(pool_balance: &BigUint<M>) -> bool {
    *pool_balance >= MIN_SETTLEMENT_BALANCE
}

/// Splits `reward_base` between the winner and the beneficiaries.
///
/// Returns `None` when the pool cannot cover the three transfers; callers
/// treat that like an underfunded pool and pay nothing.
pub fn compute_payout<M: ManagedTypeApi>(
    pool_balance: &BigUint<M>,
    reward_base: &BigUint<M>,
) -> Option<PayoutAmounts<M>> {
    let winner_payout = (reward_base * WINNER_SHARE_BPS) / BPS_DENOMINATOR;
    let beneficiary_payout = (&winner_payout * BENEFICIARY_SKIM_BPS) / BPS_DENOMINATOR;
    let total_paid = &winner_payout + &(&beneficiary_payout * 2u64);
    if total_paid > *pool_balance {
        return None;
    }

    Some(PayoutAmounts {
        reward_base: reward_base.clone(),
        remainder: pool_balance - &total_paid,
        winner_payout,
        beneficiary_payout,
    })
}
