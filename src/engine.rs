multiversx_sc::imports!();

use crate::{
    beneficiaries::Beneficiaries,
    error::RewardPoolError,
    ledger::{ContributionLedger, PendingDraw},
    payout, period_clock,
    randomness::RandomnessSource,
    selector, spam_filter,
    types::{BeneficiarySlot, ClosedSummary, Settlement, TransferReceipt},
};

/// Ledger inputs observed for one inbound transfer.
pub struct InboundTransfer<M: ManagedTypeApi> {
    pub sender: ManagedAddress<M>,
    pub value: BigUint<M>,
    pub height: u64,
    /// Pool balance with this transfer's value already credited
    pub pool_balance: BigUint<M>,
    /// Contracts could observe the draw and revert it, or refuse a payout.
    /// Their transfers fund the pool but neither trigger nor earn weight.
    pub from_contract: bool,
}

/// Engine state outside the contribution ledger: where the active period
/// started, at most one closed period waiting for its draw, and the
/// beneficiary slots.
#[derive(Debug)]
pub struct RewardEngine<M: ManagedTypeApi> {
    pub active_start: u64,
    pub pending: Option<PendingDraw>,
    pub beneficiaries: Beneficiaries<M>,
}

impl<M: ManagedTypeApi> Clone for RewardEngine<M> {
    fn clone(&self) -> Self {
        RewardEngine {
            active_start: self.active_start,
            pending: self.pending,
            beneficiaries: self.beneficiaries.clone(),
        }
    }
}

impl<M: ManagedTypeApi> RewardEngine<M> {
    pub fn new(start_height: u64, beneficiaries: Beneficiaries<M>) -> Self {
        RewardEngine {
            active_start: start_height,
            pending: None,
            beneficiaries,
        }
    }

    /// Runs one inbound transfer through the engine: settle the pending
    /// period if its draw height has passed, close the active period if it
    /// has run its course, then record the transfer into whatever period is
    /// active afterwards.
    ///
    /// Every fallible step runs before the ledger is written, and engine
    /// state is only replaced when all of them succeed.
    pub fn on_transfer<L, R>(
        &mut self,
        ledger: &mut L,
        transfer: &InboundTransfer<M>,
        randomness: &R,
    ) -> Result<TransferReceipt<M>, RewardPoolError>
    where
        L: ContributionLedger<M>,
        R: RandomnessSource<M>,
    {
        let mut next = self.clone();

        let mut settlement = None;
        let mut closed = None;
        if !transfer.from_contract {
            settlement = next.settle_due(ledger, transfer, randomness)?;
            closed = next.close_due(ledger, transfer.height)?;
        }

        let classification = spam_filter::classify(&transfer.value);
        let weight = if transfer.from_contract {
            BigUint::zero()
        } else {
            spam_filter::weight_of(&transfer.value)
        };
        ledger.record(next.active_start, &transfer.sender, &weight);

        *self = next;
        Ok(TransferReceipt {
            classification,
            weight,
            settlement,
            closed,
        })
    }

    pub fn change_beneficiary(
        &mut self,
        caller: &ManagedAddress<M>,
        slot: Option<BeneficiarySlot>,
        new_account: ManagedAddress<M>,
    ) -> Result<(BeneficiarySlot, ManagedAddress<M>), RewardPoolError> {
        self.beneficiaries.reassign(caller, slot, new_account)
    }

    /// Decides the outcome for the pending period without touching state.
    pub fn settle<L, R>(
        &self,
        ledger: &L,
        transfer: &InboundTransfer<M>,
        randomness: &R,
    ) -> Result<Settlement<M>, RewardPoolError>
    where
        L: ContributionLedger<M>,
        R: RandomnessSource<M>,
    {
        let pending = self.pending.ok_or(RewardPoolError::PendingPeriodMissing)?;
        let period_start = pending.period_start;

        if !payout::meets_minimum_balance(&transfer.pool_balance) {
            return Ok(Settlement::Skipped {
                period_start,
                pool_balance: transfer.pool_balance.clone(),
            });
        }

        let Some(seed) = randomness.value_at(transfer.height) else {
            return Ok(Settlement::Deferred {
                period_start,
                draw_height: pending.draw_height,
            });
        };

        let reward_base = ledger.total_weight(period_start);
        let Some(winner) = selector::select_winner(ledger, period_start, &reward_base, &seed)
        else {
            return Ok(Settlement::PoolWon { period_start });
        };

        match payout::compute_payout(&transfer.pool_balance, &reward_base) {
            Some(amounts) => Ok(Settlement::Paid {
                period_start,
                winner,
                beneficiary_a: self.beneficiaries.a.clone(),
                beneficiary_b: self.beneficiaries.b.clone(),
                amounts,
            }),
            None => Ok(Settlement::Skipped {
                period_start,
                pool_balance: transfer.pool_balance.clone(),
            }),
        }
    }

    fn settle_due<L, R>(
        &mut self,
        ledger: &L,
        transfer: &InboundTransfer<M>,
        randomness: &R,
    ) -> Result<Option<Settlement<M>>, RewardPoolError>
    where
        L: ContributionLedger<M>,
        R: RandomnessSource<M>,
    {
        let ready = match &self.pending {
            Some(pending) => period_clock::is_draw_ready(transfer.height, pending.draw_height),
            None => false,
        };
        if !ready {
            return Ok(None);
        }

        let settlement = self.settle(ledger, transfer, randomness)?;
        if settlement.consumes_period() {
            self.pending = None;
        }
        Ok(Some(settlement))
    }

    fn close_due<L: ContributionLedger<M>>(
        &mut self,
        ledger: &L,
        height: u64,
    ) -> Result<Option<ClosedSummary<M>>, RewardPoolError> {
        // a deferred draw keeps the active period open until it clears
        if self.pending.is_some() {
            return Ok(None);
        }
        if !period_clock::is_settlement_due(height, self.active_start)? {
            return Ok(None);
        }

        let draw_height = period_clock::draw_height(height)?;
        let period_start = core::mem::replace(&mut self.active_start, height);
        self.pending = Some(PendingDraw {
            period_start,
            draw_height,
        });
        Ok(Some(ClosedSummary {
            start_height: period_start,
            draw_height,
            total_weight: ledger.total_weight(period_start),
        }))
    }
}
