#![no_std]

multiversx_sc::imports!();

pub mod beneficiaries;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod payout;
pub mod period_clock;
pub mod randomness;
pub mod selector;
pub mod spam_filter;
pub mod types;

use beneficiaries::Beneficiaries;
use engine::{InboundTransfer, RewardEngine};
use ledger::{ContributionLedger, DrawEntry, PendingDraw};
use payout::{BENEFICIARY_SKIM_BPS, MIN_SETTLEMENT_BALANCE, WINNER_SHARE_BPS};
use period_clock::LOOKAHEAD;
use randomness::LedgerRandomness;
use spam_filter::SPAM_THRESHOLD;
use types::{BeneficiarySlot, ClosedSummary, Settlement, TransferReceipt};

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait RewardPool {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, beneficiary_a: ManagedAddress, beneficiary_b: ManagedAddress) {
        self.beneficiary_a().set(&beneficiary_a);
        self.beneficiary_b().set(&beneficiary_b);
        self.active_period_start().set(self.blockchain().get_block_nonce());
        self.pending_draw().clear();
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: contribute
    // Every inbound transfer, zero-value included, first gives the
    // period clock a chance to settle and roll over, then records
    // its own weight into the active period. Transfers sent by
    // contracts only fund the pool.
    // ========================================================

    #[endpoint(contribute)]
    #[payable("EGLD")]
    fn contribute(&self) {
        let caller = self.blockchain().get_caller();
        let value = self.call_value().egld_value().clone_value();
        let height = self.blockchain().get_block_nonce();

        let transfer = InboundTransfer {
            from_contract: self.blockchain().is_smart_contract(&caller),
            sender: caller.clone(),
            value: value.clone(),
            height,
            pool_balance: self.pool_balance(),
        };
        let randomness = LedgerRandomness::new(height, &self.blockchain().get_block_random_seed());

        let mut engine = self.load_engine();
        let mut ledger = StoredLedger::new(self);
        let receipt = match engine.on_transfer(&mut ledger, &transfer, &randomness) {
            Ok(receipt) => receipt,
            Err(err) => sc_panic!(err.message()),
        };
        self.store_engine(&engine);

        self.apply_receipt(&caller, &value, &receipt);
    }

    // ========================================================
    // ENDPOINT: changeBeneficiary
    // Only the occupant of a slot can hand it over. Without an
    // explicit slot, the caller's own slot is used (A before B).
    // ========================================================

    #[endpoint(changeBeneficiary)]
    fn change_beneficiary(
        &self,
        new_account: ManagedAddress,
        opt_slot: OptionalValue<BeneficiarySlot>,
    ) {
        let caller = self.blockchain().get_caller();
        let mut engine = self.load_engine();

        let (slot, previous) =
            match engine.change_beneficiary(&caller, opt_slot.into_option(), new_account.clone()) {
                Ok(changed) => changed,
                Err(err) => sc_panic!(err.message()),
            };
        self.store_engine(&engine);

        self.beneficiary_changed_event(slot, &previous, &new_account);
    }

    // ========================================================
    // INTERNAL: engine persistence
    // ========================================================

    fn load_engine(&self) -> RewardEngine<Self::Api> {
        let pending = if self.pending_draw().is_empty() {
            None
        } else {
            Some(self.pending_draw().get())
        };

        let beneficiaries =
            Beneficiaries::new(self.beneficiary_a().get(), self.beneficiary_b().get());

        RewardEngine {
            active_start: self.active_period_start().get(),
            pending,
            beneficiaries,
        }
    }

    fn store_engine(&self, engine: &RewardEngine<Self::Api>) {
        self.active_period_start().set(engine.active_start);
        match &engine.pending {
            Some(pending) => self.pending_draw().set(pending),
            None => self.pending_draw().clear(),
        }
        self.beneficiary_a().set(&engine.beneficiaries.a);
        self.beneficiary_b().set(&engine.beneficiaries.b);
    }

    fn pool_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    // ========================================================
    // INTERNAL: apply effects
    // State is already stored; any failing transfer below reverts
    // the whole call, rollover included.
    // ========================================================

    fn apply_receipt(
        &self,
        caller: &ManagedAddress,
        value: &BigUint,
        receipt: &TransferReceipt<Self::Api>,
    ) {
        if let Some(settlement) = &receipt.settlement {
            self.apply_settlement(settlement);
        }

        if let Some(closed) = &receipt.closed {
            self.emit_period_closed(closed);
        }

        self.contribution_event(caller, value, &receipt.weight);
    }

    fn apply_settlement(&self, settlement: &Settlement<Self::Api>) {
        match settlement {
            Settlement::Paid {
                period_start,
                winner,
                beneficiary_a,
                beneficiary_b,
                amounts,
            } => {
                let skim = &amounts.beneficiary_payout;
                self.send().direct_egld(winner, &amounts.winner_payout);
                self.send().direct_egld(beneficiary_a, skim);
                self.send().direct_egld(beneficiary_b, skim);

                self.reward_winner_event(winner, *period_start, &amounts.winner_payout);
                self.beneficiary_paid_event(beneficiary_a, BeneficiarySlot::A, skim);
                self.beneficiary_paid_event(beneficiary_b, BeneficiarySlot::B, skim);
            }
            Settlement::Deferred {
                period_start,
                draw_height,
            } => {
                self.settlement_deferred_event(*period_start, *draw_height);
            }
            // silent outcomes: value carries forward
            Settlement::PoolWon { .. } | Settlement::Skipped { .. } => {}
        }
    }

    fn emit_period_closed(&self, closed: &ClosedSummary<Self::Api>) {
        self.period_closed_event(closed.start_height, closed.draw_height, &closed.total_weight);
    }

    // ========================================================
    // VIEWS: read-only queries
    // ========================================================

    #[view(getActivePeriod)]
    fn get_active_period(&self) -> MultiValue3<u64, BigUint, u64> {
        let start = self.active_period_start().get();
        let total_weight = self.period_total_weight(start).get();
        (start, total_weight, self.period_contributor_count(start).get()).into()
    }

    #[view(getPendingSettlement)]
    fn get_pending_settlement(&self) -> OptionalValue<MultiValue3<u64, u64, BigUint>> {
        if self.pending_draw().is_empty() {
            return OptionalValue::None;
        }
        let pending = self.pending_draw().get();
        let total_weight = self.period_total_weight(pending.period_start).get();
        OptionalValue::Some((pending.period_start, pending.draw_height, total_weight).into())
    }

    #[view(getCumulativeWeight)]
    fn get_cumulative_weight(&self) -> BigUint {
        self.period_total_weight(self.active_period_start().get()).get()
    }

    #[view(getContribution)]
    fn get_contribution(&self, account: ManagedAddress) -> BigUint {
        self.period_weight(self.active_period_start().get(), &account).get()
    }

    #[view(getPoolBalance)]
    fn get_pool_balance(&self) -> BigUint {
        self.pool_balance()
    }

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue5<u64, BigUint, BigUint, u64, u64> {
        (
            LOOKAHEAD,
            BigUint::from(SPAM_THRESHOLD),
            BigUint::from(MIN_SETTLEMENT_BALANCE),
            WINNER_SHARE_BPS,
            BENEFICIARY_SKIM_BPS,
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("rewardWinner")]
    fn reward_winner_event(
        &self,
        #[indexed] winner: &ManagedAddress,
        #[indexed] period_start: u64,
        amount: &BigUint,
    );

    #[event("beneficiaryPaid")]
    fn beneficiary_paid_event(
        &self,
        #[indexed] beneficiary: &ManagedAddress,
        #[indexed] slot: BeneficiarySlot,
        amount: &BigUint,
    );

    #[event("contribution")]
    fn contribution_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] value: &BigUint,
        weight: &BigUint,
    );

    #[event("periodClosed")]
    fn period_closed_event(
        &self,
        #[indexed] start_height: u64,
        #[indexed] draw_height: u64,
        total_weight: &BigUint,
    );

    #[event("settlementDeferred")]
    fn settlement_deferred_event(&self, #[indexed] start_height: u64, draw_height: u64);

    #[event("beneficiaryChanged")]
    fn beneficiary_changed_event(
        &self,
        #[indexed] slot: BeneficiarySlot,
        #[indexed] previous: &ManagedAddress,
        new_account: &ManagedAddress,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Beneficiary slots ──

    #[view(getBeneficiaryA)]
    #[storage_mapper("beneficiaryA")]
    fn beneficiary_a(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getBeneficiaryB)]
    #[storage_mapper("beneficiaryB")]
    fn beneficiary_b(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Periods ──

    #[storage_mapper("activePeriodStart")]
    fn active_period_start(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("pendingDraw")]
    fn pending_draw(&self) -> SingleValueMapper<PendingDraw>;

    // ── Contribution ledger, keyed by period start ──

    #[storage_mapper("totalWeight")]
    fn period_total_weight(&self, period: u64) -> SingleValueMapper<BigUint>;

    #[storage_mapper("contribution")]
    fn period_weight(&self, period: u64, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("contributorCount")]
    fn period_contributor_count(&self, period: u64) -> SingleValueMapper<u64>;

    #[storage_mapper("drawEntries")]
    fn period_draw_entries(&self, period: u64) -> VecMapper<DrawEntry<Self::Api>>;
}

// ============================================================
// StoredLedger: the contribution ledger on contract storage
// ============================================================

pub struct StoredLedger<'a, C: RewardPool> {
    sc: &'a C,
}

impl<'a, C: RewardPool> StoredLedger<'a, C> {
    pub fn new(sc: &'a C) -> Self {
        StoredLedger { sc }
    }
}

impl<C: RewardPool> ContributionLedger<C::Api> for StoredLedger<'_, C> {
    fn total_weight(&self, period: u64) -> BigUint<C::Api> {
        self.sc.period_total_weight(period).get()
    }

    fn set_total_weight(&mut self, period: u64, total: &BigUint<C::Api>) {
        self.sc.period_total_weight(period).set(total);
    }

    fn weight_of(&self, period: u64, account: &ManagedAddress<C::Api>) -> BigUint<C::Api> {
        self.sc.period_weight(period, account).get()
    }

    fn set_weight(
        &mut self,
        period: u64,
        account: &ManagedAddress<C::Api>,
        weight: &BigUint<C::Api>,
    ) {
        self.sc.period_weight(period, account).set(weight);
    }

    fn contributor_count(&self, period: u64) -> u64 {
        self.sc.period_contributor_count(period).get()
    }

    fn set_contributor_count(&mut self, period: u64, count: u64) {
        self.sc.period_contributor_count(period).set(count);
    }

    fn entry_count(&self, period: u64) -> usize {
        self.sc.period_draw_entries(period).len()
    }

    fn entry(&self, period: u64, index: usize) -> DrawEntry<C::Api> {
        // VecMapper is 1-based
        self.sc.period_draw_entries(period).get(index + 1)
    }

    fn push_entry(&mut self, period: u64, entry: &DrawEntry<C::Api>) {
        self.sc.period_draw_entries(period).push(entry);
    }
}
