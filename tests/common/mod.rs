// In-memory contribution ledger for the StaticApi tests. Mirrors the
// per-period storage layout the contract keeps on chain and counts the
// keyed reads and writes each operation makes.

#![allow(dead_code)]

use std::cell::Cell;

use multiversx_sc::types::{BigUint, ManagedAddress};
use multiversx_sc_scenario::api::StaticApi;
use reward_pool::ledger::{ContributionLedger, DrawEntry};

pub type Api = StaticApi;

pub fn address(tag: u8) -> ManagedAddress<Api> {
    ManagedAddress::new_from_bytes(&[tag; 32])
}

/// Amount in thousandths of one EGLD.
pub fn egld_milli(milli: u64) -> BigUint<Api> {
    BigUint::from(milli) * BigUint::from(1_000_000_000_000_000u64)
}

#[derive(Default)]
struct PeriodRecord {
    start: u64,
    total: Option<BigUint<Api>>,
    contributors: u64,
    weights: Vec<(ManagedAddress<Api>, BigUint<Api>)>,
    entries: Vec<DrawEntry<Api>>,
}

#[derive(Default)]
pub struct MemoryLedger {
    periods: Vec<PeriodRecord>,
    reads: Cell<usize>,
    writes: usize,
}

impl MemoryLedger {
    /// Keyed reads plus writes made so far.
    pub fn operations(&self) -> usize {
        self.reads.get() + self.writes
    }

    fn period(&self, start: u64) -> Option<&PeriodRecord> {
        self.reads.set(self.reads.get() + 1);
        self.periods.iter().find(|record| record.start == start)
    }

    fn period_mut(&mut self, start: u64) -> &mut PeriodRecord {
        self.writes += 1;
        match self.periods.iter().position(|record| record.start == start) {
            Some(index) => &mut self.periods[index],
            None => {
                self.periods.push(PeriodRecord {
                    start,
                    ..Default::default()
                });
                self.periods.last_mut().unwrap()
            }
        }
    }

    pub fn accounts_in_order(&self, start: u64) -> Vec<ManagedAddress<Api>> {
        self.period(start)
            .map(|record| record.entries.iter().map(|e| e.account.clone()).collect())
            .unwrap_or_default()
    }
}

impl ContributionLedger<Api> for MemoryLedger {
    fn total_weight(&self, period: u64) -> BigUint<Api> {
        self.period(period)
            .and_then(|record| record.total.clone())
            .unwrap_or_else(BigUint::zero)
    }

    fn set_total_weight(&mut self, period: u64, total: &BigUint<Api>) {
        self.period_mut(period).total = Some(total.clone());
    }

    fn weight_of(&self, period: u64, account: &ManagedAddress<Api>) -> BigUint<Api> {
        self.period(period)
            .and_then(|record| record.weights.iter().find(|(a, _)| a == account))
            .map(|(_, weight)| weight.clone())
            .unwrap_or_else(BigUint::zero)
    }

    fn set_weight(&mut self, period: u64, account: &ManagedAddress<Api>, weight: &BigUint<Api>) {
        let record = self.period_mut(period);
        match record.weights.iter().position(|(a, _)| a == account) {
            Some(index) => record.weights[index].1 = weight.clone(),
            None => record.weights.push((account.clone(), weight.clone())),
        }
    }

    fn contributor_count(&self, period: u64) -> u64 {
        self.period(period).map(|record| record.contributors).unwrap_or(0)
    }

    fn set_contributor_count(&mut self, period: u64, count: u64) {
        self.period_mut(period).contributors = count;
    }

    fn entry_count(&self, period: u64) -> usize {
        self.period(period).map(|record| record.entries.len()).unwrap_or(0)
    }

    fn entry(&self, period: u64, index: usize) -> DrawEntry<Api> {
        let entry = &self.period(period).unwrap().entries[index];
        DrawEntry {
            account: entry.account.clone(),
            cumulative_weight: entry.cumulative_weight.clone(),
        }
    }

    fn push_entry(&mut self, period: u64, entry: &DrawEntry<Api>) {
        self.period_mut(period).entries.push(DrawEntry {
            account: entry.account.clone(),
            cumulative_weight: entry.cumulative_weight.clone(),
        });
    }
}
