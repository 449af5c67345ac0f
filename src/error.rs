// ============================================================
// Errors: every variant reverts the triggering call
// ============================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RewardPoolError {
    /// Caller does not occupy the beneficiary slot it tried to reassign.
    NotBeneficiary,
    /// Block height arithmetic left the u64 range.
    HeightOverflow,
    /// A settlement step ran without a closed period to consume.
    PendingPeriodMissing,
}

impl RewardPoolError {
    pub fn message(&self) -> &'static str {
        match self {
            RewardPoolError::NotBeneficiary => "Caller does not hold the beneficiary slot",
            RewardPoolError::HeightOverflow => "Block height overflow",
            RewardPoolError::PendingPeriodMissing => "No closed period awaiting settlement",
        }
    }
}
