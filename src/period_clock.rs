use crate::error::RewardPoolError;

/// Heights a period stays open, and again the heights between its close
/// and the first block whose randomness may settle it.
pub const LOOKAHEAD: u64 = 132;

/// Height at which a period that started at `start_height` becomes closeable.
pub fn close_height(start_height: u64) -> Result<u64, RewardPoolError> {
    start_height
        .checked_add(LOOKAHEAD)
        .ok_or(RewardPoolError::HeightOverflow)
}

pub fn is_settlement_due(
    current_height: u64,
    period_start_height: u64,
) -> Result<bool, RewardPoolError> {
    Ok(current_height >= close_height(period_start_height)?)
}

pub fn draw_height(closed_at: u64) -> Result<u64, RewardPoolError> {
    closed_at
        .checked_add(LOOKAHEAD)
        .ok_or(RewardPoolError::HeightOverflow)
}

pub fn is_draw_ready(current_height: u64, draw_height: u64) -> bool {
    current_height >= draw_height
}
