use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::state::{Farm, Pool};

/// Emission multiplier over the slot range [from, to).
/// Slots inside the bonus period count `bonus_multiplier` times.
/// - Entirely inside the bonus period: (to - from) * bonus_multiplier
/// - Entirely after the bonus period:  (to - from)
/// - Straddling the boundary: both pieces, split at bonus_end_slot
///
/// An inverted range is a caller contract violation and is rejected rather
/// than allowed to underflow.
pub fn multiplier(farm: &Farm, from: u64, to: u64) -> Result<u128> {
    require!(from <= to, ErrorCode::InvalidSlotRange);

    if to <= farm.bonus_end_slot {
        ((to - from) as u128)
            .checked_mul(farm.bonus_multiplier as u128)
            .ok_or(ErrorCode::MathOverflow.into())
    } else if from >= farm.bonus_end_slot {
        Ok((to - from) as u128)
    } else {
        let bonus_part = ((farm.bonus_end_slot - from) as u128)
            .checked_mul(farm.bonus_multiplier as u128)
            .ok_or(ErrorCode::MathOverflow)?;
        bonus_part
            .checked_add((to - farm.bonus_end_slot) as u128)
            .ok_or(ErrorCode::MathOverflow.into())
    }
}

/// Reward emitted to one pool over [from, to):
/// multiplier * reward_per_slot * alloc_weight / total_alloc_weight.
/// Integer division truncates toward zero; callers tolerate bounded rounding
/// loss, never rounding gain.
pub fn pool_reward(farm: &Farm, pool: &Pool, from: u64, to: u64) -> Result<u128> {
    if farm.total_alloc_weight == 0 || pool.alloc_weight == 0 {
        return Ok(0);
    }
    let mult = multiplier(farm, from, to)?;
    mult.checked_mul(farm.reward_per_slot as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_mul(pool.alloc_weight as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(farm.total_alloc_weight as u128)
        .ok_or(ErrorCode::DivisionByZero.into())
}
