use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::math::fixed_point::{acc_div, acc_mul, to_token_amount};
use crate::math::schedule::pool_reward;
use crate::state::{Farm, Pool, Position};

/// Bring a pool's accumulator up to `current_slot`. Called before any other
/// state change on the pool. Returns the reward emitted to the pool.
///
/// A pool with zero staked supply advances its watermark without touching
/// the accumulator: supply-zero periods earn nothing.
pub fn settle_pool(farm: &Farm, pool: &mut Pool, current_slot: u64) -> Result<u64> {
    if current_slot <= pool.last_settled_slot {
        return Ok(0);
    }

    if pool.total_staked == 0 {
        pool.last_settled_slot = current_slot;
        return Ok(0);
    }

    let reward = pool_reward(farm, pool, pool.last_settled_slot, current_slot)?;
    let delta = acc_div(reward, pool.total_staked)?;

    pool.acc_reward_per_share = pool
        .acc_reward_per_share
        .checked_add(delta)
        .ok_or(ErrorCode::MathOverflow)?;
    pool.last_settled_slot = current_slot;

    to_token_amount(reward)
}

/// Unclaimed entitlement accrued since the position's last checkpoint:
/// amount * acc_reward_per_share / ACC_PRECISION - reward_debt.
///
/// A checkpoint exceeding the accumulated value means the accounting state
/// is corrupt; that is surfaced as an error, never clamped to zero.
pub fn pending_reward(pool: &Pool, position: &Position) -> Result<u64> {
    let accumulated = acc_mul(position.amount, pool.acc_reward_per_share)?;
    let pending = accumulated
        .checked_sub(position.reward_debt)
        .ok_or(ErrorCode::AccountingInvariantViolated)?;
    to_token_amount(pending)
}

/// Reset the position's checkpoint against the current accumulator. Must be
/// called immediately after every mutation of `position.amount`.
pub fn checkpoint(pool: &Pool, position: &mut Position) -> Result<()> {
    position.reward_debt = acc_mul(position.amount, pool.acc_reward_per_share)?;
    Ok(())
}
