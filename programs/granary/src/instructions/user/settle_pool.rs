use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::PoolSettled;
use crate::math::accrual;
use crate::state::{Farm, Pool};

#[derive(Accounts)]
pub struct SettlePool<'info> {
    #[account(
        seeds = [FARM_SEED],
        bump = farm.bump,
    )]
    pub farm: Account<'info, Farm>,

    #[account(
        mut,
        seeds = [POOL_SEED, &pool.index.to_le_bytes()],
        bump = pool.bump,
        constraint = pool.farm == farm.key() @ ErrorCode::PoolFarmMismatch,
    )]
    pub pool: Account<'info, Pool>,
}

/// Public crank: anyone may bring a pool's accumulator current. Idempotent
/// and monotonic, so concurrent calls collapse into one.
pub fn handler(ctx: Context<SettlePool>) -> Result<()> {
    let clock = Clock::get()?;
    let pool_key = ctx.accounts.pool.key();

    let farm = &ctx.accounts.farm;
    let pool = &mut ctx.accounts.pool;
    let emitted = accrual::settle_pool(farm, pool, clock.slot)?;

    emit!(PoolSettled {
        pool: pool_key,
        reward_emitted: emitted,
        acc_reward_per_share: pool.acc_reward_per_share,
        slot: clock.slot,
    });

    Ok(())
}
