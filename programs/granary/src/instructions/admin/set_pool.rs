use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::PoolUpdated;
use crate::math::accrual::settle_pool;
use crate::state::{Farm, Pool};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct SetPoolParams {
    pub alloc_weight: u64,
    pub deposit_fee_bps: u16,
    pub active: bool,
}

#[derive(Accounts)]
pub struct SetPool<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [FARM_SEED],
        bump = farm.bump,
        constraint = farm.admin == admin.key() @ ErrorCode::Unauthorized,
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

pub fn handler(ctx: Context<SetPool>, params: SetPoolParams) -> Result<()> {
    require!(
        params.deposit_fee_bps <= MAX_DEPOSIT_FEE_BPS,
        ErrorCode::DepositFeeTooHigh
    );

    let pool_key = ctx.accounts.pool.key();
    let clock = Clock::get()?;

    let farm = &mut ctx.accounts.farm;
    let pool = &mut ctx.accounts.pool;

    // Settle against the old weight before it changes; reward already earned
    // under the old weight must not be rewritten.
    settle_pool(farm, pool, clock.slot)?;

    farm.total_alloc_weight = farm
        .total_alloc_weight
        .checked_sub(pool.alloc_weight)
        .ok_or(ErrorCode::MathUnderflow)?
        .checked_add(params.alloc_weight)
        .ok_or(ErrorCode::MathOverflow)?;

    pool.alloc_weight = params.alloc_weight;
    pool.deposit_fee_bps = params.deposit_fee_bps;
    pool.active = params.active;

    emit!(PoolUpdated {
        pool: pool_key,
        alloc_weight: params.alloc_weight,
        deposit_fee_bps: params.deposit_fee_bps,
        active: params.active,
        slot: clock.slot,
    });

    Ok(())
}
