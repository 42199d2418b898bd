use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::PoolAdded;
use crate::state::{Farm, Pool};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct AddPoolParams {
    pub alloc_weight: u64,
    pub deposit_fee_bps: u16,
}

#[derive(Accounts)]
pub struct AddPool<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [FARM_SEED],
        bump = farm.bump,
        constraint = farm.admin == admin.key() @ ErrorCode::Unauthorized,
    )]
    pub farm: Account<'info, Farm>,

    #[account(
        init,
        payer = admin,
        space = Pool::LEN,
        seeds = [POOL_SEED, &farm.total_pools.to_le_bytes()],
        bump,
    )]
    pub pool: Account<'info, Pool>,

    pub stake_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = admin,
        token::mint = stake_mint,
        token::authority = pool,
    )]
    pub stake_vault: Account<'info, TokenAccount>,

    #[account(
        constraint = fee_collector.mint == stake_mint.key() @ ErrorCode::InvalidParameter,
    )]
    pub fee_collector: Account<'info, TokenAccount>,

    /// CHECK: Pyth oracle price feed for the staked asset
    pub oracle: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handler(ctx: Context<AddPool>, params: AddPoolParams) -> Result<()> {
    require!(
        params.deposit_fee_bps <= MAX_DEPOSIT_FEE_BPS,
        ErrorCode::DepositFeeTooHigh
    );

    let pool_key = ctx.accounts.pool.key();
    let farm_key = ctx.accounts.farm.key();
    let stake_mint_key = ctx.accounts.stake_mint.key();
    let clock = Clock::get()?;

    let farm = &mut ctx.accounts.farm;
    let index = farm.total_pools;
    farm.total_pools = farm
        .total_pools
        .checked_add(1)
        .ok_or(ErrorCode::MathOverflow)?;
    farm.total_alloc_weight = farm
        .total_alloc_weight
        .checked_add(params.alloc_weight)
        .ok_or(ErrorCode::MathOverflow)?;

    let pool = &mut ctx.accounts.pool;
    pool.farm = farm_key;
    pool.bump = ctx.bumps.pool;
    pool.index = index;
    pool.stake_mint = stake_mint_key;
    pool.stake_vault = ctx.accounts.stake_vault.key();
    pool.fee_collector = ctx.accounts.fee_collector.key();
    pool.oracle = ctx.accounts.oracle.key();
    pool.alloc_weight = params.alloc_weight;
    pool.deposit_fee_bps = params.deposit_fee_bps;
    // Pools added before emission starts begin accruing at start_slot
    pool.last_settled_slot = clock.slot.max(farm.start_slot);
    pool.acc_reward_per_share = 0;
    pool.total_staked = 0;
    pool.active = true;
    pool._reserved = [0u8; 64];

    emit!(PoolAdded {
        pool: pool_key,
        stake_mint: stake_mint_key,
        alloc_weight: params.alloc_weight,
        deposit_fee_bps: params.deposit_fee_bps,
        slot: clock.slot,
    });

    Ok(())
}
