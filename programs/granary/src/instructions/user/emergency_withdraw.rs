use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::EmergencyWithdrawn;
use crate::math::accrual::{pending_reward, settle_pool};
use crate::math::fixed_point::bps_mul;
use crate::state::{Farm, Pool, Position};

#[derive(Accounts)]
pub struct EmergencyWithdraw<'info> {
    pub owner: Signer<'info>,

    #[account(
        seeds = [FARM_SEED],
        bump = farm.bump,
        constraint = farm.emergency_enabled @ ErrorCode::FacilityDisabled,
    )]
    pub farm: Box<Account<'info, Farm>>,

    #[account(
        mut,
        seeds = [POOL_SEED, &pool.index.to_le_bytes()],
        bump = pool.bump,
        constraint = pool.farm == farm.key() @ ErrorCode::PoolFarmMismatch,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        mut,
        seeds = [POSITION_SEED, owner.key().as_ref(), pool.key().as_ref()],
        bump = position.bump,
        constraint = position.owner == owner.key() @ ErrorCode::Unauthorized,
    )]
    pub position: Box<Account<'info, Position>>,

    #[account(
        mut,
        constraint = stake_vault.key() == pool.stake_vault @ ErrorCode::InvalidParameter,
    )]
    pub stake_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = fee_collector.key() == pool.fee_collector @ ErrorCode::InvalidParameter,
    )]
    pub fee_collector: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = user_stake_account.owner == owner.key() @ ErrorCode::Unauthorized,
        constraint = user_stake_account.mint == pool.stake_mint @ ErrorCode::InvalidParameter,
    )]
    pub user_stake_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Exit without claiming rewards. The pending entitlement is forfeited; the
/// staked amount less the emergency fee is returned.
pub fn handler(ctx: Context<EmergencyWithdraw>) -> Result<()> {
    require!(
        ctx.accounts.position.amount > 0,
        ErrorCode::NothingStaked
    );

    let clock = Clock::get()?;
    let pool_key = ctx.accounts.pool.key();
    let owner_key = ctx.accounts.owner.key();
    let pool_index = ctx.accounts.pool.index;
    let pool_bump = ctx.accounts.pool.bump;

    let farm = &ctx.accounts.farm;
    let pool = &mut ctx.accounts.pool;
    settle_pool(farm, pool, clock.slot)?;

    let position = &mut ctx.accounts.position;
    let amount = position.amount;
    let forfeited = pending_reward(pool, position)?;
    let fee = bps_mul(amount, farm.emergency_fee_bps)?;
    let payout = amount.checked_sub(fee).ok_or(ErrorCode::MathUnderflow)?;

    // Ledger writes complete before any transfer
    position.amount = 0;
    position.reward_debt = 0;
    position.last_stake_slot = clock.slot;
    pool.total_staked = pool
        .total_staked
        .checked_sub(amount)
        .ok_or(ErrorCode::MathUnderflow)?;

    let index_bytes = pool_index.to_le_bytes();
    let pool_seeds = &[POOL_SEED, index_bytes.as_ref(), &[pool_bump]];
    let pool_signer = &[&pool_seeds[..]];

    anchor_spl::token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            anchor_spl::token::Transfer {
                from: ctx.accounts.stake_vault.to_account_info(),
                to: ctx.accounts.user_stake_account.to_account_info(),
                authority: ctx.accounts.pool.to_account_info(),
            },
            pool_signer,
        ),
        payout,
    )?;

    if fee > 0 {
        anchor_spl::token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                anchor_spl::token::Transfer {
                    from: ctx.accounts.stake_vault.to_account_info(),
                    to: ctx.accounts.fee_collector.to_account_info(),
                    authority: ctx.accounts.pool.to_account_info(),
                },
                pool_signer,
            ),
            fee,
        )?;
    }

    emit!(EmergencyWithdrawn {
        user: owner_key,
        pool: pool_key,
        amount,
        fee,
        reward_forfeited: forfeited,
        slot: clock.slot,
    });

    Ok(())
}
