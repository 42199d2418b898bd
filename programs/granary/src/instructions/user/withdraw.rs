use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::Withdrawn;
use crate::math::accrual::{checkpoint, pending_reward, settle_pool};
use crate::state::{Farm, Pool, Position};

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [FARM_SEED],
        bump = farm.bump,
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
        constraint = reward_treasury.key() == farm.reward_treasury @ ErrorCode::InvalidParameter,
    )]
    pub reward_treasury: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = user_stake_account.owner == owner.key() @ ErrorCode::Unauthorized,
        constraint = user_stake_account.mint == pool.stake_mint @ ErrorCode::InvalidParameter,
    )]
    pub user_stake_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = user_reward_account.owner == owner.key() @ ErrorCode::Unauthorized,
        constraint = user_reward_account.mint == farm.reward_mint @ ErrorCode::InvalidParameter,
    )]
    pub user_reward_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);
    require!(
        ctx.accounts.position.amount >= amount,
        ErrorCode::InsufficientStake
    );

    let clock = Clock::get()?;

    // Unstake frequency is limited against the slot counter, never wall clock
    let cooldown = ctx.accounts.farm.withdraw_cooldown_slots;
    if cooldown > 0 {
        require!(
            clock.slot >= ctx.accounts.position.last_stake_slot.saturating_add(cooldown),
            ErrorCode::WithdrawalTooSoon
        );
    }

    let pool_key = ctx.accounts.pool.key();
    let owner_key = ctx.accounts.owner.key();
    let farm_bump = ctx.accounts.farm.bump;
    let pool_index = ctx.accounts.pool.index;
    let pool_bump = ctx.accounts.pool.bump;

    let farm = &ctx.accounts.farm;
    let pool = &mut ctx.accounts.pool;
    settle_pool(farm, pool, clock.slot)?;

    let position = &mut ctx.accounts.position;
    let pending = pending_reward(pool, position)?;

    // Ledger writes complete before any transfer
    position.amount = position
        .amount
        .checked_sub(amount)
        .ok_or(ErrorCode::MathUnderflow)?;
    checkpoint(pool, position)?;
    position.last_stake_slot = clock.slot;
    position.total_claimed = position
        .total_claimed
        .checked_add(pending)
        .ok_or(ErrorCode::MathOverflow)?;
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
        amount,
    )?;

    // Pay the full pending entitlement or abort; no partial payment
    if pending > 0 {
        let farm_seeds = &[FARM_SEED, &[farm_bump]];
        let farm_signer = &[&farm_seeds[..]];
        anchor_spl::token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                anchor_spl::token::Transfer {
                    from: ctx.accounts.reward_treasury.to_account_info(),
                    to: ctx.accounts.user_reward_account.to_account_info(),
                    authority: ctx.accounts.farm.to_account_info(),
                },
                farm_signer,
            ),
            pending,
        )?;
    }

    emit!(Withdrawn {
        user: owner_key,
        pool: pool_key,
        amount,
        reward_paid: pending,
        slot: clock.slot,
    });

    Ok(())
}
