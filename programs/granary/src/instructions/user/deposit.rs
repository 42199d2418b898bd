use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::Deposited;
use crate::math::accrual::{checkpoint, pending_reward, settle_pool};
use crate::math::fixed_point::bps_mul;
use crate::state::{Farm, Pool, Position};

#[derive(Accounts)]
pub struct Deposit<'info> {
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
        init_if_needed,
        payer = owner,
        space = Position::LEN,
        seeds = [POSITION_SEED, owner.key().as_ref(), pool.key().as_ref()],
        bump,
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
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);
    require!(ctx.accounts.pool.active, ErrorCode::PoolInactive);

    let clock = Clock::get()?;
    let pool_key = ctx.accounts.pool.key();
    let owner_key = ctx.accounts.owner.key();
    let farm_bump = ctx.accounts.farm.bump;

    let farm = &ctx.accounts.farm;
    let pool = &mut ctx.accounts.pool;
    settle_pool(farm, pool, clock.slot)?;

    let position = &mut ctx.accounts.position;
    let pending = if position.owner == Pubkey::default() {
        // First-time init
        position.owner = owner_key;
        position.pool = pool_key;
        position.bump = ctx.bumps.position;
        position._reserved = [0u8; 32];
        0
    } else {
        pending_reward(pool, position)?
    };

    let fee = bps_mul(amount, pool.deposit_fee_bps)?;
    let net = amount.checked_sub(fee).ok_or(ErrorCode::MathUnderflow)?;

    // Ledger writes complete before any transfer
    position.amount = position
        .amount
        .checked_add(net)
        .ok_or(ErrorCode::MathOverflow)?;
    checkpoint(pool, position)?;
    position.last_stake_slot = clock.slot;
    position.total_claimed = position
        .total_claimed
        .checked_add(pending)
        .ok_or(ErrorCode::MathOverflow)?;
    pool.total_staked = pool
        .total_staked
        .checked_add(net)
        .ok_or(ErrorCode::MathOverflow)?;

    // Stake in, net of fee
    anchor_spl::token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            anchor_spl::token::Transfer {
                from: ctx.accounts.user_stake_account.to_account_info(),
                to: ctx.accounts.stake_vault.to_account_info(),
                authority: ctx.accounts.owner.to_account_info(),
            },
        ),
        net,
    )?;

    if fee > 0 {
        anchor_spl::token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                anchor_spl::token::Transfer {
                    from: ctx.accounts.user_stake_account.to_account_info(),
                    to: ctx.accounts.fee_collector.to_account_info(),
                    authority: ctx.accounts.owner.to_account_info(),
                },
            ),
            fee,
        )?;
    }

    // Pay the full pending entitlement or abort; no partial payment
    if pending > 0 {
        let seeds = &[FARM_SEED, &[farm_bump]];
        let signer_seeds = &[&seeds[..]];
        anchor_spl::token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                anchor_spl::token::Transfer {
                    from: ctx.accounts.reward_treasury.to_account_info(),
                    to: ctx.accounts.user_reward_account.to_account_info(),
                    authority: ctx.accounts.farm.to_account_info(),
                },
                signer_seeds,
            ),
            pending,
        )?;
    }

    emit!(Deposited {
        user: owner_key,
        pool: pool_key,
        gross_amount: amount,
        fee,
        reward_paid: pending,
        slot: clock.slot,
    });

    Ok(())
}
