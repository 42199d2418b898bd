use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::Harvested;
use crate::math::accrual::{checkpoint, pending_reward, settle_pool};
use crate::state::{Farm, Pool, Position};

#[derive(Accounts)]
pub struct Harvest<'info> {
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
        constraint = reward_treasury.key() == farm.reward_treasury @ ErrorCode::InvalidParameter,
    )]
    pub reward_treasury: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = user_reward_account.owner == owner.key() @ ErrorCode::Unauthorized,
        constraint = user_reward_account.mint == farm.reward_mint @ ErrorCode::InvalidParameter,
    )]
    pub user_reward_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Harvest>) -> Result<()> {
    let clock = Clock::get()?;
    let pool_key = ctx.accounts.pool.key();
    let owner_key = ctx.accounts.owner.key();
    let farm_bump = ctx.accounts.farm.bump;

    let farm = &ctx.accounts.farm;
    let pool = &mut ctx.accounts.pool;
    settle_pool(farm, pool, clock.slot)?;

    let position = &mut ctx.accounts.position;
    let pending = pending_reward(pool, position)?;

    checkpoint(pool, position)?;
    position.total_claimed = position
        .total_claimed
        .checked_add(pending)
        .ok_or(ErrorCode::MathOverflow)?;

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

    emit!(Harvested {
        user: owner_key,
        pool: pool_key,
        reward_paid: pending,
        slot: clock.slot,
    });

    Ok(())
}
