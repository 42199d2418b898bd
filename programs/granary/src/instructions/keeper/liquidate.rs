use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::PositionLiquidated;
use crate::math::accrual::{pending_reward, settle_pool};
use crate::math::fixed_point::bps_mul;
use crate::math::oracle::get_price;
use crate::state::{AuthorizedCaller, Farm, Pool, Position};

#[derive(Accounts)]
pub struct Liquidate<'info> {
    pub keeper: Signer<'info>,

    #[account(
        seeds = [AUTHORIZED_CALLER_SEED, keeper.key().as_ref()],
        bump = authorized_caller.bump,
        constraint = authorized_caller.principal == keeper.key() @ ErrorCode::Unauthorized,
        constraint = authorized_caller.farm == farm.key() @ ErrorCode::Unauthorized,
    )]
    pub authorized_caller: Account<'info, AuthorizedCaller>,

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
        constraint = pool.oracle == oracle.key() @ ErrorCode::OracleAccountMismatch,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// CHECK: the owner of the position being force-exited
    pub position_owner: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [POSITION_SEED, position_owner.key().as_ref(), pool.key().as_ref()],
        bump = position.bump,
        constraint = position.owner == position_owner.key() @ ErrorCode::Unauthorized,
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
        constraint = owner_stake_account.owner == position_owner.key() @ ErrorCode::InvalidParameter,
        constraint = owner_stake_account.mint == pool.stake_mint @ ErrorCode::InvalidParameter,
    )]
    pub owner_stake_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = owner_reward_account.owner == position_owner.key() @ ErrorCode::InvalidParameter,
        constraint = owner_reward_account.mint == farm.reward_mint @ ErrorCode::InvalidParameter,
    )]
    pub owner_reward_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = keeper_stake_account.owner == keeper.key() @ ErrorCode::InvalidParameter,
        constraint = keeper_stake_account.mint == pool.stake_mint @ ErrorCode::InvalidParameter,
    )]
    pub keeper_stake_account: Account<'info, TokenAccount>,

    /// CHECK: Pyth oracle price feed, matched against pool.oracle above
    pub oracle: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}

/// Force-exit a dust position whose stake value fell below the farm minimum.
/// The oracle is untrusted input: stale or wide-confidence feeds reject the
/// call rather than drive a liquidation.
pub fn handler(ctx: Context<Liquidate>) -> Result<()> {
    require!(ctx.accounts.farm.min_position_value > 0, ErrorCode::FacilityDisabled);
    require!(ctx.accounts.position.amount > 0, ErrorCode::NothingStaked);

    let clock = Clock::get()?;
    let pool_key = ctx.accounts.pool.key();
    let pool_index = ctx.accounts.pool.index;
    let pool_bump = ctx.accounts.pool.bump;
    let farm_bump = ctx.accounts.farm.bump;

    let farm = &ctx.accounts.farm;
    let pool = &mut ctx.accounts.pool;
    settle_pool(farm, pool, clock.slot)?;

    let oracle_price = get_price(&ctx.accounts.oracle.to_account_info(), &clock)?;

    let position = &mut ctx.accounts.position;
    let amount = position.amount;

    let stake_value = (amount as u128)
        .checked_mul(oracle_price.price as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(PRICE_PRECISION as u128)
        .ok_or(ErrorCode::DivisionByZero)?;
    require!(
        stake_value < farm.min_position_value as u128,
        ErrorCode::NotLiquidatable
    );

    // Payout figures are fixed before the position is cleared
    let pending = pending_reward(pool, position)?;
    let keeper_fee = bps_mul(amount, farm.liquidation_fee_bps)?;
    let payout = amount
        .checked_sub(keeper_fee)
        .ok_or(ErrorCode::MathUnderflow)?;

    position.amount = 0;
    position.reward_debt = 0;
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
                to: ctx.accounts.owner_stake_account.to_account_info(),
                authority: ctx.accounts.pool.to_account_info(),
            },
            pool_signer,
        ),
        payout,
    )?;

    if keeper_fee > 0 {
        anchor_spl::token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                anchor_spl::token::Transfer {
                    from: ctx.accounts.stake_vault.to_account_info(),
                    to: ctx.accounts.keeper_stake_account.to_account_info(),
                    authority: ctx.accounts.pool.to_account_info(),
                },
                pool_signer,
            ),
            keeper_fee,
        )?;
    }

    if pending > 0 {
        let farm_seeds = &[FARM_SEED, &[farm_bump]];
        let farm_signer = &[&farm_seeds[..]];
        anchor_spl::token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                anchor_spl::token::Transfer {
                    from: ctx.accounts.reward_treasury.to_account_info(),
                    to: ctx.accounts.owner_reward_account.to_account_info(),
                    authority: ctx.accounts.farm.to_account_info(),
                },
                farm_signer,
            ),
            pending,
        )?;
    }

    emit!(PositionLiquidated {
        user: ctx.accounts.position_owner.key(),
        pool: pool_key,
        keeper: ctx.accounts.keeper.key(),
        stake_returned: payout,
        keeper_fee,
        reward_paid: pending,
        slot: clock.slot,
    });

    Ok(())
}
