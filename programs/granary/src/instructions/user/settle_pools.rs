use anchor_lang::prelude::*;
use anchor_lang::AccountsExit;
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::PoolSettled;
use crate::math::accrual;
use crate::state::{Farm, Pool};

#[derive(Accounts)]
pub struct SettlePools<'info> {
    #[account(
        seeds = [FARM_SEED],
        bump = farm.bump,
    )]
    pub farm: Account<'info, Farm>,
}

/// Caller-paid batch settlement over the pools passed as remaining accounts.
/// The page size is whatever fits in one transaction; there is deliberately
/// no entry point that walks every pool unconditionally.
pub fn handler<'info>(ctx: Context<'_, '_, 'info, 'info, SettlePools<'info>>) -> Result<()> {
    let clock = Clock::get()?;
    let farm = &ctx.accounts.farm;
    let farm_key = farm.key();

    for pool_info in ctx.remaining_accounts.iter() {
        require!(pool_info.is_writable, ErrorCode::InvalidParameter);

        let mut pool: Account<Pool> = Account::try_from(pool_info)?;
        require!(pool.farm == farm_key, ErrorCode::PoolFarmMismatch);

        let emitted = accrual::settle_pool(farm, &mut pool, clock.slot)?;

        emit!(PoolSettled {
            pool: pool.key(),
            reward_emitted: emitted,
            acc_reward_per_share: pool.acc_reward_per_share,
            slot: clock.slot,
        });

        pool.exit(&crate::ID)?;
    }

    Ok(())
}
