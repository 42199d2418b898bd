use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::EmissionRateUpdated;
use crate::state::Farm;

#[derive(Accounts)]
pub struct SetEmissionRate<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [FARM_SEED],
        bump = farm.bump,
        constraint = farm.admin == admin.key() @ ErrorCode::Unauthorized,
    )]
    pub farm: Account<'info, Farm>,
}

/// Changes the global emission rate. Pools settled after this call accrue at
/// the new rate over their whole unsettled range, so operators settle all
/// pools (via `settle_pools` pages) in the same transaction batch first.
pub fn handler(ctx: Context<SetEmissionRate>, reward_per_slot: u64) -> Result<()> {
    let farm = &mut ctx.accounts.farm;
    farm.reward_per_slot = reward_per_slot;

    let clock = Clock::get()?;
    emit!(EmissionRateUpdated {
        reward_per_slot,
        slot: clock.slot,
    });

    Ok(())
}
