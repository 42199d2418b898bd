use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::FlashConfigUpdated;
use crate::state::Farm;

#[derive(Accounts)]
pub struct SetFlashConfig<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [FARM_SEED],
        bump = farm.bump,
        constraint = farm.admin == admin.key() @ ErrorCode::Unauthorized,
    )]
    pub farm: Account<'info, Farm>,
}

pub fn handler(ctx: Context<SetFlashConfig>, enabled: bool, fee_bps: u16) -> Result<()> {
    require!(fee_bps <= MAX_FLASH_FEE_BPS, ErrorCode::FeeExceedsMaximum);

    let farm = &mut ctx.accounts.farm;
    farm.flash_enabled = enabled;
    farm.flash_fee_bps = fee_bps;

    let clock = Clock::get()?;
    emit!(FlashConfigUpdated {
        enabled,
        fee_bps,
        slot: clock.slot,
    });

    Ok(())
}
