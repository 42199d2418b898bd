use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::FarmPolicyUpdated;
use crate::state::Farm;

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct SetFarmPolicyParams {
    pub withdraw_cooldown_slots: u64,
    pub emergency_enabled: bool,
    pub emergency_fee_bps: u16,
    pub min_position_value: u64,
    pub liquidation_fee_bps: u16,
}

#[derive(Accounts)]
pub struct SetFarmPolicy<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [FARM_SEED],
        bump = farm.bump,
        constraint = farm.admin == admin.key() @ ErrorCode::Unauthorized,
    )]
    pub farm: Account<'info, Farm>,
}

pub fn handler(ctx: Context<SetFarmPolicy>, params: SetFarmPolicyParams) -> Result<()> {
    require!(
        params.emergency_fee_bps <= MAX_EMERGENCY_FEE_BPS,
        ErrorCode::FeeExceedsMaximum
    );
    require!(
        params.liquidation_fee_bps <= MAX_LIQUIDATION_FEE_BPS,
        ErrorCode::FeeExceedsMaximum
    );

    let farm = &mut ctx.accounts.farm;
    farm.withdraw_cooldown_slots = params.withdraw_cooldown_slots;
    farm.emergency_enabled = params.emergency_enabled;
    farm.emergency_fee_bps = params.emergency_fee_bps;
    farm.min_position_value = params.min_position_value;
    farm.liquidation_fee_bps = params.liquidation_fee_bps;

    let clock = Clock::get()?;
    emit!(FarmPolicyUpdated {
        withdraw_cooldown_slots: params.withdraw_cooldown_slots,
        emergency_enabled: params.emergency_enabled,
        emergency_fee_bps: params.emergency_fee_bps,
        min_position_value: params.min_position_value,
        liquidation_fee_bps: params.liquidation_fee_bps,
        slot: clock.slot,
    });

    Ok(())
}
