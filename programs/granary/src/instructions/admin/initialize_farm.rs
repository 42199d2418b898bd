use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::FarmInitialized;
use crate::state::Farm;

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct InitializeFarmParams {
    pub reward_per_slot: u64,
    pub start_slot: u64,
    pub bonus_end_slot: u64,
    pub bonus_multiplier: u64,
    pub withdraw_cooldown_slots: u64,
    pub emergency_fee_bps: u16,
    pub flash_fee_bps: u16,
    pub min_position_value: u64,
    pub liquidation_fee_bps: u16,
}

#[derive(Accounts)]
pub struct InitializeFarm<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = Farm::LEN,
        seeds = [FARM_SEED],
        bump,
    )]
    pub farm: Account<'info, Farm>,

    pub reward_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = admin,
        token::mint = reward_mint,
        token::authority = farm,
    )]
    pub reward_treasury: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handler(ctx: Context<InitializeFarm>, params: InitializeFarmParams) -> Result<()> {
    require!(
        params.bonus_end_slot >= params.start_slot,
        ErrorCode::InvalidSchedule
    );
    require!(
        params.bonus_multiplier >= 1 && params.bonus_multiplier <= MAX_BONUS_MULTIPLIER,
        ErrorCode::InvalidSchedule
    );
    require!(
        params.flash_fee_bps <= MAX_FLASH_FEE_BPS,
        ErrorCode::FeeExceedsMaximum
    );
    require!(
        params.emergency_fee_bps <= MAX_EMERGENCY_FEE_BPS,
        ErrorCode::FeeExceedsMaximum
    );
    require!(
        params.liquidation_fee_bps <= MAX_LIQUIDATION_FEE_BPS,
        ErrorCode::FeeExceedsMaximum
    );

    let farm = &mut ctx.accounts.farm;
    farm.admin = ctx.accounts.admin.key();
    farm.bump = ctx.bumps.farm;
    farm.reward_mint = ctx.accounts.reward_mint.key();
    farm.reward_treasury = ctx.accounts.reward_treasury.key();
    farm.reward_per_slot = params.reward_per_slot;
    farm.start_slot = params.start_slot;
    farm.bonus_end_slot = params.bonus_end_slot;
    farm.bonus_multiplier = params.bonus_multiplier;
    farm.total_alloc_weight = 0;
    farm.total_pools = 0;
    farm.withdraw_cooldown_slots = params.withdraw_cooldown_slots;
    farm.emergency_enabled = false;
    farm.emergency_fee_bps = params.emergency_fee_bps;
    farm.flash_enabled = false;
    farm.flash_fee_bps = params.flash_fee_bps;
    farm.min_position_value = params.min_position_value;
    farm.liquidation_fee_bps = params.liquidation_fee_bps;
    farm._reserved = [0u8; 64];

    let clock = Clock::get()?;
    emit!(FarmInitialized {
        admin: farm.admin,
        reward_mint: farm.reward_mint,
        slot: clock.slot,
    });

    Ok(())
}
