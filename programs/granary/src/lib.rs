#![allow(ambiguous_glob_reexports)]

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod math;
pub mod state;

mod tests;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod granary {
    use super::*;

    // ── Admin ───────────────────────────────────────────────

    pub fn initialize_farm(
        ctx: Context<InitializeFarm>,
        params: instructions::admin::initialize_farm::InitializeFarmParams,
    ) -> Result<()> {
        instructions::admin::initialize_farm::handler(ctx, params)
    }

    pub fn add_pool(
        ctx: Context<AddPool>,
        params: instructions::admin::add_pool::AddPoolParams,
    ) -> Result<()> {
        instructions::admin::add_pool::handler(ctx, params)
    }

    pub fn set_pool(
        ctx: Context<SetPool>,
        params: instructions::admin::set_pool::SetPoolParams,
    ) -> Result<()> {
        instructions::admin::set_pool::handler(ctx, params)
    }

    pub fn set_emission_rate(ctx: Context<SetEmissionRate>, reward_per_slot: u64) -> Result<()> {
        instructions::admin::set_emission_rate::handler(ctx, reward_per_slot)
    }

    pub fn set_flash_config(
        ctx: Context<SetFlashConfig>,
        enabled: bool,
        fee_bps: u16,
    ) -> Result<()> {
        instructions::admin::set_flash_config::handler(ctx, enabled, fee_bps)
    }

    pub fn set_farm_policy(
        ctx: Context<SetFarmPolicy>,
        params: instructions::admin::set_farm_policy::SetFarmPolicyParams,
    ) -> Result<()> {
        instructions::admin::set_farm_policy::handler(ctx, params)
    }

    pub fn set_authorized_caller(ctx: Context<SetAuthorizedCaller>) -> Result<()> {
        instructions::admin::set_authorized_caller::handler(ctx)
    }

    pub fn revoke_authorized_caller(ctx: Context<RevokeAuthorizedCaller>) -> Result<()> {
        instructions::admin::revoke_authorized_caller::handler(ctx)
    }

    // ── Staking ─────────────────────────────────────────────

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::user::deposit::handler(ctx, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::user::withdraw::handler(ctx, amount)
    }

    pub fn harvest(ctx: Context<Harvest>) -> Result<()> {
        instructions::user::harvest::handler(ctx)
    }

    pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>) -> Result<()> {
        instructions::user::emergency_withdraw::handler(ctx)
    }

    pub fn settle_pool(ctx: Context<SettlePool>) -> Result<()> {
        instructions::user::settle_pool::handler(ctx)
    }

    pub fn settle_pools<'info>(
        ctx: Context<'_, '_, 'info, 'info, SettlePools<'info>>,
    ) -> Result<()> {
        instructions::user::settle_pools::handler(ctx)
    }

    // ── Flash loans ─────────────────────────────────────────

    pub fn flash_borrow(ctx: Context<FlashBorrow>, amount: u64) -> Result<()> {
        instructions::flash::flash_borrow::handler(ctx, amount)
    }

    pub fn flash_repay(ctx: Context<FlashRepay>) -> Result<()> {
        instructions::flash::flash_repay::handler(ctx)
    }

    // ── Keeper ──────────────────────────────────────────────

    pub fn liquidate(ctx: Context<Liquidate>) -> Result<()> {
        instructions::keeper::liquidate::handler(ctx)
    }
}
