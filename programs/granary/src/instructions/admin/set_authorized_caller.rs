use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::CallerAuthorized;
use crate::state::{AuthorizedCaller, Farm};

#[derive(Accounts)]
pub struct SetAuthorizedCaller<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [FARM_SEED],
        bump = farm.bump,
        constraint = farm.admin == admin.key() @ ErrorCode::Unauthorized,
    )]
    pub farm: Account<'info, Farm>,

    /// CHECK: the principal being granted keeper rights
    pub principal: UncheckedAccount<'info>,

    #[account(
        init,
        payer = admin,
        space = AuthorizedCaller::LEN,
        seeds = [AUTHORIZED_CALLER_SEED, principal.key().as_ref()],
        bump,
    )]
    pub authorized_caller: Account<'info, AuthorizedCaller>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<SetAuthorizedCaller>) -> Result<()> {
    let entry = &mut ctx.accounts.authorized_caller;
    entry.farm = ctx.accounts.farm.key();
    entry.principal = ctx.accounts.principal.key();
    entry.bump = ctx.bumps.authorized_caller;

    let clock = Clock::get()?;
    emit!(CallerAuthorized {
        principal: entry.principal,
        slot: clock.slot,
    });

    Ok(())
}
