use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::CallerRevoked;
use crate::state::{AuthorizedCaller, Farm};

#[derive(Accounts)]
pub struct RevokeAuthorizedCaller<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [FARM_SEED],
        bump = farm.bump,
        constraint = farm.admin == admin.key() @ ErrorCode::Unauthorized,
    )]
    pub farm: Account<'info, Farm>,

    /// CHECK: the principal losing keeper rights
    pub principal: UncheckedAccount<'info>,

    #[account(
        mut,
        close = admin,
        seeds = [AUTHORIZED_CALLER_SEED, principal.key().as_ref()],
        bump = authorized_caller.bump,
        constraint = authorized_caller.farm == farm.key() @ ErrorCode::InvalidParameter,
    )]
    pub authorized_caller: Account<'info, AuthorizedCaller>,
}

pub fn handler(ctx: Context<RevokeAuthorizedCaller>) -> Result<()> {
    let clock = Clock::get()?;
    emit!(CallerRevoked {
        principal: ctx.accounts.principal.key(),
        slot: clock.slot,
    });

    Ok(())
}
