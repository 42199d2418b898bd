use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::FlashLoanRepaid;
use crate::state::{Farm, FlashLoanReceipt};

#[derive(Accounts)]
pub struct FlashRepay<'info> {
    #[account(mut)]
    pub borrower: Signer<'info>,

    #[account(
        seeds = [FARM_SEED],
        bump = farm.bump,
    )]
    pub farm: Box<Account<'info, Farm>>,

    #[account(
        mut,
        close = borrower,
        seeds = [FLASH_RECEIPT_SEED, borrower.key().as_ref()],
        bump = receipt.bump,
        constraint = receipt.borrower == borrower.key() @ ErrorCode::Unauthorized,
        constraint = receipt.farm == farm.key() @ ErrorCode::InvalidParameter,
    )]
    pub receipt: Account<'info, FlashLoanReceipt>,

    #[account(
        mut,
        constraint = reward_treasury.key() == farm.reward_treasury @ ErrorCode::InvalidParameter,
    )]
    pub reward_treasury: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = borrower_token_account.mint == farm.reward_mint @ ErrorCode::InvalidParameter,
    )]
    pub borrower_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<FlashRepay>) -> Result<()> {
    let amount = ctx.accounts.receipt.amount;
    let fee = ctx.accounts.receipt.fee;
    let owed = amount.checked_add(fee).ok_or(ErrorCode::MathOverflow)?;

    anchor_spl::token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            anchor_spl::token::Transfer {
                from: ctx.accounts.borrower_token_account.to_account_info(),
                to: ctx.accounts.reward_treasury.to_account_info(),
                authority: ctx.accounts.borrower.to_account_info(),
            },
        ),
        owed,
    )?;

    // The load-bearing postcondition: whatever the borrower did in between,
    // the treasury must end at least fee above where it started. Failing
    // here aborts the whole transaction, undoing the outbound transfer.
    ctx.accounts.reward_treasury.reload()?;
    let required = ctx
        .accounts
        .receipt
        .treasury_balance_before
        .checked_add(fee)
        .ok_or(ErrorCode::MathOverflow)?;
    require!(
        ctx.accounts.reward_treasury.amount >= required,
        ErrorCode::LoanNotRepaid
    );

    let clock = Clock::get()?;
    emit!(FlashLoanRepaid {
        borrower: ctx.accounts.borrower.key(),
        amount,
        fee,
        slot: clock.slot,
    });

    Ok(())
}
