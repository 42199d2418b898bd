use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions::{
    load_current_index_checked, load_instruction_at_checked, ID as INSTRUCTIONS_SYSVAR_ID,
};
use anchor_lang::Discriminator;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::FlashLoanTaken;
use crate::math::fixed_point::bps_mul;
use crate::state::{Farm, FlashLoanReceipt};

#[derive(Accounts)]
pub struct FlashBorrow<'info> {
    #[account(mut)]
    pub borrower: Signer<'info>,

    #[account(
        seeds = [FARM_SEED],
        bump = farm.bump,
    )]
    pub farm: Box<Account<'info, Farm>>,

    // `init` fails if a receipt already exists: a nested borrow by the same
    // borrower cannot open a second loan while one is outstanding
    #[account(
        init,
        payer = borrower,
        space = FlashLoanReceipt::LEN,
        seeds = [FLASH_RECEIPT_SEED, borrower.key().as_ref()],
        bump,
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

    /// CHECK: instructions sysvar, verified by address
    #[account(address = INSTRUCTIONS_SYSVAR_ID @ ErrorCode::InvalidParameter)]
    pub instructions_sysvar: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<FlashBorrow>, amount: u64) -> Result<()> {
    require!(ctx.accounts.farm.flash_enabled, ErrorCode::FacilityDisabled);
    require!(amount > 0, ErrorCode::InvalidAmount);

    let treasury_balance = ctx.accounts.reward_treasury.amount;
    require!(treasury_balance >= amount, ErrorCode::InsufficientLiquidity);

    let fee = bps_mul(amount, ctx.accounts.farm.flash_fee_bps)?;

    // The loan is only sound if this same transaction settles it: scan the
    // instructions that follow for a flash_repay of this program referencing
    // this receipt.
    let receipt_key = ctx.accounts.receipt.key();
    let ix_sysvar = ctx.accounts.instructions_sysvar.to_account_info();
    let current_index = load_current_index_checked(&ix_sysvar)? as usize;
    let mut repay_found = false;
    let mut index = current_index + 1;
    while let Ok(ix) = load_instruction_at_checked(index, &ix_sysvar) {
        if ix.program_id == crate::ID
            && ix.data.starts_with(crate::instruction::FlashRepay::DISCRIMINATOR)
            && ix.accounts.iter().any(|meta| meta.pubkey == receipt_key)
        {
            repay_found = true;
            break;
        }
        index += 1;
    }
    require!(repay_found, ErrorCode::LoanNotRepaid);

    let clock = Clock::get()?;
    let receipt = &mut ctx.accounts.receipt;
    receipt.farm = ctx.accounts.farm.key();
    receipt.borrower = ctx.accounts.borrower.key();
    receipt.amount = amount;
    receipt.fee = fee;
    receipt.treasury_balance_before = treasury_balance;
    receipt.bump = ctx.bumps.receipt;

    let farm_bump = ctx.accounts.farm.bump;
    let seeds = &[FARM_SEED, &[farm_bump]];
    let signer_seeds = &[&seeds[..]];
    anchor_spl::token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            anchor_spl::token::Transfer {
                from: ctx.accounts.reward_treasury.to_account_info(),
                to: ctx.accounts.borrower_token_account.to_account_info(),
                authority: ctx.accounts.farm.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(FlashLoanTaken {
        borrower: ctx.accounts.borrower.key(),
        amount,
        fee,
        slot: clock.slot,
    });

    Ok(())
}
