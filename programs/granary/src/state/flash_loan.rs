use anchor_lang::prelude::*;

/// Ephemeral loan ticket. Created by `flash_borrow`, closed by `flash_repay`
/// within the same transaction; its existence blocks a nested borrow by the
/// same borrower.
#[account]
pub struct FlashLoanReceipt {
    /// The farm whose treasury is being borrowed from
    pub farm: Pubkey,
    /// The borrower
    pub borrower: Pubkey,
    /// Amount borrowed
    pub amount: u64,
    /// Fee owed
    pub fee: u64,
    /// Treasury balance recorded before the outbound transfer
    pub treasury_balance_before: u64,
    /// PDA bump
    pub bump: u8,
}

impl FlashLoanReceipt {
    pub const LEN: usize = 8  // discriminator
        + 32   // farm
        + 32   // borrower
        + 8    // amount
        + 8    // fee
        + 8    // treasury_balance_before
        + 1;   // bump
}
