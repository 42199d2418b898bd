use anchor_lang::prelude::*;

#[account]
pub struct Position {
    pub owner: Pubkey,
    pub pool: Pubkey,
    pub bump: u8,

    // Staked amount, net of deposit fee
    pub amount: u64,

    // Accumulator checkpoint: amount * acc_reward_per_share / ACC_PRECISION
    // at the last settlement of this position
    pub reward_debt: u128,

    // Lifetime rewards paid out
    pub total_claimed: u64,

    // Slot of the last deposit or withdraw; anchors the withdraw cooldown
    pub last_stake_slot: u64,

    // Reserved
    pub _reserved: [u8; 32],
}

impl Position {
    pub const LEN: usize = 8  // discriminator
        + 32  // owner
        + 32  // pool
        + 1   // bump
        + 8   // amount
        + 16  // reward_debt
        + 8   // total_claimed
        + 8   // last_stake_slot
        + 32; // reserved
}
