use anchor_lang::prelude::*;

#[account]
pub struct Pool {
    pub farm: Pubkey,
    pub bump: u8,
    pub index: u16,

    // Staked token
    pub stake_mint: Pubkey,
    pub stake_vault: Pubkey,    // Token account holding stakes, authority = pool PDA
    pub fee_collector: Pubkey,  // Token account receiving deposit/emergency fees

    // Oracle
    pub oracle: Pubkey,

    // Emission share
    pub alloc_weight: u64,
    pub deposit_fee_bps: u16,

    // Accrual state
    pub last_settled_slot: u64,
    pub acc_reward_per_share: u128, // scaled by ACC_PRECISION, only increases
    pub total_staked: u64,          // tracked incrementally, never recomputed

    // Status
    pub active: bool,

    // Reserved
    pub _reserved: [u8; 64],
}

impl Pool {
    pub const LEN: usize = 8  // discriminator
        + 32  // farm
        + 1   // bump
        + 2   // index
        + 32  // stake_mint
        + 32  // stake_vault
        + 32  // fee_collector
        + 32  // oracle
        + 8   // alloc_weight
        + 2   // deposit_fee_bps
        + 8   // last_settled_slot
        + 16  // acc_reward_per_share
        + 8   // total_staked
        + 1   // active
        + 64; // reserved
}
