use anchor_lang::prelude::*;

#[account]
pub struct Farm {
    pub admin: Pubkey,
    pub bump: u8,

    // Reward token
    pub reward_mint: Pubkey,
    pub reward_treasury: Pubkey, // Token account funding emissions and flash loans

    // Emission schedule (immutable after init, except reward_per_slot)
    pub reward_per_slot: u64,
    pub start_slot: u64,
    pub bonus_end_slot: u64,
    pub bonus_multiplier: u64,

    // Pool registry
    pub total_alloc_weight: u64,
    pub total_pools: u16,

    // Withdraw policy
    pub withdraw_cooldown_slots: u64,

    // Emergency exit facility
    pub emergency_enabled: bool,
    pub emergency_fee_bps: u16,

    // Flash loan facility
    pub flash_enabled: bool,
    pub flash_fee_bps: u16,

    // Forced liquidation policy
    pub min_position_value: u64, // in PRICE_PRECISION units; 0 disables liquidation
    pub liquidation_fee_bps: u16,

    // Reserved for future use
    pub _reserved: [u8; 64],
}

impl Farm {
    pub const LEN: usize = 8 // discriminator
        + 32  // admin
        + 1   // bump
        + 32  // reward_mint
        + 32  // reward_treasury
        + 8 * 4 // emission schedule
        + 8   // total_alloc_weight
        + 2   // total_pools
        + 8   // withdraw_cooldown_slots
        + 1 + 2 // emergency facility
        + 1 + 2 // flash facility
        + 8 + 2 // liquidation policy
        + 64; // reserved
}
