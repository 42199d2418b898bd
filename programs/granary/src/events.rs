use anchor_lang::prelude::*;

// User events
#[event]
pub struct Deposited {
    pub user: Pubkey,
    pub pool: Pubkey,
    pub gross_amount: u64,
    pub fee: u64,
    pub reward_paid: u64,
    pub slot: u64,
}

#[event]
pub struct Withdrawn {
    pub user: Pubkey,
    pub pool: Pubkey,
    pub amount: u64,
    pub reward_paid: u64,
    pub slot: u64,
}

#[event]
pub struct Harvested {
    pub user: Pubkey,
    pub pool: Pubkey,
    pub reward_paid: u64,
    pub slot: u64,
}

#[event]
pub struct EmergencyWithdrawn {
    pub user: Pubkey,
    pub pool: Pubkey,
    pub amount: u64,
    pub fee: u64,
    pub reward_forfeited: u64,
    pub slot: u64,
}

#[event]
pub struct PoolSettled {
    pub pool: Pubkey,
    pub reward_emitted: u64,
    pub acc_reward_per_share: u128,
    pub slot: u64,
}

// Flash loan events
#[event]
pub struct FlashLoanTaken {
    pub borrower: Pubkey,
    pub amount: u64,
    pub fee: u64,
    pub slot: u64,
}

#[event]
pub struct FlashLoanRepaid {
    pub borrower: Pubkey,
    pub amount: u64,
    pub fee: u64,
    pub slot: u64,
}

// Keeper events
#[event]
pub struct PositionLiquidated {
    pub user: Pubkey,
    pub pool: Pubkey,
    pub keeper: Pubkey,
    pub stake_returned: u64,
    pub keeper_fee: u64,
    pub reward_paid: u64,
    pub slot: u64,
}

// Admin events
#[event]
pub struct FarmInitialized {
    pub admin: Pubkey,
    pub reward_mint: Pubkey,
    pub slot: u64,
}

#[event]
pub struct PoolAdded {
    pub pool: Pubkey,
    pub stake_mint: Pubkey,
    pub alloc_weight: u64,
    pub deposit_fee_bps: u16,
    pub slot: u64,
}

#[event]
pub struct PoolUpdated {
    pub pool: Pubkey,
    pub alloc_weight: u64,
    pub deposit_fee_bps: u16,
    pub active: bool,
    pub slot: u64,
}

#[event]
pub struct EmissionRateUpdated {
    pub reward_per_slot: u64,
    pub slot: u64,
}

#[event]
pub struct FlashConfigUpdated {
    pub enabled: bool,
    pub fee_bps: u16,
    pub slot: u64,
}

#[event]
pub struct FarmPolicyUpdated {
    pub withdraw_cooldown_slots: u64,
    pub emergency_enabled: bool,
    pub emergency_fee_bps: u16,
    pub min_position_value: u64,
    pub liquidation_fee_bps: u16,
    pub slot: u64,
}

#[event]
pub struct CallerAuthorized {
    pub principal: Pubkey,
    pub slot: u64,
}

#[event]
pub struct CallerRevoked {
    pub principal: Pubkey,
    pub slot: u64,
}
