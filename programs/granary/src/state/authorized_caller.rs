use anchor_lang::prelude::*;

/// Allow-list entry for keeper operations. One PDA per principal, created
/// and closed by the admin.
#[account]
pub struct AuthorizedCaller {
    pub farm: Pubkey,
    pub principal: Pubkey,
    pub bump: u8,
}

impl AuthorizedCaller {
    pub const LEN: usize = 8  // discriminator
        + 32  // farm
        + 32  // principal
        + 1;  // bump
}
