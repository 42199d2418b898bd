use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    // General (6000-6009)
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Math underflow")]
    MathUnderflow,
    #[msg("Division by zero")]
    DivisionByZero,
    #[msg("Invalid amount: must be greater than zero")]
    InvalidAmount,
    #[msg("Unauthorized: signer is not the admin")]
    Unauthorized,
    #[msg("Invalid parameter")]
    InvalidParameter,
    #[msg("Accounting invariant violated")]
    AccountingInvariantViolated,

    // Emission schedule (6010-6019)
    #[msg("Slot range is inverted")]
    InvalidSlotRange,
    #[msg("Emission schedule parameters are inconsistent")]
    InvalidSchedule,

    // Pool (6020-6029)
    #[msg("Pool is not active")]
    PoolInactive,
    #[msg("Pool does not belong to this farm")]
    PoolFarmMismatch,
    #[msg("Deposit fee exceeds 100%")]
    DepositFeeTooHigh,
    #[msg("Fee exceeds maximum allowed")]
    FeeExceedsMaximum,

    // Position (6030-6039)
    #[msg("Insufficient staked balance")]
    InsufficientStake,
    #[msg("Withdrawal cooldown has not elapsed")]
    WithdrawalTooSoon,
    #[msg("Position has nothing staked")]
    NothingStaked,

    // Facilities (6040-6049)
    #[msg("Facility is disabled")]
    FacilityDisabled,
    #[msg("Insufficient treasury liquidity")]
    InsufficientLiquidity,
    #[msg("Flash loan is not repaid within the transaction")]
    LoanNotRepaid,

    // Oracle (6050-6059)
    #[msg("Oracle price is stale")]
    OraclePriceStale,
    #[msg("Oracle price is invalid or negative")]
    OraclePriceInvalid,
    #[msg("Oracle confidence interval too wide")]
    OracleConfidenceTooWide,
    #[msg("Oracle account mismatch")]
    OracleAccountMismatch,

    // Liquidation (6060-6069)
    #[msg("Position is not liquidatable")]
    NotLiquidatable,
}
