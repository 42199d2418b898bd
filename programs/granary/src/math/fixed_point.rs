use anchor_lang::prelude::*;
use crate::constants::{ACC_PRECISION, BPS_DENOMINATOR};
use crate::error::ErrorCode;

/// Scale a staked amount by an accumulator value: (amount * acc) / ACC_PRECISION
pub fn acc_mul(amount: u64, acc_per_share: u128) -> Result<u128> {
    (amount as u128)
        .checked_mul(acc_per_share)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(ACC_PRECISION)
        .ok_or(ErrorCode::DivisionByZero.into())
}

/// Convert an emitted reward into an accumulator delta: (reward * ACC_PRECISION) / supply
pub fn acc_div(reward: u128, supply: u64) -> Result<u128> {
    if supply == 0 {
        return Err(ErrorCode::DivisionByZero.into());
    }
    reward
        .checked_mul(ACC_PRECISION)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(supply as u128)
        .ok_or(ErrorCode::DivisionByZero.into())
}

/// Multiply a value by basis points: (value * bps) / 10_000
pub fn bps_mul(value: u64, bps: u16) -> Result<u64> {
    (value as u128)
        .checked_mul(bps as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(BPS_DENOMINATOR as u128)
        .ok_or(ErrorCode::DivisionByZero)?
        .try_into()
        .map_err(|_| ErrorCode::MathOverflow.into())
}

/// Narrow a u128 reward figure back to token units
pub fn to_token_amount(value: u128) -> Result<u64> {
    u64::try_from(value).map_err(|_| ErrorCode::MathOverflow.into())
}
