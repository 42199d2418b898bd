use anchor_lang::prelude::*;
use crate::constants::{BPS_DENOMINATOR, MAX_ORACLE_CONF_BPS, MAX_ORACLE_STALENESS};
use crate::error::ErrorCode;

/// Parsed price from oracle feed
pub struct OraclePrice {
    pub price: u64, // in PRICE_PRECISION (1e6)
    pub confidence: u64,
    pub timestamp: i64,
}

/// Parse a Pyth price feed from an AccountInfo. The feed is untrusted input:
/// a non-positive price, a stale publish time, or a confidence interval wider
/// than MAX_ORACLE_CONF_BPS of the price all reject the read.
///
/// Pyth PriceUpdateV2 layout after discriminator(8) + write_authority(32) +
/// verification_level(1):
///   feed_id: [u8; 32] at offset 41
///   price: i64 at offset 73
///   conf: u64 at offset 81
///   exponent: i32 at offset 89
///   publish_time: i64 at offset 93
pub fn get_price(oracle_account: &AccountInfo, clock: &Clock) -> Result<OraclePrice> {
    let data = oracle_account.try_borrow_data()?;

    require!(data.len() >= 112, ErrorCode::OraclePriceInvalid);

    let price_raw = i64::from_le_bytes(
        data[73..81].try_into().map_err(|_| ErrorCode::OraclePriceInvalid)?
    );
    let conf_raw = u64::from_le_bytes(
        data[81..89].try_into().map_err(|_| ErrorCode::OraclePriceInvalid)?
    );
    let exponent = i32::from_le_bytes(
        data[89..93].try_into().map_err(|_| ErrorCode::OraclePriceInvalid)?
    );
    let publish_time = i64::from_le_bytes(
        data[93..101].try_into().map_err(|_| ErrorCode::OraclePriceInvalid)?
    );

    require!(price_raw > 0, ErrorCode::OraclePriceInvalid);

    let age = clock
        .unix_timestamp
        .checked_sub(publish_time)
        .ok_or(ErrorCode::MathOverflow)?;
    require!(age <= MAX_ORACLE_STALENESS as i64, ErrorCode::OraclePriceStale);

    let price = normalize_price(price_raw as u64, exponent)?;
    let confidence = normalize_price(conf_raw, exponent)?;

    check_confidence(price, confidence)?;

    Ok(OraclePrice {
        price,
        confidence,
        timestamp: publish_time,
    })
}

/// Reject a feed whose confidence interval is wider than
/// MAX_ORACLE_CONF_BPS of the price.
pub fn check_confidence(price: u64, confidence: u64) -> Result<()> {
    require!(price > 0, ErrorCode::OraclePriceInvalid);
    let conf_bps = (confidence as u128)
        .checked_mul(BPS_DENOMINATOR as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(price as u128)
        .ok_or(ErrorCode::DivisionByZero)?;
    require!(
        conf_bps <= MAX_ORACLE_CONF_BPS as u128,
        ErrorCode::OracleConfidenceTooWide
    );
    Ok(())
}

/// Normalize a Pyth price with exponent to PRICE_PRECISION (1e6)
pub fn normalize_price(raw_price: u64, exponent: i32) -> Result<u64> {
    // Pyth exponent is typically negative (e.g., -8); target is 6 decimals
    let target_exp: i32 = 6;
    let shift = target_exp + exponent;

    if shift >= 0 {
        raw_price
            .checked_mul(10u64.pow(shift as u32))
            .ok_or(ErrorCode::MathOverflow.into())
    } else {
        let divisor = 10u64.pow((-shift) as u32);
        Ok(raw_price / divisor)
    }
}
