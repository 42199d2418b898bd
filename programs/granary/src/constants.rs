use anchor_lang::prelude::*;

// PDA Seeds
#[constant]
pub const FARM_SEED: &[u8] = b"farm";
#[constant]
pub const POOL_SEED: &[u8] = b"pool";
#[constant]
pub const POSITION_SEED: &[u8] = b"position";
#[constant]
pub const FLASH_RECEIPT_SEED: &[u8] = b"flash_receipt";
#[constant]
pub const AUTHORIZED_CALLER_SEED: &[u8] = b"authorized_caller";

// Accumulator precision (1e12) for reward-per-share fixed-point math
pub const ACC_PRECISION: u128 = 1_000_000_000_000;

// Price precision (1e6) matching USDC decimals
pub const PRICE_PRECISION: u64 = 1_000_000;

// Basis points denominator
pub const BPS_DENOMINATOR: u64 = 10_000;

// Fee limits (in basis points)
pub const MAX_DEPOSIT_FEE_BPS: u16 = 10_000; // fee may consume the whole deposit, never more
pub const MAX_FLASH_FEE_BPS: u16 = 1_000; // 10%
pub const MAX_EMERGENCY_FEE_BPS: u16 = 1_000; // 10%
pub const MAX_LIQUIDATION_FEE_BPS: u16 = 1_000; // 10%

// Default flash loan fee: 9 basis points = 0.09% (Aave-equivalent)
pub const DEFAULT_FLASH_FEE_BPS: u16 = 9;

// Emission schedule limits
pub const MAX_BONUS_MULTIPLIER: u64 = 100;

// Oracle
pub const MAX_ORACLE_STALENESS: u64 = 60; // 60 seconds
pub const MAX_ORACLE_CONF_BPS: u64 = 200; // reject feeds with confidence wider than 2% of price
