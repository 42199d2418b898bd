// ============================================================================
// UNIT TESTS FOR GRANARY
// ============================================================================
//
// Unit tests for the core ledger logic. Run with: cargo test --lib
//
// Test Categories:
// 1. Emission Schedule - multiplier branches, allocation-weight split
// 2. Accrual Engine - settlement, pending entitlement, checkpoints
// 3. Fees - basis-point math, deposit/flash fee bounds
// 4. Flash Loan Invariant - balance-delta arithmetic
// 5. Oracle - price normalization, confidence bounds
// 6. State - account size invariants
// ============================================================================

#[cfg(test)]
mod tests {
    use anchor_lang::prelude::*;

    use crate::constants::{ACC_PRECISION, MAX_DEPOSIT_FEE_BPS};
    use crate::error::ErrorCode;
    use crate::math::accrual::{checkpoint, pending_reward, settle_pool};
    use crate::math::fixed_point::{acc_div, acc_mul, bps_mul};
    use crate::math::oracle::{check_confidence, normalize_price};
    use crate::math::schedule::{multiplier, pool_reward};
    use crate::state::{AuthorizedCaller, Farm, FlashLoanReceipt, Pool, Position};

    fn test_farm() -> Farm {
        Farm {
            admin: Pubkey::new_unique(),
            bump: 255,
            reward_mint: Pubkey::new_unique(),
            reward_treasury: Pubkey::new_unique(),
            reward_per_slot: 100,
            start_slot: 0,
            bonus_end_slot: 100,
            bonus_multiplier: 10,
            total_alloc_weight: 1,
            total_pools: 1,
            withdraw_cooldown_slots: 0,
            emergency_enabled: true,
            emergency_fee_bps: 0,
            flash_enabled: true,
            flash_fee_bps: 9,
            min_position_value: 0,
            liquidation_fee_bps: 0,
            _reserved: [0u8; 64],
        }
    }

    fn test_pool(alloc_weight: u64, total_staked: u64, last_settled_slot: u64) -> Pool {
        Pool {
            farm: Pubkey::new_unique(),
            bump: 254,
            index: 0,
            stake_mint: Pubkey::new_unique(),
            stake_vault: Pubkey::new_unique(),
            fee_collector: Pubkey::new_unique(),
            oracle: Pubkey::new_unique(),
            alloc_weight,
            deposit_fee_bps: 0,
            last_settled_slot,
            acc_reward_per_share: 0,
            total_staked,
            active: true,
            _reserved: [0u8; 64],
        }
    }

    fn test_position(amount: u64, reward_debt: u128) -> Position {
        Position {
            owner: Pubkey::new_unique(),
            pool: Pubkey::new_unique(),
            bump: 253,
            amount,
            reward_debt,
            total_claimed: 0,
            last_stake_slot: 0,
            _reserved: [0u8; 32],
        }
    }

    // ========================================================================
    // 1. EMISSION SCHEDULE TESTS
    // ========================================================================

    mod schedule_tests {
        use super::*;

        #[test]
        fn test_multiplier_inside_bonus() {
            let farm = test_farm();
            assert_eq!(multiplier(&farm, 0, 50).unwrap(), 500);
        }

        #[test]
        fn test_multiplier_after_bonus() {
            let farm = test_farm();
            assert_eq!(multiplier(&farm, 150, 200).unwrap(), 50);
        }

        #[test]
        fn test_multiplier_straddles_boundary() {
            // (100 - 90) * 10 + (110 - 100) = 110
            let farm = test_farm();
            assert_eq!(multiplier(&farm, 90, 110).unwrap(), 110);
        }

        #[test]
        fn test_multiplier_ends_exactly_at_boundary() {
            let farm = test_farm();
            assert_eq!(multiplier(&farm, 90, 100).unwrap(), 100);
            assert_eq!(multiplier(&farm, 100, 110).unwrap(), 10);
        }

        #[test]
        fn test_multiplier_empty_range_is_zero() {
            let farm = test_farm();
            assert_eq!(multiplier(&farm, 40, 40).unwrap(), 0);
            assert_eq!(multiplier(&farm, 150, 150).unwrap(), 0);
        }

        #[test]
        fn test_multiplier_inverted_range_rejected() {
            // Never an underflow, always a contract-violation error
            let farm = test_farm();
            assert_eq!(
                multiplier(&farm, 110, 90),
                Err(ErrorCode::InvalidSlotRange.into())
            );
        }

        #[test]
        fn test_multiplier_unit_bonus_is_linear() {
            let mut farm = test_farm();
            farm.bonus_multiplier = 1;
            assert_eq!(multiplier(&farm, 90, 110).unwrap(), 20);
        }

        #[test]
        fn test_pool_reward_weight_split() {
            let mut farm = test_farm();
            farm.total_alloc_weight = 100;
            let pool = test_pool(25, 0, 0);
            // 10 slots after bonus * 100/slot * 25/100
            assert_eq!(pool_reward(&farm, &pool, 150, 160).unwrap(), 250);
        }

        #[test]
        fn test_pool_reward_truncates_toward_zero() {
            let mut farm = test_farm();
            farm.total_alloc_weight = 3;
            let pool = test_pool(1, 0, 0);
            // 1000 / 3 = 333, remainder dropped, never rounded up
            assert_eq!(pool_reward(&farm, &pool, 150, 160).unwrap(), 333);
        }

        #[test]
        fn test_pool_reward_zero_weight() {
            let mut farm = test_farm();
            farm.total_alloc_weight = 0;
            let pool = test_pool(0, 0, 0);
            assert_eq!(pool_reward(&farm, &pool, 150, 160).unwrap(), 0);
        }
    }

    // ========================================================================
    // 2. ACCRUAL ENGINE TESTS
    // ========================================================================

    mod accrual_tests {
        use super::*;

        #[test]
        fn test_settle_noop_when_not_ahead() {
            let farm = test_farm();
            let mut pool = test_pool(1, 500, 160);
            pool.acc_reward_per_share = 7 * ACC_PRECISION;

            assert_eq!(settle_pool(&farm, &mut pool, 160).unwrap(), 0);
            assert_eq!(pool.last_settled_slot, 160);
            assert_eq!(pool.acc_reward_per_share, 7 * ACC_PRECISION);

            // A stale caller slot never rolls the watermark back
            assert_eq!(settle_pool(&farm, &mut pool, 150).unwrap(), 0);
            assert_eq!(pool.last_settled_slot, 160);
        }

        #[test]
        fn test_settle_zero_supply_advances_watermark_only() {
            let farm = test_farm();
            let mut pool = test_pool(1, 0, 150);

            assert_eq!(settle_pool(&farm, &mut pool, 170).unwrap(), 0);
            assert_eq!(pool.last_settled_slot, 170);
            assert_eq!(pool.acc_reward_per_share, 0);
        }

        #[test]
        fn test_settle_accumulates() {
            let farm = test_farm();
            let mut pool = test_pool(1, 100, 150);

            // 10 slots after bonus * 100/slot = 1000 emitted over supply 100
            let emitted = settle_pool(&farm, &mut pool, 160).unwrap();
            assert_eq!(emitted, 1000);
            assert_eq!(pool.acc_reward_per_share, 10 * ACC_PRECISION);
            assert_eq!(pool.last_settled_slot, 160);
        }

        #[test]
        fn test_settle_monotonic_across_sequence() {
            let farm = test_farm();
            let mut pool = test_pool(1, 100, 0);
            let mut last_acc = 0u128;
            let mut last_slot = 0u64;

            for slot in [10u64, 10, 95, 100, 105, 200, 200, 201] {
                settle_pool(&farm, &mut pool, slot).unwrap();
                assert!(pool.acc_reward_per_share >= last_acc);
                assert!(pool.last_settled_slot >= last_slot);
                last_acc = pool.acc_reward_per_share;
                last_slot = pool.last_settled_slot;
            }
        }

        #[test]
        fn test_supply_zero_period_earns_nothing() {
            let farm = test_farm();
            let mut pool = test_pool(1, 0, 150);

            // Nobody staked between 150 and 170
            settle_pool(&farm, &mut pool, 170).unwrap();
            assert_eq!(pool.acc_reward_per_share, 0);

            // Stake arrives, the next 10 slots accrue normally
            pool.total_staked = 100;
            settle_pool(&farm, &mut pool, 180).unwrap();
            assert_eq!(pool.acc_reward_per_share, 10 * ACC_PRECISION);
        }

        #[test]
        fn test_pending_is_stable_without_state_change() {
            let farm = test_farm();
            let mut pool = test_pool(1, 100, 150);
            settle_pool(&farm, &mut pool, 160).unwrap();

            let position = test_position(100, 0);
            let first = pending_reward(&pool, &position).unwrap();
            let second = pending_reward(&pool, &position).unwrap();
            assert_eq!(first, 1000);
            assert_eq!(first, second);
        }

        #[test]
        fn test_pending_zero_after_checkpoint() {
            let farm = test_farm();
            let mut pool = test_pool(1, 100, 150);
            settle_pool(&farm, &mut pool, 160).unwrap();

            let mut position = test_position(100, 0);
            assert!(pending_reward(&pool, &position).unwrap() > 0);

            checkpoint(&pool, &mut position).unwrap();
            assert_eq!(pending_reward(&pool, &position).unwrap(), 0);
        }

        #[test]
        fn test_checkpoint_only_counts_new_accrual() {
            let farm = test_farm();
            let mut pool = test_pool(1, 100, 150);
            settle_pool(&farm, &mut pool, 160).unwrap();

            let mut position = test_position(100, 0);
            checkpoint(&pool, &mut position).unwrap();

            // Another 10 slots at the same supply
            settle_pool(&farm, &mut pool, 170).unwrap();
            assert_eq!(pending_reward(&pool, &position).unwrap(), 1000);
        }

        #[test]
        fn test_conservation_exact_split() {
            let farm = test_farm();
            let mut pool = test_pool(1, 1000, 150);
            settle_pool(&farm, &mut pool, 160).unwrap();

            let amounts = [100u64, 250, 650];
            let total: u64 = amounts
                .iter()
                .map(|&a| pending_reward(&pool, &test_position(a, 0)).unwrap())
                .sum();
            assert_eq!(total, 1000);
        }

        #[test]
        fn test_conservation_bounded_rounding() {
            let farm = test_farm();
            let mut pool = test_pool(1, 333, 150);
            let emitted = settle_pool(&farm, &mut pool, 160).unwrap();
            assert_eq!(emitted, 1000);

            let amounts = [111u64, 111, 111];
            let total: u64 = amounts
                .iter()
                .map(|&a| pending_reward(&pool, &test_position(a, 0)).unwrap())
                .sum();
            // Truncation loses at most one unit per position, never gains
            assert!(total <= emitted);
            assert!(emitted - total <= amounts.len() as u64);
        }

        #[test]
        fn test_corrupted_checkpoint_is_an_error_not_a_clamp() {
            let farm = test_farm();
            let mut pool = test_pool(1, 100, 150);
            settle_pool(&farm, &mut pool, 160).unwrap();

            // A debt above the accumulated value can only mean corrupt state
            let position = test_position(100, u128::MAX / 2);
            assert_eq!(
                pending_reward(&pool, &position),
                Err(ErrorCode::AccountingInvariantViolated.into())
            );
        }

        #[test]
        fn test_empty_position_has_no_entitlement() {
            let farm = test_farm();
            let mut pool = test_pool(1, 100, 150);
            settle_pool(&farm, &mut pool, 160).unwrap();

            let position = test_position(0, 0);
            assert_eq!(pending_reward(&pool, &position).unwrap(), 0);
        }
    }

    // ========================================================================
    // 3. FEE TESTS
    // ========================================================================

    mod fee_tests {
        use super::*;

        #[test]
        fn test_full_deposit_fee_yields_zero_net() {
            // 10000 bps is accepted and consumes the entire deposit
            let gross = 12_345u64;
            let fee = bps_mul(gross, MAX_DEPOSIT_FEE_BPS).unwrap();
            assert_eq!(fee, gross);
            assert_eq!(gross - fee, 0);
        }

        #[test]
        fn test_deposit_fee_cap_is_whole_amount() {
            assert_eq!(MAX_DEPOSIT_FEE_BPS, 10_000);
        }

        #[test]
        fn test_flash_fee_truncates() {
            // 500 * 9 / 10000 truncates to zero
            assert_eq!(bps_mul(500, 9).unwrap(), 0);
            // 100000 * 9 / 10000 = 90
            assert_eq!(bps_mul(100_000, 9).unwrap(), 90);
        }

        #[test]
        fn test_bps_zero_value() {
            assert_eq!(bps_mul(0, 10_000).unwrap(), 0);
        }

        #[test]
        fn test_bps_large_value_no_overflow() {
            assert_eq!(bps_mul(u64::MAX, 10_000).unwrap(), u64::MAX);
        }
    }

    // ========================================================================
    // 4. FLASH LOAN INVARIANT TESTS
    // ========================================================================

    mod flash_loan_tests {
        use super::*;

        #[test]
        fn test_repay_target_with_zero_fee() {
            // Liquidity 1000, loan 500 at 9 bps: fee truncates to 0, the
            // borrower owes exactly the principal
            let balance_before = 1000u64;
            let amount = 500u64;
            let fee = bps_mul(amount, 9).unwrap();
            assert_eq!(fee, 0);

            let required = balance_before + fee;
            let balance_after = balance_before - amount + amount + fee;
            assert!(balance_after >= required);
        }

        #[test]
        fn test_repay_target_with_nonzero_fee() {
            let balance_before = 1_000_000u64;
            let amount = 100_000u64;
            let fee = bps_mul(amount, 9).unwrap();
            assert_eq!(fee, 90);

            // Full repayment leaves the treasury exactly fee above start
            let balance_after = balance_before - amount + amount + fee;
            assert_eq!(balance_after, balance_before + fee);

            // Short repayment violates the postcondition
            let short_after = balance_before - amount + amount + fee - 1;
            assert!(short_after < balance_before + fee);
        }

        #[test]
        fn test_interim_drain_violates_postcondition() {
            // Even a fully repaid loan fails if the borrower drained the
            // treasury through another path in between
            let balance_before = 1_000_000u64;
            let amount = 100_000u64;
            let fee = bps_mul(amount, 9).unwrap();
            let drained = 50u64;

            let balance_after = balance_before - amount - drained + amount + fee;
            assert!(balance_after < balance_before + fee);
        }
    }

    // ========================================================================
    // 5. ORACLE TESTS
    // ========================================================================

    mod oracle_tests {
        use super::*;

        #[test]
        fn test_normalize_price_exponent_neg8() {
            // Pyth -8 exponent scaled down to 1e6 precision
            assert_eq!(normalize_price(123_456_789, -8).unwrap(), 1_234_567);
        }

        #[test]
        fn test_normalize_price_exponent_neg6() {
            assert_eq!(normalize_price(5_000_000, -6).unwrap(), 5_000_000);
        }

        #[test]
        fn test_normalize_price_positive_shift() {
            assert_eq!(normalize_price(42, -3).unwrap(), 42_000);
        }

        #[test]
        fn test_confidence_bound() {
            // 2% of price is the widest acceptable interval
            assert!(check_confidence(1_000_000, 20_000).is_ok());
            assert_eq!(
                check_confidence(1_000_000, 20_100),
                Err(ErrorCode::OracleConfidenceTooWide.into())
            );
        }

        #[test]
        fn test_confidence_rejects_zero_price() {
            assert_eq!(
                check_confidence(0, 1),
                Err(ErrorCode::OraclePriceInvalid.into())
            );
        }
    }

    // ========================================================================
    // 6. STATE SIZE TESTS
    // ========================================================================

    mod state_tests {
        use super::*;

        #[test]
        fn test_account_sizes() {
            assert_eq!(Farm::LEN, 235);
            assert_eq!(Pool::LEN, 278);
            assert_eq!(Position::LEN, 145);
            assert_eq!(FlashLoanReceipt::LEN, 97);
            assert_eq!(AuthorizedCaller::LEN, 73);
        }

        #[test]
        fn test_accumulator_headroom() {
            // A year of full-rate emission into a dust-sized pool must not
            // overflow the u128 accumulator path
            let reward: u128 = 100 * 2 * 86_400 * 365; // reward_per_slot * slots
            let acc = acc_div(reward, 1).unwrap();
            let entitlement = acc_mul(1, acc).unwrap();
            assert_eq!(entitlement, reward);
        }
    }
}
