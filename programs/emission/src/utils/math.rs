//! Exact integer helpers shared by the distribution schedule and the vault.

use anchor_lang::prelude::*;
use primitive_types::U256;

use crate::constants::PERCENTAGE_OFFSET;
use crate::error::EmissionError;

/// Schedule slot for `period`: periods past the end reuse the final entry.
pub fn schedule_index(period: u32, schedule_len: usize) -> usize {
    let tail = schedule_len.saturating_sub(1);
    (period as usize).min(tail)
}

/// Portion of `amount` a certificate keeps when revoked at `current_block`.
///
/// Two truncating divisions, in this order:
///   divisor = vesting_duration * 100 / blocks_elapsed
///   kept    = amount * 100 / divisor
/// This rounds differently from `amount * blocks_elapsed / vesting_duration`
/// and the difference is part of the protocol. Zero blocks elapsed has no
/// divisor and fails with `MathOverflow`.
pub fn vested_portion(
    amount: U256,
    maturation_block: u64,
    vesting_duration: u64,
    current_block: u64,
) -> Result<U256> {
    let vesting_start = maturation_block
        .checked_sub(vesting_duration)
        .ok_or(EmissionError::MathOverflow)?;
    let blocks_elapsed = current_block
        .checked_sub(vesting_start)
        .ok_or(EmissionError::MathOverflow)?;

    let offset = U256::from(PERCENTAGE_OFFSET);
    let divisor = U256::from(vesting_duration)
        .checked_mul(offset)
        .ok_or(EmissionError::MathOverflow)?
        .checked_div(U256::from(blocks_elapsed))
        .ok_or(EmissionError::MathOverflow)?;

    let kept = amount
        .checked_mul(offset)
        .ok_or(EmissionError::MathOverflow)?
        .checked_div(divisor)
        .ok_or(EmissionError::MathOverflow)?;

    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    use crate::constants::BLOCKS_PER_YEAR;

    #[test]
    fn schedule_index_clamps_to_tail() {
        assert_eq!(schedule_index(0, 5), 0);
        assert_eq!(schedule_index(3, 5), 3);
        assert_eq!(schedule_index(4, 5), 4);
        assert_eq!(schedule_index(5, 5), 4);
        assert_eq!(schedule_index(10, 5), 4);
        assert_eq!(schedule_index(u32::MAX, 2), 1);
    }

    #[test]
    fn vested_portion_at_elapsed_fractions() {
        let duration = BLOCKS_PER_YEAR * 4;
        let hundred = U256::from(100u64);

        // (blocks elapsed, expected kept amount out of 100)
        let cases = [
            (duration / 100, 1u64),
            (duration / 4, 25),
            (duration / 2, 50),
            (duration * 3 / 4, 75),
            (duration * 99 / 100, 99),
        ];

        for (elapsed, expected) in cases {
            let kept = vested_portion(hundred, duration, duration, elapsed).unwrap();
            assert_eq!(kept, U256::from(expected), "elapsed {}", elapsed);
        }
    }

    #[test]
    fn two_step_truncation_differs_from_single_division() {
        // 10 * 100 / 6 = 166, then 1000 * 100 / 166 = 602.
        // A single 1000 * 6 / 10 would give 600.
        let kept = vested_portion(U256::from(1000u64), 10, 10, 6).unwrap();
        assert_eq!(kept, U256::from(602u64));

        let single = U256::from(1000u64) * U256::from(6u64) / U256::from(10u64);
        assert_ne!(kept, single);

        // 1000 * 100 / 329 = 303, then 100 * 100 / 303 = 33 (single step: 32).
        let kept = vested_portion(U256::from(100u64), 1329, 1000, 658).unwrap();
        assert_eq!(kept, U256::from(33u64));
    }

    #[test]
    fn vesting_start_is_relative_to_maturation() {
        let year = BLOCKS_PER_YEAR;
        let hundred = U256::from(100u64);

        // Created at 1y, matures at 5y, revoked at 4y: 3 of 4 years elapsed.
        assert_eq!(
            vested_portion(hundred, year * 5, year * 4, year * 4).unwrap(),
            U256::from(75u64)
        );
        // Created at 3y, matures at 7y, revoked at 4y: 1 of 4 years elapsed.
        assert_eq!(
            vested_portion(hundred, year * 7, year * 4, year * 4).unwrap(),
            U256::from(25u64)
        );
    }

    #[test]
    fn revoked_in_creation_block_has_no_divisor() {
        let err = vested_portion(U256::from(500u64), 1100, 1000, 100).unwrap_err();
        assert_eq!(err, Error::from(EmissionError::MathOverflow));
    }

    #[test]
    fn amount_overflow_is_reported() {
        assert!(vested_portion(U256::MAX, 1000, 1000, 500).is_err());
    }
}
