//! Reward accrual engine.
//!
//! Pure computations shared by every instruction: tier table validation,
//! tier lookup and the linear, maturity-capped reward formula
//!
//! ```text
//! reward = floor(amount * multiplier * elapsed / (duration * REWARD_SCALE))
//! ```
//!
//! where `elapsed` only counts seconds between the last settlement and the
//! lock maturity. A matured stake stops accruing.

use anchor_lang::prelude::*;

use crate::constants::{MAX_TIER_DURATION, MAX_TIER_MULTIPLIER, REWARD_SCALE, TIER_COUNT};
use crate::error::StakingError;
use crate::state::UserStakeInfo;

/// One row of the registry's tier table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tier {
    /// Lock length in seconds.
    pub duration: u64,
    /// Percentage of principal paid over a full lock.
    pub multiplier: u64,
}

fn strictly_increasing_within(values: &[u64; TIER_COUNT], max: u64) -> bool {
    values[0] > 0
        && values[TIER_COUNT - 1] <= max
        && values.windows(2).all(|pair| pair[0] < pair[1])
}

/// Rejects tier tables where a longer lock does not pay a strictly better
/// rate, or where a row exceeds `MAX_TIER_DURATION` / `MAX_TIER_MULTIPLIER`.
pub fn validate_tiers(
    durations: &[u64; TIER_COUNT],
    multipliers: &[u64; TIER_COUNT],
) -> Result<()> {
    require!(
        strictly_increasing_within(durations, MAX_TIER_DURATION),
        StakingError::InvalidTierConfiguration
    );
    require!(
        strictly_increasing_within(multipliers, MAX_TIER_MULTIPLIER),
        StakingError::InvalidTierConfiguration
    );
    Ok(())
}

/// Looks up a tier by index.
pub fn tier_at(
    durations: &[u64; TIER_COUNT],
    multipliers: &[u64; TIER_COUNT],
    index: u8,
) -> Result<Tier> {
    let index = index as usize;
    require!(index < TIER_COUNT, StakingError::InvalidTier);
    Ok(Tier {
        duration: durations[index],
        multiplier: multipliers[index],
    })
}

/// Unix timestamp at which a lock that began at `start_time` matures.
pub fn maturity_time(start_time: i64, duration: u64) -> Result<i64> {
    let duration = i64::try_from(duration).map_err(|_| StakingError::MathOverflow)?;
    let maturity = start_time
        .checked_add(duration)
        .ok_or(StakingError::MathOverflow)?;
    Ok(maturity)
}

/// Seconds of accrual between the last settlement and `now`, capped at maturity.
///
/// Returns zero when `now` precedes the last settlement.
pub fn accrual_seconds(
    start_time: i64,
    last_claim_time: i64,
    now: i64,
    duration: u64,
) -> Result<u64> {
    let maturity = maturity_time(start_time, duration)?;
    let from = last_claim_time.max(start_time);
    let until = now.min(maturity);
    Ok(until.saturating_sub(from).max(0) as u64)
}

/// Floor-rounded reward for `amount` locked in `tier` over `elapsed` seconds.
pub fn reward_for(amount: u64, tier: &Tier, elapsed: u64) -> Result<u64> {
    if amount == 0 || elapsed == 0 {
        return Ok(0);
    }

    let numerator = (amount as u128)
        .checked_mul(tier.multiplier as u128)
        .ok_or(StakingError::MathOverflow)?
        .checked_mul(elapsed as u128)
        .ok_or(StakingError::MathOverflow)?;
    let denominator = (tier.duration as u128)
        .checked_mul(REWARD_SCALE as u128)
        .ok_or(StakingError::MathOverflow)?;
    let reward = numerator
        .checked_div(denominator)
        .ok_or(StakingError::MathOverflow)?;

    let reward = u64::try_from(reward).map_err(|_| StakingError::MathOverflow)?;
    Ok(reward)
}

/// Reward accrued on `stake` since its last settlement.
pub fn pending_reward(stake: &UserStakeInfo, tier: &Tier, now: i64) -> Result<u64> {
    if !stake.is_live() {
        return Ok(0);
    }
    let elapsed = accrual_seconds(stake.start_time, stake.last_claim_time, now, tier.duration)?;
    reward_for(stake.amount, tier, elapsed)
}
