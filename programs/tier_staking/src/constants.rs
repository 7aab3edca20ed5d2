//! Program constants for the Tier Staking program.
//!
//! PDA seeds, tier table defaults and the reward scale used by the accrual
//! engine.

/// Seed for deriving the staking registry PDA
pub const STAKING_INFO_SEED: &[u8] = b"staking_info";

/// Seed for deriving user stake record PDAs
pub const USER_STAKE_INFO_SEED: &[u8] = b"user_stake_info";

/// Seed for deriving the staking token vault PDA
pub const STAKING_VAULT_SEED: &[u8] = b"staking_token_vaults";

/// Seed for deriving the reward token vault PDA
pub const REWARD_VAULT_SEED: &[u8] = b"reward_token_vaults";

/// Number of lock tiers configured on the registry
pub const TIER_COUNT: usize = 4;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Tier multipliers are percentages of principal paid over a full tier
pub const REWARD_SCALE: u64 = 100;

/// Longest accepted lock (100 years)
pub const MAX_TIER_DURATION: u64 = 100 * 365 * SECONDS_PER_DAY;

/// Largest accepted multiplier (100x principal over a full lock)
pub const MAX_TIER_MULTIPLIER: u64 = 100 * REWARD_SCALE;

/// Default lock lengths: 30, 90, 180 and 360 days
pub const DEFAULT_TIER_DURATIONS: [u64; TIER_COUNT] = [
    30 * SECONDS_PER_DAY,
    90 * SECONDS_PER_DAY,
    180 * SECONDS_PER_DAY,
    360 * SECONDS_PER_DAY,
];

/// Default multipliers, one per tier
pub const DEFAULT_TIER_MULTIPLIERS: [u64; TIER_COUNT] = [4, 12, 24, 48];
