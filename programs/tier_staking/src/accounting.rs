//! Registry and stake record state transitions.
//!
//! Each instruction handler runs exactly one of these transitions before it
//! touches the token program. A transition checks every precondition first
//! and only then writes to the registry or the stake record, so an `Err`
//! always leaves both untouched. Token movements are returned to the caller
//! as amounts; the handler performs the matching vault transfers.

use anchor_lang::prelude::*;

use crate::constants::TIER_COUNT;
use crate::error::StakingError;
use crate::reward::{self, Tier};
use crate::state::{StakingInfo, UserStakeInfo};

/// Addresses and tier table captured by `initialize`.
#[derive(Clone, Copy, Debug)]
pub struct RegistryConfig {
    pub authority: Pubkey,
    pub staking_token_mint: Pubkey,
    pub reward_token_mint: Pubkey,
    pub staking_vault: Pubkey,
    pub reward_vault: Pubkey,
    pub tier_durations: [u64; TIER_COUNT],
    pub tier_multipliers: [u64; TIER_COUNT],
    pub bump: u8,
    pub staking_vault_bump: u8,
    pub reward_vault_bump: u8,
}

/// Tokens owed to a participant when their stake is closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Release {
    pub principal: u64,
    pub reward: u64,
}

pub fn initialize(info: &mut StakingInfo, config: RegistryConfig, now: i64) -> Result<()> {
    require!(!info.is_initialized, StakingError::AlreadyInitialized);
    reward::validate_tiers(&config.tier_durations, &config.tier_multipliers)?;

    *info = StakingInfo {
        authority: config.authority,
        staking_token_mint: config.staking_token_mint,
        reward_token_mint: config.reward_token_mint,
        staking_vault: config.staking_vault,
        reward_vault: config.reward_vault,
        tier_durations: config.tier_durations,
        tier_multipliers: config.tier_multipliers,
        total_staked: 0,
        reward_pool_balance: 0,
        total_rewards_paid: 0,
        staker_count: 0,
        is_initialized: true,
        created_at: now,
        last_updated: now,
        bump: config.bump,
        staking_vault_bump: config.staking_vault_bump,
        reward_vault_bump: config.reward_vault_bump,
    };
    Ok(())
}

/// Credits `amount` to the reward pool. `available` is the sender's balance.
pub fn deposit_reward(
    info: &mut StakingInfo,
    signer: &Pubkey,
    amount: u64,
    available: u64,
    now: i64,
) -> Result<u64> {
    info.require_authority(signer)?;
    require!(amount > 0, StakingError::InvalidAmount);
    let pool = info
        .reward_pool_balance
        .checked_add(amount)
        .ok_or(StakingError::InvalidAmount)?;
    require!(available >= amount, StakingError::InsufficientBalance);

    info.reward_pool_balance = pool;
    info.last_updated = now;
    Ok(pool)
}

/// Debits `amount` from the reward pool for the authority.
pub fn withdraw_reward(
    info: &mut StakingInfo,
    signer: &Pubkey,
    amount: u64,
    now: i64,
) -> Result<u64> {
    info.require_authority(signer)?;
    require!(amount > 0, StakingError::InvalidAmount);
    let pool = info
        .reward_pool_balance
        .checked_sub(amount)
        .ok_or(StakingError::InsufficientPoolBalance)?;

    info.reward_pool_balance = pool;
    info.last_updated = now;
    Ok(pool)
}

pub fn transfer_authority(
    info: &mut StakingInfo,
    signer: &Pubkey,
    new_authority: Pubkey,
    now: i64,
) -> Result<Pubkey> {
    info.require_authority(signer)?;
    require!(
        new_authority != Pubkey::default(),
        StakingError::InvalidAuthority
    );

    let previous = info.authority;
    info.authority = new_authority;
    info.last_updated = now;
    Ok(previous)
}

/// Opens a live stake record for `owner`. `available` is the owner's balance.
#[allow(clippy::too_many_arguments)]
pub fn open_stake(
    info: &mut StakingInfo,
    stake: &mut UserStakeInfo,
    owner: Pubkey,
    amount: u64,
    tier_index: u8,
    available: u64,
    bump: u8,
    now: i64,
) -> Result<()> {
    require!(!stake.is_live(), StakingError::AlreadyStaked);
    let tier = info.tier(tier_index)?;
    require!(amount > 0, StakingError::InvalidAmount);
    require!(available >= amount, StakingError::InsufficientBalance);
    // Every later settlement is bounded by the full-lock reward.
    reward::reward_for(amount, &tier, tier.duration)?;

    let total_staked = info
        .total_staked
        .checked_add(amount)
        .ok_or(StakingError::MathOverflow)?;
    let staker_count = info
        .staker_count
        .checked_add(1)
        .ok_or(StakingError::MathOverflow)?;

    stake.owner = owner;
    stake.amount = amount;
    stake.tier_index = tier_index;
    stake.start_time = now;
    stake.last_claim_time = now;
    stake.bump = bump;

    info.total_staked = total_staked;
    info.staker_count = staker_count;
    info.last_updated = now;
    Ok(())
}

/// Settles the accrued reward. Fails with `NothingToClaim` when zero.
pub fn claim(
    info: &mut StakingInfo,
    stake: &mut UserStakeInfo,
    signer: &Pubkey,
    now: i64,
) -> Result<u64> {
    stake.require_live_owner(signer)?;
    let tier = info.tier(stake.tier_index)?;
    let due = reward::pending_reward(stake, &tier, now)?;
    require!(due > 0, StakingError::NothingToClaim);

    pay_reward(info, stake, due, now)?;
    Ok(due)
}

/// Closes a matured stake, settling any residual reward in the same step.
pub fn close_stake(
    info: &mut StakingInfo,
    stake: &mut UserStakeInfo,
    signer: &Pubkey,
    now: i64,
) -> Result<Release> {
    stake.require_live_owner(signer)?;
    let tier = info.tier(stake.tier_index)?;
    require_matured(stake, &tier, now)?;

    let due = reward::pending_reward(stake, &tier, now)?;
    let principal = stake.amount;
    let total_staked = info
        .total_staked
        .checked_sub(principal)
        .ok_or(StakingError::MathOverflow)?;

    pay_reward(info, stake, due, now)?;
    info.total_staked = total_staked;
    info.staker_count = info.staker_count.saturating_sub(1);
    stake.clear();

    Ok(Release {
        principal,
        reward: due,
    })
}

fn require_matured(stake: &UserStakeInfo, tier: &Tier, now: i64) -> Result<()> {
    let maturity = reward::maturity_time(stake.start_time, tier.duration)?;
    require!(now >= maturity, StakingError::LockNotMatured);
    Ok(())
}

/// Moves `due` out of the pool. Writes nothing unless every check passes.
fn pay_reward(
    info: &mut StakingInfo,
    stake: &mut UserStakeInfo,
    due: u64,
    now: i64,
) -> Result<()> {
    let pool = info
        .reward_pool_balance
        .checked_sub(due)
        .ok_or(StakingError::InsufficientRewardPool)?;
    let paid = info
        .total_rewards_paid
        .checked_add(due)
        .ok_or(StakingError::MathOverflow)?;
    let claimed = stake
        .total_claimed
        .checked_add(due)
        .ok_or(StakingError::MathOverflow)?;

    info.reward_pool_balance = pool;
    info.total_rewards_paid = paid;
    info.last_updated = now;
    stake.total_claimed = claimed;
    stake.last_claim_time = stake.last_claim_time.max(now);
    Ok(())
}
