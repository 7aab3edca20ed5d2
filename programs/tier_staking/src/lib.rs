//! # Tier Staking Program
//!
//! Time-locked staking with four duration tiers. Users lock a staking token
//! and earn a separate reward token at a tier multiplier; rewards are paid
//! from a pool funded by the registry authority.
//!
//! Default tiers:
//!
//! - **30 days**: 4% of principal over the lock
//! - **90 days**: 12%
//! - **180 days**: 24%
//! - **360 days**: 48%
//!
//! ## Features
//! - Linear accrual that stops at lock maturity
//! - Claim rewards without unstaking
//! - Hard lock: unstaking before maturity is rejected
//! - One live stake per user
//! - Authority-gated reward pool deposits and withdrawals
//! - Checked math throughout; floor rounding on rewards

use anchor_lang::prelude::*;

declare_id!("HJsEfnpgjEhEPa3SYcg6pchqhh2pFGSi331hTyqs5iis");

pub mod accounting;
pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod reward;
pub mod state;
pub mod vault;

#[cfg(test)]
mod test_utils;

use constants::TIER_COUNT;
use instructions::*;

#[program]
pub mod tier_staking {
    use super::*;

    /// Creates the staking registry and both vaults.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for initialization
    /// * `tier_durations` - Lock length per tier in seconds
    /// * `tier_multipliers` - Reward multiplier per tier (percent of principal)
    ///
    /// # Errors
    /// Returns an error if:
    /// - The registry already exists
    /// - Either tier array is not positive and strictly increasing, or exceeds its bound
    /// - A vault does not match its mint or registry authority
    pub fn initialize(
        ctx: Context<Initialize>,
        tier_durations: [u64; TIER_COUNT],
        tier_multipliers: [u64; TIER_COUNT],
    ) -> Result<()> {
        instructions::initialize::handler(ctx, tier_durations, tier_multipliers)
    }

    /// Funds the reward pool.
    ///
    /// # Errors
    /// Returns an error if the caller is not the authority, the amount is
    /// zero or overflows the pool, or the sender balance is insufficient.
    pub fn deposit_reward_token(ctx: Context<DepositRewardToken>, amount: u64) -> Result<()> {
        instructions::deposit_reward_token::handler(ctx, amount)
    }

    /// Withdraws from the reward pool.
    ///
    /// # Errors
    /// Returns an error if the caller is not the authority or the amount
    /// exceeds the tracked pool balance.
    pub fn withdraw_reward_token(ctx: Context<WithdrawRewardToken>, amount: u64) -> Result<()> {
        instructions::withdraw_reward_token::handler(ctx, amount)
    }

    /// Locks staking tokens in the given tier.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for staking
    /// * `amount` - Amount of staking tokens to lock
    /// * `tier_index` - Tier index (0..=3)
    ///
    /// # Errors
    /// Returns an error if:
    /// - The user already has a live stake
    /// - Invalid tier specified
    /// - Amount is zero
    /// - Insufficient balance
    /// - The full-lock reward does not fit in a `u64`
    pub fn stake(ctx: Context<Stake>, amount: u64, tier_index: u8) -> Result<()> {
        instructions::stake::handler(ctx, amount, tier_index)
    }

    /// Returns the principal of a matured stake and pays any residual reward.
    ///
    /// # Errors
    /// Returns an error if:
    /// - No live stake exists
    /// - The lock has not matured
    /// - The pool cannot cover the residual reward
    pub fn unstake(ctx: Context<Unstake>) -> Result<()> {
        instructions::unstake::handler(ctx)
    }

    /// Claims rewards accrued since the last settlement.
    ///
    /// # Errors
    /// Returns an error if:
    /// - No live stake exists
    /// - Nothing has accrued
    /// - The pool cannot cover the reward
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::handler(ctx)
    }

    /// Transfers registry authority to a new address.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the current authority
    /// - New authority is the default pubkey
    pub fn transfer_authority(ctx: Context<AdminControl>, new_authority: Pubkey) -> Result<()> {
        instructions::admin::transfer_authority_handler(ctx, new_authority)
    }
}
