use anchor_lang::prelude::*;

use crate::constants::TIER_COUNT;
use crate::error::StakingError;
use crate::reward::{self, Tier};

/// Program-wide registry: tier table, mints, vaults and pool counters.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct StakingInfo {
    pub authority: Pubkey,
    pub staking_token_mint: Pubkey,
    pub reward_token_mint: Pubkey,
    pub staking_vault: Pubkey,
    pub reward_vault: Pubkey,

    pub tier_durations: [u64; TIER_COUNT],
    pub tier_multipliers: [u64; TIER_COUNT],

    pub total_staked: u64,
    pub reward_pool_balance: u64,
    pub total_rewards_paid: u64,
    pub staker_count: u64,

    pub is_initialized: bool,

    pub created_at: i64,
    pub last_updated: i64,

    pub bump: u8,
    pub staking_vault_bump: u8,
    pub reward_vault_bump: u8,
}

impl StakingInfo {
    pub const LEN: usize = 8
        + (32 * 5)
        + (8 * TIER_COUNT * 2)
        + (8 * 4)
        + 1
        + (8 * 2)
        + 3;

    pub fn tier(&self, index: u8) -> Result<Tier> {
        reward::tier_at(&self.tier_durations, &self.tier_multipliers, index)
    }

    pub fn require_authority(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(self.authority, *signer, StakingError::Unauthorized);
        Ok(())
    }
}
