use anchor_lang::prelude::*;

use crate::constants::TIER_COUNT;

//
// ──────────────────────────────────────────────────────────────────────────────
// Events: emitted for off-chain indexers to follow registry and stake changes
// ──────────────────────────────────────────────────────────────────────────────
//

/// Emitted once when the staking registry is created.
#[event]
pub struct RegistryInitialized {
    pub authority: Pubkey,
    pub staking_token_mint: Pubkey,
    pub reward_token_mint: Pubkey,
    pub staking_vault: Pubkey,
    pub reward_vault: Pubkey,
    pub tier_durations: [u64; TIER_COUNT],
    pub tier_multipliers: [u64; TIER_COUNT],
}

/// Emitted when the authority funds the reward pool.
#[event]
pub struct RewardDeposited {
    pub authority: Pubkey,
    pub amount: u64,
    /// Tracked pool after the deposit.
    pub reward_pool_balance: u64,
}

/// Emitted when the authority drains part of the reward pool.
#[event]
pub struct RewardWithdrawn {
    pub authority: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub reward_pool_balance: u64,
}

#[event]
pub struct Staked {
    pub owner: Pubkey,
    pub amount: u64,
    pub tier_index: u8,
    pub start_time: i64,
    /// Lock maturity; unstaking is rejected before this timestamp.
    pub unlock_time: i64,
}

#[event]
pub struct RewardClaimed {
    pub owner: Pubkey,
    pub amount: u64,
    pub claimed_at: i64,
    pub reward_pool_balance: u64,
}

#[event]
pub struct Unstaked {
    pub owner: Pubkey,
    pub principal: u64,
    /// Residual reward settled together with the principal.
    pub reward: u64,
    pub unstaked_at: i64,
}

#[event]
pub struct AuthorityTransferred {
    pub previous_authority: Pubkey,
    pub new_authority: Pubkey,
}
