//! Stake instruction handler.
//!
//! Locks staking tokens in the vault under one tier.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::accounting;
use crate::constants::*;
use crate::error::StakingError;
use crate::events::Staked;
use crate::reward;
use crate::state::{StakingInfo, UserStakeInfo};
use crate::vault;

/// Accounts required for staking.
#[derive(Accounts)]
pub struct Stake<'info> {
    /// The user staking tokens.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The staking registry.
    #[account(
        mut,
        seeds = [STAKING_INFO_SEED],
        bump = staking_info.bump,
        has_one = staking_vault @ StakingError::InvalidTokenConfiguration
    )]
    pub staking_info: Account<'info, StakingInfo>,

    /// User's stake record (created on first stake, reused after unstake).
    #[account(
        init_if_needed,
        payer = user,
        space = UserStakeInfo::LEN,
        seeds = [USER_STAKE_INFO_SEED, user.key().as_ref()],
        bump
    )]
    pub user_stake_info: Account<'info, UserStakeInfo>,

    /// User's token account for the staking token.
    #[account(
        mut,
        constraint = user_token_account.mint == staking_info.staking_token_mint @ StakingError::InvalidTokenConfiguration,
        constraint = user_token_account.owner == user.key() @ StakingError::Unauthorized
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// Registry's staking vault.
    #[account(mut)]
    pub staking_vault: Account<'info, TokenAccount>,

    /// System program.
    pub system_program: Program<'info, System>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Stake tokens into the vault.
///
/// # Arguments
/// * `ctx` - Stake accounts context
/// * `amount` - Amount of tokens to lock
/// * `tier_index` - Index into the registry's tier table
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<Stake>, amount: u64, tier_index: u8) -> Result<()> {
    let clock = Clock::get()?;
    let user = ctx.accounts.user.key();
    let available = ctx.accounts.user_token_account.amount;
    let bump = ctx.bumps.user_stake_info;

    accounting::open_stake(
        &mut ctx.accounts.staking_info,
        &mut ctx.accounts.user_stake_info,
        user,
        amount,
        tier_index,
        available,
        bump,
        clock.unix_timestamp,
    )?;

    vault::transfer_in(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.user_token_account.to_account_info(),
        ctx.accounts.staking_vault.to_account_info(),
        ctx.accounts.user.to_account_info(),
        amount,
    )?;

    let tier = ctx.accounts.staking_info.tier(tier_index)?;
    let unlock_time = reward::maturity_time(clock.unix_timestamp, tier.duration)?;

    msg!("Staked {} tokens in tier {}", amount, tier_index);
    msg!("Unlocks at {}", unlock_time);
    msg!("Total staked in pool: {}", ctx.accounts.staking_info.total_staked);

    emit!(Staked {
        owner: user,
        amount,
        tier_index,
        start_time: clock.unix_timestamp,
        unlock_time,
    });

    Ok(())
}
