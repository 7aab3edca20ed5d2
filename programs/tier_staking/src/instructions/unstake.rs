//! Unstake instruction handler.
//!
//! Returns the principal of a matured stake and settles its residual reward.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::accounting;
use crate::constants::*;
use crate::error::StakingError;
use crate::events::Unstaked;
use crate::state::{StakingInfo, UserStakeInfo};
use crate::vault;

/// Accounts required for unstaking.
#[derive(Accounts)]
pub struct Unstake<'info> {
    /// The stake owner.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The staking registry; token authority of both vaults.
    #[account(
        mut,
        seeds = [STAKING_INFO_SEED],
        bump = staking_info.bump,
        has_one = staking_vault @ StakingError::InvalidTokenConfiguration,
        has_one = reward_vault @ StakingError::InvalidTokenConfiguration
    )]
    pub staking_info: Account<'info, StakingInfo>,

    /// User's stake record.
    /// CHECK: Address pinned by seeds; contents loaded through `UserStakeInfo::load`
    #[account(
        mut,
        seeds = [USER_STAKE_INFO_SEED, user.key().as_ref()],
        bump
    )]
    pub user_stake_info: UncheckedAccount<'info>,

    /// User's token account receiving the principal.
    #[account(
        mut,
        constraint = user_staking_token_account.mint == staking_info.staking_token_mint @ StakingError::InvalidTokenConfiguration,
        constraint = user_staking_token_account.owner == user.key() @ StakingError::Unauthorized
    )]
    pub user_staking_token_account: Account<'info, TokenAccount>,

    /// User's token account receiving the residual reward.
    #[account(
        mut,
        constraint = user_reward_token_account.mint == staking_info.reward_token_mint @ StakingError::InvalidTokenConfiguration,
        constraint = user_reward_token_account.owner == user.key() @ StakingError::Unauthorized
    )]
    pub user_reward_token_account: Account<'info, TokenAccount>,

    /// Registry's staking vault.
    #[account(mut)]
    pub staking_vault: Account<'info, TokenAccount>,

    /// Registry's reward vault.
    #[account(mut)]
    pub reward_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Unstake a matured position.
///
/// Hard lock: there is no early-exit path. The record stays allocated but
/// cleared, so a repeated call fails with `NotStaked`.
pub fn handler(ctx: Context<Unstake>) -> Result<()> {
    let clock = Clock::get()?;
    let user = ctx.accounts.user.key();
    let record_account = ctx.accounts.user_stake_info.to_account_info();
    let mut record = UserStakeInfo::load(&record_account)?;

    let release = accounting::close_stake(
        &mut ctx.accounts.staking_info,
        &mut record,
        &user,
        clock.unix_timestamp,
    )?;
    record.store(&record_account)?;

    let bump = ctx.accounts.staking_info.bump;
    vault::transfer_out(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.staking_vault.to_account_info(),
        ctx.accounts.user_staking_token_account.to_account_info(),
        ctx.accounts.staking_info.to_account_info(),
        bump,
        release.principal,
    )?;
    vault::transfer_out(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.reward_vault.to_account_info(),
        ctx.accounts.user_reward_token_account.to_account_info(),
        ctx.accounts.staking_info.to_account_info(),
        bump,
        release.reward,
    )?;

    msg!("Unstaked {} tokens", release.principal);
    msg!("Residual reward paid: {}", release.reward);
    msg!("Total staked in pool: {}", ctx.accounts.staking_info.total_staked);

    emit!(Unstaked {
        owner: user,
        principal: release.principal,
        reward: release.reward,
        unstaked_at: clock.unix_timestamp,
    });

    Ok(())
}
