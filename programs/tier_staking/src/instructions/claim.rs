//! Claim instruction handler.
//!
//! Pays out rewards accrued since the last settlement without unstaking.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::accounting;
use crate::constants::*;
use crate::error::StakingError;
use crate::events::RewardClaimed;
use crate::state::{StakingInfo, UserStakeInfo};
use crate::vault;

/// Accounts required for claiming rewards.
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The stake owner.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The staking registry; token authority of the reward vault.
    #[account(
        mut,
        seeds = [STAKING_INFO_SEED],
        bump = staking_info.bump,
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

    /// User's token account for receiving rewards.
    #[account(
        mut,
        constraint = user_reward_token_account.mint == staking_info.reward_token_mint @ StakingError::InvalidTokenConfiguration,
        constraint = user_reward_token_account.owner == user.key() @ StakingError::Unauthorized
    )]
    pub user_reward_token_account: Account<'info, TokenAccount>,

    /// Registry's reward vault.
    #[account(mut)]
    pub reward_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Claim accrued rewards.
///
/// Accrual stops at lock maturity, so a matured stake that has already
/// been settled has nothing left to claim.
pub fn handler(ctx: Context<Claim>) -> Result<()> {
    let clock = Clock::get()?;
    let user = ctx.accounts.user.key();
    let record_account = ctx.accounts.user_stake_info.to_account_info();
    let mut record = UserStakeInfo::load(&record_account)?;

    let paid = accounting::claim(
        &mut ctx.accounts.staking_info,
        &mut record,
        &user,
        clock.unix_timestamp,
    )?;
    record.store(&record_account)?;

    vault::transfer_out(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.reward_vault.to_account_info(),
        ctx.accounts.user_reward_token_account.to_account_info(),
        ctx.accounts.staking_info.to_account_info(),
        ctx.accounts.staking_info.bump,
        paid,
    )?;

    let pool = ctx.accounts.staking_info.reward_pool_balance;

    msg!("Claimed {} reward tokens", paid);
    msg!(
        "Total rewards claimed by user: {}",
        record.total_claimed
    );
    msg!("Reward pool balance: {}", pool);

    emit!(RewardClaimed {
        owner: user,
        amount: paid,
        claimed_at: clock.unix_timestamp,
        reward_pool_balance: pool,
    });

    Ok(())
}
