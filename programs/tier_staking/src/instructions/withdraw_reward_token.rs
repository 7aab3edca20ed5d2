/// Withdraw reward token instruction handler.
///
/// ## Security Guarantees
/// - Only the registry authority can withdraw
/// - Withdrawals are bounded by the tracked pool, never by the raw vault
///   balance

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::accounting;
use crate::constants::*;
use crate::error::StakingError;
use crate::events::RewardWithdrawn;
use crate::state::StakingInfo;
use crate::vault;

/// Accounts required for withdrawing from the reward pool.
#[derive(Accounts)]
pub struct WithdrawRewardToken<'info> {
    /// Registry authority.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The staking registry; token authority of the reward vault.
    #[account(
        mut,
        seeds = [STAKING_INFO_SEED],
        bump = staking_info.bump,
        has_one = reward_vault @ StakingError::InvalidTokenConfiguration
    )]
    pub staking_info: Account<'info, StakingInfo>,

    /// Destination for the withdrawn rewards.
    #[account(
        mut,
        constraint = recipient_token_account.mint == staking_info.reward_token_mint @ StakingError::InvalidTokenConfiguration
    )]
    pub recipient_token_account: Account<'info, TokenAccount>,

    /// Registry's reward vault.
    #[account(mut)]
    pub reward_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Withdraw `amount` reward tokens from the pool.
///
/// # Security
/// - Accrued but unclaimed rewards are not reserved; the authority may
///   withdraw down to the tracked pool balance
pub fn handler(ctx: Context<WithdrawRewardToken>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let authority = ctx.accounts.authority.key();

    let pool = accounting::withdraw_reward(
        &mut ctx.accounts.staking_info,
        &authority,
        amount,
        clock.unix_timestamp,
    )?;

    vault::transfer_out(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.reward_vault.to_account_info(),
        ctx.accounts.recipient_token_account.to_account_info(),
        ctx.accounts.staking_info.to_account_info(),
        ctx.accounts.staking_info.bump,
        amount,
    )?;

    msg!("Withdrew {} reward tokens", amount);
    msg!("Reward pool balance: {}", pool);

    emit!(RewardWithdrawn {
        authority,
        recipient: ctx.accounts.recipient_token_account.key(),
        amount,
        reward_pool_balance: pool,
    });

    Ok(())
}
