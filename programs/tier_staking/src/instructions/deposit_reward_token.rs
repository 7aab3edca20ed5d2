/// Deposit reward token instruction handler.
///
/// Funds the reward pool from the authority's token account.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::accounting;
use crate::constants::*;
use crate::error::StakingError;
use crate::events::RewardDeposited;
use crate::state::StakingInfo;
use crate::vault;

/// Accounts required for funding the reward pool.
#[derive(Accounts)]
pub struct DepositRewardToken<'info> {
    /// Registry authority.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The staking registry.
    #[account(
        mut,
        seeds = [STAKING_INFO_SEED],
        bump = staking_info.bump,
        has_one = reward_vault @ StakingError::InvalidTokenConfiguration
    )]
    pub staking_info: Account<'info, StakingInfo>,

    /// Authority's reward token account.
    #[account(
        mut,
        constraint = sender_token_account.mint == staking_info.reward_token_mint @ StakingError::InvalidTokenConfiguration,
        constraint = sender_token_account.owner == authority.key() @ StakingError::Unauthorized
    )]
    pub sender_token_account: Account<'info, TokenAccount>,

    /// Registry's reward vault.
    #[account(mut)]
    pub reward_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Deposit `amount` reward tokens into the pool.
pub fn handler(ctx: Context<DepositRewardToken>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let authority = ctx.accounts.authority.key();
    let available = ctx.accounts.sender_token_account.amount;

    let pool = accounting::deposit_reward(
        &mut ctx.accounts.staking_info,
        &authority,
        amount,
        available,
        clock.unix_timestamp,
    )?;

    vault::transfer_in(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.sender_token_account.to_account_info(),
        ctx.accounts.reward_vault.to_account_info(),
        ctx.accounts.authority.to_account_info(),
        amount,
    )?;

    msg!("Deposited {} reward tokens", amount);
    msg!("Reward pool balance: {}", pool);

    emit!(RewardDeposited {
        authority,
        amount,
        reward_pool_balance: pool,
    });

    Ok(())
}
