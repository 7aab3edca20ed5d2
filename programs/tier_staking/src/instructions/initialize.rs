/// Initialize instruction handler.
///
/// Creates the staking registry and both vaults.
///
/// ## Security Guarantees
/// - Vaults are PDAs whose token authority is the registry PDA
/// - Mints are locked to registry state permanently
/// - Tier table validated before storage; a second call fails

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::accounting::{self, RegistryConfig};
use crate::constants::*;
use crate::error::StakingError;
use crate::events::RegistryInitialized;
use crate::state::StakingInfo;

/// Accounts required for registry initialization.
///
/// ## Security Notes
/// - All three PDAs use `init_if_needed` so that a repeated call reaches the
///   handler and fails with `AlreadyInitialized` instead of a system error
/// - Vault seeds bind each vault to its mint
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Caller; becomes the registry authority.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The staking registry.
    #[account(
        init_if_needed,
        payer = authority,
        space = StakingInfo::LEN,
        seeds = [STAKING_INFO_SEED],
        bump
    )]
    pub staking_info: Account<'info, StakingInfo>,

    /// The mint users lock.
    pub staking_token_mint: Account<'info, Mint>,

    /// The mint rewards are paid in. May equal the staking mint.
    pub reward_token_mint: Account<'info, Mint>,

    /// Vault holding staked principal.
    #[account(
        init_if_needed,
        payer = authority,
        seeds = [STAKING_VAULT_SEED, staking_token_mint.key().as_ref()],
        bump,
        token::mint = staking_token_mint,
        token::authority = staking_info
    )]
    pub staking_vault: Account<'info, TokenAccount>,

    /// Vault holding the reward pool.
    #[account(
        init_if_needed,
        payer = authority,
        seeds = [REWARD_VAULT_SEED, reward_token_mint.key().as_ref()],
        bump,
        token::mint = reward_token_mint,
        token::authority = staking_info
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,

    /// Token program for vault creation.
    pub token_program: Program<'info, Token>,

    /// Rent sysvar for rent-exempt calculations.
    pub rent: Sysvar<'info, Rent>,
}

/// Initialize the staking registry.
///
/// # Arguments
/// * `ctx` - Initialize accounts context
/// * `tier_durations` - Lock length per tier in seconds, strictly increasing
/// * `tier_multipliers` - Reward multiplier per tier, strictly increasing
///
/// # Returns
/// Result indicating success or error
pub fn handler(
    ctx: Context<Initialize>,
    tier_durations: [u64; TIER_COUNT],
    tier_multipliers: [u64; TIER_COUNT],
) -> Result<()> {
    // === VAULT VERIFICATION ===

    let staking_info_key = ctx.accounts.staking_info.key();
    let staking_mint = ctx.accounts.staking_token_mint.key();
    let reward_mint = ctx.accounts.reward_token_mint.key();

    require!(
        ctx.accounts.staking_vault.owner == staking_info_key
            && ctx.accounts.reward_vault.owner == staking_info_key,
        StakingError::InvalidTokenConfiguration
    );
    require!(
        ctx.accounts.staking_vault.mint == staking_mint
            && ctx.accounts.reward_vault.mint == reward_mint,
        StakingError::InvalidTokenConfiguration
    );
    require_keys_neq!(
        ctx.accounts.staking_vault.key(),
        ctx.accounts.reward_vault.key(),
        StakingError::InvalidTokenConfiguration
    );

    // === STATE INITIALIZATION ===

    let clock = Clock::get()?;
    let config = RegistryConfig {
        authority: ctx.accounts.authority.key(),
        staking_token_mint: staking_mint,
        reward_token_mint: reward_mint,
        staking_vault: ctx.accounts.staking_vault.key(),
        reward_vault: ctx.accounts.reward_vault.key(),
        tier_durations,
        tier_multipliers,
        bump: ctx.bumps.staking_info,
        staking_vault_bump: ctx.bumps.staking_vault,
        reward_vault_bump: ctx.bumps.reward_vault,
    };
    accounting::initialize(&mut ctx.accounts.staking_info, config, clock.unix_timestamp)?;

    msg!("Tier staking registry initialized");
    msg!("Authority: {}", config.authority);
    msg!("Staking mint: {}, reward mint: {}", staking_mint, reward_mint);
    msg!("Tier durations: {:?}", tier_durations);
    msg!("Tier multipliers: {:?}", tier_multipliers);

    emit!(RegistryInitialized {
        authority: config.authority,
        staking_token_mint: staking_mint,
        reward_token_mint: reward_mint,
        staking_vault: config.staking_vault,
        reward_vault: config.reward_vault,
        tier_durations,
        tier_multipliers,
    });

    Ok(())
}
