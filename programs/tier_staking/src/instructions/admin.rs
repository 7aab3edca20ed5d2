/// Admin instruction handlers.
///
/// ## Security Guarantees
/// - Caller must sign and match `staking_info.authority`
/// - Registry PDA validated via seeds

use anchor_lang::prelude::*;

use crate::accounting;
use crate::constants::*;
use crate::events::AuthorityTransferred;
use crate::state::StakingInfo;

/// Accounts required for admin operations.
#[derive(Accounts)]
pub struct AdminControl<'info> {
    /// The current registry authority.
    pub authority: Signer<'info>,

    /// The staking registry to modify.
    #[account(
        mut,
        seeds = [STAKING_INFO_SEED],
        bump = staking_info.bump
    )]
    pub staking_info: Account<'info, StakingInfo>,
}

/// Transfer registry authority to a new address.
///
/// # Security
/// - Only the current authority can call this
/// - New authority must be a non-default pubkey
/// - Single-step transfer: a wrong address loses pool control
pub fn transfer_authority_handler(
    ctx: Context<AdminControl>,
    new_authority: Pubkey,
) -> Result<()> {
    let clock = Clock::get()?;
    let signer = ctx.accounts.authority.key();

    let previous_authority = accounting::transfer_authority(
        &mut ctx.accounts.staking_info,
        &signer,
        new_authority,
        clock.unix_timestamp,
    )?;

    msg!("Authority transferred: {} -> {}", previous_authority, new_authority);

    emit!(AuthorityTransferred {
        previous_authority,
        new_authority,
    });

    Ok(())
}
