//! Token movements in and out of the program vaults.
//!
//! Both vaults use the registry PDA as token authority, so outbound
//! transfers are signed with the registry seeds.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};

use crate::constants::STAKING_INFO_SEED;
use crate::error::StakingError;

/// Moves `amount` from a user-owned token account into a vault.
pub fn transfer_in<'info>(
    token_program: AccountInfo<'info>,
    from: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    owner: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let cpi_accounts = Transfer {
        from,
        to: vault,
        authority: owner,
    };
    let cpi_ctx = CpiContext::new(token_program, cpi_accounts);
    token::transfer(cpi_ctx, amount).map_err(|_| error!(StakingError::TransferFailed))
}

/// Moves `amount` out of a vault, signed by the registry PDA. Zero is a no-op.
pub fn transfer_out<'info>(
    token_program: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    to: AccountInfo<'info>,
    staking_info: AccountInfo<'info>,
    staking_info_bump: u8,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let bump = [staking_info_bump];
    let seeds: &[&[u8]] = &[STAKING_INFO_SEED, &bump];
    let signer_seeds = &[seeds];

    let cpi_accounts = Transfer {
        from: vault,
        to,
        authority: staking_info,
    };
    let cpi_ctx = CpiContext::new_with_signer(token_program, cpi_accounts, signer_seeds);
    token::transfer(cpi_ctx, amount).map_err(|_| error!(StakingError::TransferFailed))
}
