use anchor_lang::prelude::*;

use crate::error::StakingError;

/// A participant's stake record. Live while `amount > 0`.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct UserStakeInfo {
    pub owner: Pubkey,

    pub amount: u64,
    pub tier_index: u8,

    pub start_time: i64,
    pub last_claim_time: i64,

    pub total_claimed: u64,
    pub bump: u8,
}

impl UserStakeInfo {
    pub const LEN: usize = 8 + 32 + 8 + 1 + 8 + 8 + 8 + 1;

    pub fn is_live(&self) -> bool {
        self.amount > 0
    }

    /// Live record owned by `signer`, or the matching error.
    pub fn require_live_owner(&self, signer: &Pubkey) -> Result<()> {
        require!(self.is_live(), StakingError::NotStaked);
        require_keys_eq!(self.owner, *signer, StakingError::Unauthorized);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.amount = 0;
        self.tier_index = 0;
        self.start_time = 0;
        self.last_claim_time = 0;
    }

    /// Reads the record stored at its PDA. An address that was never
    /// allocated by this program reads as `NotStaked`.
    pub fn load(account: &AccountInfo) -> Result<Self> {
        if account.owner != &crate::ID || account.data_is_empty() {
            return err!(StakingError::NotStaked);
        }
        let data = account.try_borrow_data()?;
        Self::try_deserialize(&mut &data[..])
    }

    /// Writes the record back to its PDA.
    pub fn store(&self, account: &AccountInfo) -> Result<()> {
        let mut data = account.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
    }
}
