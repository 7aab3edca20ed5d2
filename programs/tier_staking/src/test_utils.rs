//! Test helpers: error assertions, an in-memory token ledger that drives
//! the accounting transitions the same way the instruction handlers do, and
//! account fixtures for running the generated account validation.

use std::collections::HashMap;

use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_lang::solana_program::program_pack::Pack;
use anchor_spl::token::spl_token;

use crate::accounting::{self, RegistryConfig, Release};
use crate::constants::{
    DEFAULT_TIER_DURATIONS, DEFAULT_TIER_MULTIPLIERS, STAKING_INFO_SEED, USER_STAKE_INFO_SEED,
};
use crate::error::StakingError;
use crate::state::{StakingInfo, UserStakeInfo};

pub fn assert_staking_err<T: std::fmt::Debug>(result: Result<T>, expected: StakingError) {
    let name = format!("{:?}", expected);
    let code: u32 = expected.into();
    match result {
        Err(Error::AnchorError(err)) => {
            assert_eq!(
                err.error_code_number, code,
                "expected {}, got {}",
                name, err.error_name
            );
        }
        other => panic!("expected {}, got {:?}", name, other),
    }
}

pub fn assert_anchor_err<T: std::fmt::Debug>(result: Result<T>, expected: ErrorCode) {
    let code: u32 = expected.into();
    match result {
        Err(Error::AnchorError(err)) => assert_eq!(err.error_code_number, code, "got {}", err.error_name),
        other => panic!("expected anchor error {}, got {:?}", code, other),
    }
}

/// Registry, stake records and token balances for one program instance.
pub struct Harness {
    pub info: StakingInfo,
    pub records: HashMap<Pubkey, UserStakeInfo>,
    pub wallets: HashMap<(Pubkey, Pubkey), u64>,
    pub staking_vault: u64,
    pub reward_vault: u64,
    pub authority: Pubkey,
    pub staking_mint: Pubkey,
    pub reward_mint: Pubkey,
}

impl Harness {
    /// Registry with the default tier table, initialized at `t = 0`.
    pub fn new() -> Self {
        Self::with_mints(Pubkey::new_unique(), Pubkey::new_unique())
    }

    pub fn with_mints(staking_mint: Pubkey, reward_mint: Pubkey) -> Self {
        let authority = Pubkey::new_unique();
        let mut info = StakingInfo::default();
        accounting::initialize(
            &mut info,
            RegistryConfig {
                authority,
                staking_token_mint: staking_mint,
                reward_token_mint: reward_mint,
                staking_vault: Pubkey::new_unique(),
                reward_vault: Pubkey::new_unique(),
                tier_durations: DEFAULT_TIER_DURATIONS,
                tier_multipliers: DEFAULT_TIER_MULTIPLIERS,
                bump: 255,
                staking_vault_bump: 254,
                reward_vault_bump: 253,
            },
            0,
        )
        .unwrap();

        Self {
            info,
            records: HashMap::new(),
            wallets: HashMap::new(),
            staking_vault: 0,
            reward_vault: 0,
            authority,
            staking_mint,
            reward_mint,
        }
    }

    pub fn mint_to(&mut self, owner: Pubkey, mint: Pubkey, amount: u64) {
        *self.wallets.entry((owner, mint)).or_default() += amount;
    }

    pub fn balance(&self, owner: Pubkey, mint: Pubkey) -> u64 {
        self.wallets.get(&(owner, mint)).copied().unwrap_or(0)
    }

    fn debit(&mut self, owner: Pubkey, mint: Pubkey, amount: u64) {
        let balance = self.wallets.get_mut(&(owner, mint)).unwrap();
        *balance = balance.checked_sub(amount).unwrap();
    }

    pub fn deposit(&mut self, signer: Pubkey, amount: u64, now: i64) -> Result<u64> {
        let available = self.balance(signer, self.reward_mint);
        let pool = accounting::deposit_reward(&mut self.info, &signer, amount, available, now)?;
        self.debit(signer, self.reward_mint, amount);
        self.reward_vault += amount;
        Ok(pool)
    }

    pub fn withdraw(&mut self, signer: Pubkey, amount: u64, now: i64) -> Result<u64> {
        let pool = accounting::withdraw_reward(&mut self.info, &signer, amount, now)?;
        self.reward_vault -= amount;
        self.mint_to(signer, self.reward_mint, amount);
        Ok(pool)
    }

    pub fn stake(&mut self, user: Pubkey, amount: u64, tier_index: u8, now: i64) -> Result<()> {
        let available = self.balance(user, self.staking_mint);
        let record = self.records.entry(user).or_default();
        accounting::open_stake(
            &mut self.info,
            record,
            user,
            amount,
            tier_index,
            available,
            250,
            now,
        )?;
        self.debit(user, self.staking_mint, amount);
        self.staking_vault += amount;
        Ok(())
    }

    pub fn claim(&mut self, user: Pubkey, now: i64) -> Result<u64> {
        self.claim_as(user, user, now)
    }

    pub fn claim_as(&mut self, signer: Pubkey, owner: Pubkey, now: i64) -> Result<u64> {
        let record = self.records.entry(owner).or_default();
        let paid = accounting::claim(&mut self.info, record, &signer, now)?;
        self.reward_vault -= paid;
        self.mint_to(signer, self.reward_mint, paid);
        Ok(paid)
    }

    pub fn unstake(&mut self, user: Pubkey, now: i64) -> Result<Release> {
        let record = self.records.entry(user).or_default();
        let release = accounting::close_stake(&mut self.info, record, &user, now)?;
        self.staking_vault -= release.principal;
        self.reward_vault -= release.reward;
        self.mint_to(user, self.staking_mint, release.principal);
        self.mint_to(user, self.reward_mint, release.reward);
        Ok(release)
    }

    pub fn record(&self, user: Pubkey) -> UserStakeInfo {
        self.records.get(&user).cloned().unwrap_or_default()
    }

    /// Staking vault equals live principal; reward vault covers the pool.
    pub fn assert_conserved(&self) {
        let live: u64 = self
            .records
            .values()
            .filter(|record| record.is_live())
            .map(|record| record.amount)
            .sum();
        assert_eq!(self.staking_vault, live);
        assert_eq!(self.info.total_staked, live);
        assert!(self.reward_vault >= self.info.reward_pool_balance);
    }
}

/// Account infos for one user against a deployed registry. Buffers are
/// leaked so the infos satisfy the `'info` bound of `try_accounts`.
pub struct Deployment {
    pub info: StakingInfo,
    pub registry: Pubkey,
    pub user: Pubkey,
}

impl Deployment {
    pub fn new() -> Self {
        let (registry, bump) = Pubkey::find_program_address(&[STAKING_INFO_SEED], &crate::ID);
        let mut info = Harness::new().info;
        info.bump = bump;
        Self {
            info,
            registry,
            user: Pubkey::new_unique(),
        }
    }

    pub fn leak(accounts: Vec<AccountInfo<'static>>) -> &'static [AccountInfo<'static>] {
        Box::leak(accounts.into_boxed_slice())
    }

    fn account(
        key: Pubkey,
        owner: Pubkey,
        data: Vec<u8>,
        is_signer: bool,
        executable: bool,
    ) -> AccountInfo<'static> {
        AccountInfo::new(
            Box::leak(Box::new(key)),
            is_signer,
            true,
            Box::leak(Box::new(1_000_000_000u64)),
            Box::leak(data.into_boxed_slice()),
            Box::leak(Box::new(owner)),
            executable,
            0,
        )
    }

    fn token_account(key: Pubkey, mint: Pubkey, owner: Pubkey, amount: u64) -> AccountInfo<'static> {
        let state = spl_token::state::Account {
            mint,
            owner,
            amount,
            delegate: COption::None,
            state: spl_token::state::AccountState::Initialized,
            is_native: COption::None,
            delegated_amount: 0,
            close_authority: COption::None,
        };
        let mut data = vec![0u8; spl_token::state::Account::LEN];
        spl_token::state::Account::pack(state, &mut data).unwrap();
        Self::account(key, spl_token::ID, data, false, false)
    }

    pub fn user_signer(&self) -> AccountInfo<'static> {
        Self::account(self.user, anchor_lang::system_program::ID, Vec::new(), true, false)
    }

    pub fn registry_account(&self) -> AccountInfo<'static> {
        let mut data = vec![0u8; StakingInfo::LEN];
        let mut writer: &mut [u8] = &mut data;
        self.info.try_serialize(&mut writer).unwrap();
        Self::account(self.registry, crate::ID, data, false, false)
    }

    pub fn record_address(&self, user: Pubkey) -> Pubkey {
        Pubkey::find_program_address(&[USER_STAKE_INFO_SEED, user.as_ref()], &crate::ID).0
    }

    /// The user's record PDA; `None` leaves it unallocated.
    pub fn record_account(&self, record: Option<&UserStakeInfo>) -> AccountInfo<'static> {
        let key = self.record_address(self.user);
        match record {
            Some(record) => {
                let mut data = vec![0u8; UserStakeInfo::LEN];
                let mut writer: &mut [u8] = &mut data;
                record.try_serialize(&mut writer).unwrap();
                Self::account(key, crate::ID, data, false, false)
            }
            None => Self::account(key, anchor_lang::system_program::ID, Vec::new(), false, false),
        }
    }

    pub fn user_token(&self, mint: Pubkey) -> AccountInfo<'static> {
        Self::token_account(Pubkey::new_unique(), mint, self.user, 0)
    }

    pub fn vault(&self, key: Pubkey, mint: Pubkey, amount: u64) -> AccountInfo<'static> {
        Self::token_account(key, mint, self.registry, amount)
    }

    pub fn token_program(&self) -> AccountInfo<'static> {
        Self::account(spl_token::ID, Pubkey::default(), Vec::new(), false, true)
    }
}
