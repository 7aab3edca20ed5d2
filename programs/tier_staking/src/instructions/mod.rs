//! Instruction handlers for the Tier Staking program.

pub mod admin;
pub mod claim;
pub mod deposit_reward_token;
pub mod initialize;
pub mod stake;
pub mod unstake;
pub mod withdraw_reward_token;

pub use admin::*;
pub use claim::*;
pub use deposit_reward_token::*;
pub use initialize::*;
pub use stake::*;
pub use unstake::*;
pub use withdraw_reward_token::*;
