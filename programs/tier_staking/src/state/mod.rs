//! Account structures for the Tier Staking program.

pub mod staking_info;
pub mod user_stake_info;

pub use staking_info::*;
pub use user_stake_info::*;
