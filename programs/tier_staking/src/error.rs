//! Error types for the Tier Staking program.
//!
//! Every precondition failure surfaces as one of these codes before any
//! account state is written.
//!
//! ## Error Code Ranges
//! - 6000-6002: Initialization errors
//! - 6003-6004: Authorization errors
//! - 6005-6012: Stake lifecycle and pool errors
//! - 6013-6015: Ledger and math errors

use anchor_lang::prelude::*;

/// Custom error codes for the Tier Staking program.
///
/// Error codes start at 6000 (Anchor's custom error offset).
#[error_code]
pub enum StakingError {
    // ========== Initialization Errors ==========

    /// [6000] The staking registry has already been created.
    #[msg("Staking registry is already initialized")]
    AlreadyInitialized,

    /// [6001] Tier durations or multipliers are zero or not strictly increasing.
    #[msg("Tier durations and multipliers must be positive and strictly increasing")]
    InvalidTierConfiguration,

    /// [6002] A vault does not hold the configured mint or is not owned by the registry.
    #[msg("Vault token configuration does not match the registry")]
    InvalidTokenConfiguration,

    // ========== Authorization Errors ==========

    /// [6003] Caller is not the registry authority or the stake owner.
    #[msg("Unauthorized: caller may not perform this operation")]
    Unauthorized,

    /// [6004] New authority is the default pubkey.
    #[msg("New authority must not be the default pubkey")]
    InvalidAuthority,

    // ========== Stake Lifecycle / Pool Errors ==========

    /// [6005] Amount is zero or would overflow the pool counter.
    #[msg("Amount must be greater than zero and must not overflow")]
    InvalidAmount,

    /// [6006] Caller already has a live stake record.
    #[msg("A live stake already exists - unstake first")]
    AlreadyStaked,

    /// [6007] Tier index is outside the configured tier table.
    #[msg("Invalid tier index (must be 0..=3)")]
    InvalidTier,

    /// [6008] Caller has no live stake record.
    #[msg("No live stake found for this user")]
    NotStaked,

    /// [6009] The tier lock period has not elapsed yet.
    #[msg("Lock period has not matured - cannot unstake yet")]
    LockNotMatured,

    /// [6010] Nothing has accrued since the last settlement.
    #[msg("No rewards available to claim")]
    NothingToClaim,

    /// [6011] The reward pool cannot cover the accrued reward.
    #[msg("Insufficient reward pool to pay accrued reward")]
    InsufficientRewardPool,

    /// [6012] Withdrawal exceeds the tracked reward pool.
    #[msg("Withdrawal exceeds the reward pool balance")]
    InsufficientPoolBalance,

    // ========== Ledger / Math Errors ==========

    /// [6013] Source token account holds less than the requested amount.
    #[msg("Insufficient token balance")]
    InsufficientBalance,

    /// [6014] The token program rejected a vault transfer.
    #[msg("Token transfer failed")]
    TransferFailed,

    /// [6015] Arithmetic overflow occurred during calculation.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow,
}
