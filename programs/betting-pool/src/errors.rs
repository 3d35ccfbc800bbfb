use anchor_lang::prelude::*;

#[error_code]
pub enum BettingError {
    #[msg("Signer is not authorized for this operation.")]
    Unauthorized,

    #[msg("Pool is not in the required state.")]
    InvalidState,

    #[msg("Pool is not open for betting.")]
    PoolNotOpen,

    #[msg("Stake amount must be greater than zero.")]
    InvalidAmount,

    #[msg("Outcome index is out of range for this pool.")]
    InvalidOutcome,

    #[msg("Vault balance is insufficient for the requested payout.")]
    InsufficientFunds,

    #[msg("Arithmetic overflow.")]
    ArithmeticOverflow,

    #[msg("Pool account is already initialized.")]
    AlreadyInitialized,

    #[msg("Position has already been claimed.")]
    AlreadyClaimed,

    #[msg("Pool record layout version is not supported.")]
    DeserializationError,

    #[msg("Position is not owned by the signer.")]
    WrongOwner,

    #[msg("No settlement authority is configured for this pool.")]
    OracleUnavailable,
}
