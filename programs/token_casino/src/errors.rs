use anchor_lang::prelude::*;

#[error_code]
pub enum CasinoError {
    #[msg("Only the admin is allowed to call this operation.")]
    Unauthorized,
    #[msg("New admin must not be the null address.")]
    InvalidAddress,
    #[msg("Amount must be greater than zero.")]
    InvalidAmount,
    #[msg("Allowance granted to the exchange is too low.")]
    InsufficientAllowance,
    #[msg("Balance is too low for this operation.")]
    InsufficientBalance,
    #[msg("Bet exceeds players allowance.")]
    AllowanceExceeded,
    #[msg("Bet is too large.")]
    BetTooLarge,
    #[msg("Conversion factor terms must be greater than zero.")]
    InvalidConversionFactor,
    #[msg("Reserve mint must have 6 decimals.")]
    InvalidReserveMint,
    #[msg("Casino configuration is out of range.")]
    InvalidCasinoConfig,
    #[msg("Exchange exceeds the per-request USDC limit.")]
    MintLimitExceeded,
    #[msg("Reserve vault cannot cover this withdrawal.")]
    InsufficientReserve,
    #[msg("Arithmetic overflow.")]
    MathOverflow,
}
