use anchor_lang::prelude::*;

#[error_code]
pub enum MatchBetError {
    #[msg("Platform has already been initialized.")]
    AlreadyInitialized,
    #[msg("Account already exists.")]
    AlreadyExists,
    #[msg("Signer is not authorized to perform this action.")]
    Unauthorized,
    #[msg("House edge must be at most 10000 bps and min bet below max bet.")]
    InvalidConfig,
    #[msg("Invalid input.")]
    InvalidInput,
    #[msg("Amount is zero or arithmetic overflowed.")]
    InvalidAmount,
    #[msg("Insufficient balance.")]
    InsufficientBalance,
    #[msg("Platform is paused.")]
    PlatformPaused,
    #[msg("Betting is closed for this match.")]
    BettingClosed,
    #[msg("Bet amount is below the platform minimum.")]
    BetAmountTooLow,
    #[msg("Bet amount is above the platform maximum.")]
    BetAmountTooHigh,
    #[msg("Match status transition is not allowed.")]
    InvalidStatusTransition,
    #[msg("Bet has already been settled.")]
    AlreadySettled,
    #[msg("Match must be Completed or Cancelled before bets settle.")]
    MatchNotFinalized,
    #[msg("Current odds are below the odds accepted by the bettor.")]
    OddsMoved,
}
