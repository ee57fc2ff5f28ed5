use anchor_lang::prelude::*;

#[error_code]
pub enum RaffleError {
    #[msg("Payment is below the entrance fee")]
    InsufficientPayment,
    #[msg("Round is not open for entries")]
    RoundNotOpen,
    #[msg("Round roster is at capacity")]
    RoundFull,
    #[msg("Upkeep not needed: round is not ready to close")]
    UpkeepNotNeeded,
    #[msg("Randomness account does not match the pending request")]
    UnknownRandomnessRequest,
    #[msg("Randomness account is already revealable, commit to a fresh one")]
    RandomnessAlreadyRevealed,
    #[msg("Account is not a valid Switchboard randomness account")]
    InvalidRandomnessAccount,
    #[msg("Randomness has not been resolved yet")]
    RandomnessNotResolved,
    #[msg("Winner account does not match the drawn roster entry")]
    WinnerAccountMismatch,
    #[msg("Pot transfer to the winner failed")]
    PayoutFailed,
    #[msg("Unauthorized: caller is not the raffle authority")]
    Unauthorized,
    #[msg("Settlement timeout has not elapsed")]
    SettlementNotStuck,
    #[msg("Entrance fee must be greater than zero")]
    InvalidEntranceFee,
    #[msg("Interval must be greater than zero")]
    InvalidInterval,
    #[msg("Math overflow")]
    MathOverflow,
}
