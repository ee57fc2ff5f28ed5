use anchor_lang::prelude::*;

/// PDA seed for the singleton raffle account.
#[constant]
pub const RAFFLE_SEED: &[u8] = b"raffle";

/// Roster capacity. The raffle account is sized for this many entries;
/// `enter` rejects further entries until the round settles.
pub const MAX_PLAYERS: usize = 200;

/// Seconds a round may sit in `Calculating` before the authority is allowed
/// to abort the randomness commitment and reopen it.
pub const SETTLEMENT_TIMEOUT_SECS: i64 = 600;
