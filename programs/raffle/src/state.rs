use anchor_lang::prelude::*;

use crate::constants::{MAX_PLAYERS, SETTLEMENT_TIMEOUT_SECS};
use crate::error::RaffleError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum RoundStatus {
    /// Accepting entries.
    Open,
    /// Closed and committed to a randomness account, awaiting the reveal.
    Calculating,
}

/// Singleton raffle account. Seeds: ["raffle"].
///
/// One round lives in this account at a time; settlement resets the mutable
/// fields in place rather than closing the account.
#[account]
#[derive(InitSpace)]
pub struct Raffle {
    pub bump: u8,

    /// Operator allowed to abort a stuck settlement. Everything else is
    /// permissionless.
    pub authority: Pubkey,

    /// Lamports required per roster slot. Immutable after initialization.
    pub entrance_fee: u64,

    /// Minimum seconds between settlements before a round may close.
    pub interval: i64,

    pub status: RoundStatus,

    /// Timestamp of the last settlement (initialization time for the first
    /// round).
    pub last_settled_at: i64,

    /// Timestamp the round flipped to `Calculating`; 0 while `Open`.
    pub closed_at: i64,

    /// The Switchboard randomness account the current round is committed to.
    /// `Pubkey::default()` means no request is in flight.
    pub pending_randomness: Pubkey,

    /// Winner of the most recently settled round.
    pub recent_winner: Pubkey,

    /// Lamports accumulated from entries since the last settlement.
    pub pot_amount: u64,

    /// Roster in entry order. One pubkey may occupy several slots.
    #[max_len(MAX_PLAYERS)]
    pub players: Vec<Pubkey>,
}

/// Snapshot of the four readiness conditions, logged when upkeep is refused.
#[derive(Clone, Copy, Debug)]
pub struct Readiness {
    pub is_open: bool,
    pub interval_elapsed: bool,
    pub has_players: bool,
    pub has_balance: bool,
}

impl Readiness {
    pub fn upkeep_needed(&self) -> bool {
        self.is_open && self.interval_elapsed && self.has_players && self.has_balance
    }
}

impl Raffle {
    /// Record an entry. Checks run before any mutation.
    pub fn enter(&mut self, player: Pubkey, amount: u64) -> Result<u32> {
        require!(self.status == RoundStatus::Open, RaffleError::RoundNotOpen);
        require!(amount >= self.entrance_fee, RaffleError::InsufficientPayment);
        require!(self.players.len() < MAX_PLAYERS, RaffleError::RoundFull);

        let slot_index = self.players.len() as u32;
        self.players.push(player);
        self.pot_amount = self
            .pot_amount
            .checked_add(amount)
            .ok_or(RaffleError::MathOverflow)?;
        Ok(slot_index)
    }

    pub fn readiness(&self, now: i64) -> Readiness {
        Readiness {
            is_open: self.status == RoundStatus::Open,
            interval_elapsed: now.saturating_sub(self.last_settled_at) >= self.interval,
            has_players: !self.players.is_empty(),
            has_balance: self.pot_amount > 0,
        }
    }

    /// Close the round against `randomness_account`. Re-evaluates the
    /// readiness predicate itself, so of any number of racing callers only
    /// the first can succeed; the rest observe `Calculating` here.
    pub fn begin_settlement(&mut self, randomness_account: Pubkey, now: i64) -> Result<()> {
        require!(
            self.readiness(now).upkeep_needed(),
            RaffleError::UpkeepNotNeeded
        );
        self.status = RoundStatus::Calculating;
        self.pending_randomness = randomness_account;
        self.closed_at = now;
        Ok(())
    }

    /// Map a revealed random value onto the roster.
    pub fn winner_for(&self, random_value: u64) -> Result<(u32, Pubkey)> {
        require!(
            self.status == RoundStatus::Calculating && !self.players.is_empty(),
            RaffleError::UnknownRandomnessRequest
        );
        let index = (random_value % self.players.len() as u64) as u32;
        Ok((index, self.players[index as usize]))
    }

    /// Reset the round after the pot has been paid out. Returns the payout
    /// amount that was owed.
    pub fn commit_settlement(&mut self, winner: Pubkey, now: i64) -> u64 {
        let payout = self.pot_amount;
        self.recent_winner = winner;
        self.players.clear();
        self.pot_amount = 0;
        self.last_settled_at = now;
        self.closed_at = 0;
        self.pending_randomness = Pubkey::default();
        self.status = RoundStatus::Open;
        payout
    }

    /// Abort a settlement whose randomness never resolved. The roster and
    /// pot survive so the round can be re-closed against a fresh account.
    pub fn abort_settlement(&mut self, now: i64) -> Result<()> {
        require!(
            self.status == RoundStatus::Calculating,
            RaffleError::UnknownRandomnessRequest
        );
        require!(
            now.saturating_sub(self.closed_at) >= SETTLEMENT_TIMEOUT_SECS,
            RaffleError::SettlementNotStuck
        );
        self.status = RoundStatus::Open;
        self.pending_randomness = Pubkey::default();
        self.closed_at = 0;
        Ok(())
    }
}
