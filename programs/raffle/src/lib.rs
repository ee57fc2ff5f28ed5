//! Autonomous raffle settled with Switchboard verifiable randomness.
//!
//! Entrants pay a fixed fee into a pooled pot while the round is open. Once
//! the configured interval has elapsed and at least one entrant has joined,
//! anyone may close the round, committing it to a Switchboard randomness
//! account; once that account's value is revealed, anyone may settle: the
//! winner is drawn by uniform modulo over the roster, the whole pot is paid
//! out, and the round reopens.

use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

declare_id!("2RTh2Y4e2N421EbSnUYTKdGqDHJH7etxZb3VrWDMpNMX");

#[program]
pub mod raffle {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, entrance_fee: u64, interval: i64) -> Result<()> {
        process_initialize(ctx, entrance_fee, interval)
    }

    pub fn enter(ctx: Context<Enter>, amount: u64) -> Result<()> {
        process_enter(ctx, amount)
    }

    pub fn check_upkeep(ctx: Context<CheckUpkeep>) -> Result<bool> {
        process_check_upkeep(ctx)
    }

    pub fn close_round(ctx: Context<CloseRound>) -> Result<()> {
        process_close_round(ctx)
    }

    pub fn settle(ctx: Context<Settle>) -> Result<()> {
        process_settle(ctx)
    }

    pub fn recover_round(ctx: Context<RecoverRound>) -> Result<()> {
        process_recover_round(ctx)
    }
}
