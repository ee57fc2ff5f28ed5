use anchor_lang::prelude::*;

use crate::constants::RAFFLE_SEED;
use crate::state::Raffle;

#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
    #[account(
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
}

/// Readiness probe for the automation bot. Mutates nothing and may be called
/// at any time; `close_round` re-evaluates the same predicate before acting,
/// so a stale answer here is harmless.
pub fn process_check_upkeep(ctx: Context<CheckUpkeep>) -> Result<bool> {
    let clock = Clock::get()?;
    let readiness = ctx.accounts.raffle.readiness(clock.unix_timestamp);
    msg!(
        "upkeep check: open={} interval_elapsed={} has_players={} has_balance={}",
        readiness.is_open,
        readiness.interval_elapsed,
        readiness.has_players,
        readiness.has_balance
    );
    Ok(readiness.upkeep_needed())
}
