use anchor_lang::prelude::*;

use crate::constants::RAFFLE_SEED;
use crate::error::RaffleError;
use crate::events::RoundRecovered;
use crate::state::Raffle;

#[derive(Accounts)]
pub struct RecoverRound<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
        constraint = raffle.authority == authority.key() @ RaffleError::Unauthorized,
    )]
    pub raffle: Account<'info, Raffle>,
}

/// Abort a settlement whose oracle never delivered. Only the authority, only
/// after the timeout; the roster and pot survive so the round can be closed
/// again with a fresh randomness account.
pub fn process_recover_round(ctx: Context<RecoverRound>) -> Result<()> {
    let clock = Clock::get()?;
    let raffle = &mut ctx.accounts.raffle;
    let stale_request = raffle.pending_randomness;

    raffle.abort_settlement(clock.unix_timestamp)?;

    emit!(RoundRecovered {
        randomness_account: stale_request,
        caller: ctx.accounts.authority.key(),
    });
    msg!("abandoned randomness request {}", stale_request);

    Ok(())
}
