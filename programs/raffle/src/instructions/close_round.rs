use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::RAFFLE_SEED;
use crate::error::RaffleError;
use crate::events::RoundClosing;
use crate::state::Raffle;

#[derive(Accounts)]
pub struct CloseRound<'info> {
    /// Any caller may close a ready round; the automation bot is just one.
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Switchboard randomness account the round commits to.
    /// CHECK: parsed and freshness-checked in the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

/// Close the round and commit it to a randomness account. The round stays in
/// `Calculating` until `settle` presents the same account with a revealed
/// value.
pub fn process_close_round(ctx: Context<CloseRound>) -> Result<()> {
    let clock = Clock::get()?;
    let raffle = &mut ctx.accounts.raffle;

    let readiness = raffle.readiness(clock.unix_timestamp);
    if !readiness.upkeep_needed() {
        msg!(
            "upkeep not needed: open={} interval_elapsed={} has_players={} has_balance={}",
            readiness.is_open,
            readiness.interval_elapsed,
            readiness.has_players,
            readiness.has_balance
        );
        return err!(RaffleError::UpkeepNotNeeded);
    }

    // The commitment must land before the oracle can reveal: only a
    // randomness account seeded at the previous slot is acceptable.
    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| RaffleError::InvalidRandomnessAccount)?;
    require!(
        randomness_data.seed_slot == clock.slot - 1,
        RaffleError::RandomnessAlreadyRevealed
    );

    raffle.begin_settlement(
        ctx.accounts.randomness_account_data.key(),
        clock.unix_timestamp,
    )?;

    emit!(RoundClosing {
        randomness_account: raffle.pending_randomness,
        players: raffle.players.len() as u32,
        pot_amount: raffle.pot_amount,
    });
    msg!(
        "round closing: {} players, {} lamports, randomness {}",
        raffle.players.len(),
        raffle.pot_amount,
        raffle.pending_randomness
    );

    Ok(())
}
