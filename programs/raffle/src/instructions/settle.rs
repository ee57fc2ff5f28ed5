use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::RAFFLE_SEED;
use crate::error::RaffleError;
use crate::events::WinnerPicked;
use crate::state::{Raffle, RoundStatus};
use crate::utils::{draw_value, pay_from_pot};

#[derive(Accounts)]
pub struct Settle<'info> {
    /// Any caller may settle once the oracle has revealed.
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// CHECK: must match the randomness account recorded at close; verified
    /// in the handler.
    pub randomness_account_data: UncheckedAccount<'info>,

    /// CHECK: must equal the drawn roster entry; receives the pot.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}

/// Settle the round with the delivered randomness: draw the winner, pay the
/// whole pot, reset the roster, and reopen.
pub fn process_settle(ctx: Context<Settle>) -> Result<()> {
    let clock = Clock::get()?;
    let raffle = &ctx.accounts.raffle;

    // Replay / misdirected-delivery guard: only the exact account the round
    // committed to may settle it.
    require!(
        raffle.status == RoundStatus::Calculating,
        RaffleError::UnknownRandomnessRequest
    );
    require_keys_eq!(
        ctx.accounts.randomness_account_data.key(),
        raffle.pending_randomness,
        RaffleError::UnknownRandomnessRequest
    );

    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| RaffleError::InvalidRandomnessAccount)?;
    let revealed = randomness_data
        .get_value(&clock)
        .map_err(|_| RaffleError::RandomnessNotResolved)?;
    let random_value = draw_value(&revealed);

    let (winner_index, winner) = raffle.winner_for(random_value)?;
    msg!(
        "drawn value {} over {} players -> slot {}",
        random_value,
        raffle.players.len(),
        winner_index
    );
    require_keys_eq!(
        ctx.accounts.winner.key(),
        winner,
        RaffleError::WinnerAccountMismatch
    );

    let players = raffle.players.len() as u32;
    let payout = raffle.pot_amount;

    // Pay before committing the reset so a failed transfer leaves the round
    // in Calculating with the pot intact.
    pay_from_pot(
        &ctx.accounts.raffle.to_account_info(),
        &ctx.accounts.winner.to_account_info(),
        payout,
    )?;

    ctx.accounts
        .raffle
        .commit_settlement(winner, clock.unix_timestamp);

    emit!(WinnerPicked {
        winner,
        payout,
        players,
    });
    msg!("winner {} paid {} lamports", winner, payout);

    Ok(())
}
