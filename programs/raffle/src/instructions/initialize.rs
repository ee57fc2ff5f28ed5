use anchor_lang::prelude::*;

use crate::constants::RAFFLE_SEED;
use crate::error::RaffleError;
use crate::events::RaffleInitialized;
use crate::state::{Raffle, RoundStatus};

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Pays for the raffle account and becomes its recovery authority.
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + Raffle::INIT_SPACE,
        seeds = [RAFFLE_SEED],
        bump
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    pub system_program: Program<'info, System>,
}

/// Create the singleton raffle. Entrance fee and interval are fixed for the
/// lifetime of the account; the first round opens immediately and its
/// interval clock starts now.
pub fn process_initialize(
    ctx: Context<Initialize>,
    entrance_fee: u64,
    interval: i64,
) -> Result<()> {
    require!(entrance_fee > 0, RaffleError::InvalidEntranceFee);
    require!(interval > 0, RaffleError::InvalidInterval);

    let clock = Clock::get()?;
    let raffle = &mut ctx.accounts.raffle;
    raffle.bump = ctx.bumps.raffle;
    raffle.authority = ctx.accounts.payer.key();
    raffle.entrance_fee = entrance_fee;
    raffle.interval = interval;
    raffle.status = RoundStatus::Open;
    raffle.last_settled_at = clock.unix_timestamp;
    raffle.closed_at = 0;
    raffle.pending_randomness = Pubkey::default();
    raffle.recent_winner = Pubkey::default();
    raffle.pot_amount = 0;
    raffle.players = Vec::new();

    emit!(RaffleInitialized {
        authority: raffle.authority,
        entrance_fee,
        interval,
    });

    Ok(())
}
