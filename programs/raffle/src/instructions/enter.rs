use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::RAFFLE_SEED;
use crate::events::Entered;
use crate::state::Raffle;

#[derive(Accounts)]
pub struct Enter<'info> {
    /// The participant; pays the entrance fee.
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    pub system_program: Program<'info, System>,
}

/// Join the current round. `amount` must cover the entrance fee and is
/// pooled in full; a payer may enter any number of times, taking one roster
/// slot per entry.
pub fn process_enter(ctx: Context<Enter>, amount: u64) -> Result<()> {
    let slot_index = ctx
        .accounts
        .raffle
        .enter(ctx.accounts.player.key(), amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.raffle.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(Entered {
        player: ctx.accounts.player.key(),
        slot_index,
        pot_amount: ctx.accounts.raffle.pot_amount,
    });

    Ok(())
}
