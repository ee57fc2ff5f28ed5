use anchor_lang::prelude::*;

use crate::error::RaffleError;

/// Move lamports out of the program-owned raffle account into a recipient.
/// Entrance fees sit on top of the rent-exempt minimum, so debiting the pot
/// never deflates the account below it.
pub fn pay_from_pot<'info>(
    pot: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let debited = pot
        .lamports()
        .checked_sub(amount)
        .ok_or(RaffleError::PayoutFailed)?;
    let credited = to
        .lamports()
        .checked_add(amount)
        .ok_or(RaffleError::PayoutFailed)?;
    **pot.try_borrow_mut_lamports()? = debited;
    **to.try_borrow_mut_lamports()? = credited;
    Ok(())
}

/// Widen the first eight bytes of a revealed randomness buffer into the
/// draw value, little-endian. The oracle returns 32 bytes; one draw needs
/// only the first word.
pub fn draw_value(revealed: &[u8]) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&revealed[..8]);
    u64::from_le_bytes(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_value_reads_the_first_word_little_endian() {
        let mut revealed = [0u8; 32];
        revealed[0] = 7;
        assert_eq!(draw_value(&revealed), 7);

        revealed[1] = 1;
        assert_eq!(draw_value(&revealed), 256 + 7);

        // Bytes past the first word never affect the draw.
        revealed[8] = 0xff;
        assert_eq!(draw_value(&revealed), 256 + 7);
    }

    #[test]
    fn pay_from_pot_moves_exactly_the_amount() {
        let pot_key = Pubkey::new_unique();
        let winner_key = Pubkey::new_unique();
        let owner = crate::ID;
        let mut pot_lamports = 500u64;
        let mut winner_lamports = 100u64;
        let mut pot_data: Vec<u8> = vec![];
        let mut winner_data: Vec<u8> = vec![];

        let pot = AccountInfo::new(
            &pot_key,
            false,
            true,
            &mut pot_lamports,
            &mut pot_data,
            &owner,
            false,
            0,
        );
        let winner = AccountInfo::new(
            &winner_key,
            false,
            true,
            &mut winner_lamports,
            &mut winner_data,
            &owner,
            false,
            0,
        );

        pay_from_pot(&pot, &winner, 300).unwrap();
        assert_eq!(pot.lamports(), 200);
        assert_eq!(winner.lamports(), 400);
    }

    #[test]
    fn pay_from_pot_fails_without_touching_balances() {
        let pot_key = Pubkey::new_unique();
        let winner_key = Pubkey::new_unique();
        let owner = crate::ID;
        let mut pot_lamports = 100u64;
        let mut winner_lamports = 0u64;
        let mut pot_data: Vec<u8> = vec![];
        let mut winner_data: Vec<u8> = vec![];

        let pot = AccountInfo::new(
            &pot_key,
            false,
            true,
            &mut pot_lamports,
            &mut pot_data,
            &owner,
            false,
            0,
        );
        let winner = AccountInfo::new(
            &winner_key,
            false,
            true,
            &mut winner_lamports,
            &mut winner_data,
            &owner,
            false,
            0,
        );

        let err = pay_from_pot(&pot, &winner, 300).unwrap_err();
        assert_eq!(err, RaffleError::PayoutFailed.into());
        assert_eq!(pot.lamports(), 100);
        assert_eq!(winner.lamports(), 0);
    }
}
