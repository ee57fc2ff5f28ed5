use anchor_lang::prelude::*;

#[event]
pub struct RaffleInitialized {
    pub authority: Pubkey,
    pub entrance_fee: u64,
    pub interval: i64,
}

#[event]
pub struct Entered {
    pub player: Pubkey,
    pub slot_index: u32,
    pub pot_amount: u64,
}

#[event]
pub struct RoundClosing {
    pub randomness_account: Pubkey,
    pub players: u32,
    pub pot_amount: u64,
}

#[event]
pub struct WinnerPicked {
    pub winner: Pubkey,
    pub payout: u64,
    pub players: u32,
}

#[event]
pub struct RoundRecovered {
    pub randomness_account: Pubkey,
    pub caller: Pubkey,
}
