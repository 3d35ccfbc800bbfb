use anchor_lang::prelude::*;

use crate::errors::BettingError;

#[account]
#[derive(InitSpace)]
pub struct Position {
    pub pool: Pubkey,
    pub owner: Pubkey,
    /// Immutable once written.
    pub chosen_outcome: u8,
    /// Immutable once written.
    pub amount: u64,
    pub claimed: bool,
    pub bump: u8,
}

impl Position {
    /// Flips the claimed flag exactly once.
    pub fn mark_claimed(&mut self) -> Result<()> {
        require!(!self.claimed, BettingError::AlreadyClaimed);
        self.claimed = true;
        Ok(())
    }
}
