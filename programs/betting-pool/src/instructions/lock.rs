use anchor_lang::prelude::*;

use crate::{errors::BettingError, events::PoolLocked, Pool, PoolStatus};

/// Freezes the betting window ahead of settlement.
#[derive(Accounts)]
pub struct Lock<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        has_one = authority @ BettingError::Unauthorized
    )]
    pub pool: Account<'info, Pool>,
}

impl<'info> Lock<'info> {
    pub fn lock(&mut self) -> Result<()> {
        self.pool.assert_version()?;
        self.pool.transition(PoolStatus::Locked)?;

        emit!(PoolLocked {
            pool: self.pool.key(),
        });

        Ok(())
    }
}
