use anchor_lang::prelude::*;

use crate::{errors::BettingError, events::PoolOpened, Pool, PoolStatus};

#[derive(Accounts)]
pub struct Open<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        has_one = authority @ BettingError::Unauthorized
    )]
    pub pool: Account<'info, Pool>,
}

impl<'info> Open<'info> {
    pub fn open(&mut self) -> Result<()> {
        self.pool.assert_version()?;
        self.pool.transition(PoolStatus::Open)?;

        emit!(PoolOpened {
            pool: self.pool.key(),
        });

        Ok(())
    }
}
