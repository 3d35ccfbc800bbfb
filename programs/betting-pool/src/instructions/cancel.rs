use anchor_lang::prelude::*;

use crate::{errors::BettingError, events::PoolCancelled, Pool, PoolStatus};

/// Aborts a pool before it is locked. No funds move here; every staker gets
/// their refund lazily through claim.
#[derive(Accounts)]
pub struct Cancel<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        has_one = authority @ BettingError::Unauthorized
    )]
    pub pool: Account<'info, Pool>,
}

impl<'info> Cancel<'info> {
    pub fn cancel(&mut self) -> Result<()> {
        self.pool.assert_version()?;
        self.pool.transition(PoolStatus::Cancelled)?;

        emit!(PoolCancelled {
            pool: self.pool.key(),
        });

        Ok(())
    }
}
