use anchor_lang::prelude::*;

use crate::{errors::BettingError, events::PoolSettled, Pool, PoolStatus};

/// Records the oracle-supplied outcome. The outcome value is untrusted until
/// the signer is checked against the pool's settlement authority here; the
/// caller's claim of authorization is never taken at face value.
#[derive(Accounts)]
pub struct Settle<'info> {
    pub settlement_authority: Signer<'info>,

    #[account(mut)]
    pub pool: Account<'info, Pool>,
}

impl<'info> Settle<'info> {
    pub fn settle(&mut self, outcome: u8) -> Result<()> {
        self.pool.assert_version()?;

        self.pool
            .verify_settlement_authority(&self.settlement_authority.key())?;
        require!(
            outcome < self.pool.outcome_count,
            BettingError::InvalidOutcome
        );

        self.pool.transition(PoolStatus::Settled)?;

        // Snapshot the pot before any claim drains it, so every winner is
        // paid against the same denominator base.
        self.pool.winning_outcome = Some(outcome);
        self.pool.settled_pool = self.pool.vault_balance;

        emit!(PoolSettled {
            pool: self.pool.key(),
            outcome,
            settled_pool: self.pool.settled_pool,
        });

        Ok(())
    }
}
