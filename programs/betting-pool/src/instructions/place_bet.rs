use anchor_lang::prelude::*;

use crate::{errors::BettingError, events::BetPlaced, Pool, PoolStatus, Position};

#[derive(Accounts)]
pub struct PlaceBet<'info> {
    #[account(mut)]
    pub staker: Signer<'info>,

    #[account(mut)]
    pub pool: Account<'info, Pool>,

    #[account(
        init,
        payer = staker,
        space = 8 + Position::INIT_SPACE,
        seeds = [b"position", pool.key().as_ref(), staker.key().as_ref()],
        bump
    )]
    pub position: Account<'info, Position>,

    /// CHECK: PDA that holds custodied lamports; validated by seeds
    #[account(
        mut,
        seeds = [b"vault", pool.key().as_ref()],
        bump = pool.vault_bump
    )]
    pub vault: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> PlaceBet<'info> {
    pub fn place_bet(&mut self, outcome: u8, amount: u64, bumps: PlaceBetBumps) -> Result<()> {
        self.pool.assert_version()?;

        require!(
            self.pool.status == PoolStatus::Open,
            BettingError::PoolNotOpen
        );
        require!(amount > 0, BettingError::InvalidAmount);
        require!(
            outcome < self.pool.outcome_count,
            BettingError::InvalidOutcome
        );

        // Move the stake into custody. The system program rejects the
        // transfer if the staker cannot cover it.
        let cpi_ctx = CpiContext::new(
            self.system_program.to_account_info(),
            anchor_lang::system_program::Transfer {
                from: self.staker.to_account_info(),
                to: self.vault.to_account_info(),
            },
        );
        anchor_lang::system_program::transfer(cpi_ctx, amount)?;

        self.position.set_inner(Position {
            pool: self.pool.key(),
            owner: self.staker.key(),
            chosen_outcome: outcome,
            amount,
            claimed: false,
            bump: bumps.position,
        });

        self.pool.record_stake(outcome, amount)?;

        emit!(BetPlaced {
            pool: self.pool.key(),
            position: self.position.key(),
            owner: self.staker.key(),
            outcome,
            amount,
        });

        Ok(())
    }
}
