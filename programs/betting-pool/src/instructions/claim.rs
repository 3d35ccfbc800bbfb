use anchor_lang::prelude::*;

use crate::{errors::BettingError, events::PayoutClaimed, Pool, Position};

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(mut)]
    pub pool: Account<'info, Pool>,

    #[account(
        mut,
        seeds = [b"position", pool.key().as_ref(), owner.key().as_ref()],
        bump = position.bump,
        has_one = pool,
        has_one = owner @ BettingError::WrongOwner
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

impl<'info> Claim<'info> {
    pub fn claim(&mut self) -> Result<()> {
        self.pool.assert_version()?;

        // payout_for rejects any pool that is not Settled or Cancelled. A
        // losing position yields 0 and is still a valid, one-shot claim.
        let payout = self.pool.payout_for(&self.position)?;

        // Mark claimed before any transfer.
        self.position.mark_claimed()?;
        self.pool.debit_vault(payout)?;

        if payout > 0 {
            let pool_key = self.pool.key();
            let signer_seeds: &[&[&[u8]]] =
                &[&[b"vault", pool_key.as_ref(), &[self.pool.vault_bump]]];

            let transfer_ix = anchor_lang::solana_program::system_instruction::transfer(
                &self.vault.key(),
                &self.owner.key(),
                payout,
            );

            anchor_lang::solana_program::program::invoke_signed(
                &transfer_ix,
                &[
                    self.vault.to_account_info(),
                    self.owner.to_account_info(),
                    self.system_program.to_account_info(),
                ],
                signer_seeds,
            )?;
        }

        emit!(PayoutClaimed {
            pool: self.pool.key(),
            position: self.position.key(),
            owner: self.owner.key(),
            amount: payout,
        });

        Ok(())
    }
}
