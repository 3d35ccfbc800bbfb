use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_OUTCOMES, POOL_VERSION},
    errors::BettingError,
    events::PoolCreated,
    Pool, PoolStatus,
};

/// Creates a pool record in Created state. The vault is a seeds-derived PDA
/// that holds lamports directly once bets come in.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + Pool::INIT_SPACE,
        seeds = [b"pool", pool_id.to_le_bytes().as_ref()],
        bump
    )]
    pub pool: Account<'info, Pool>,

    /// CHECK: PDA that holds custodied lamports; validated by seeds
    #[account(
        seeds = [b"vault", pool.key().as_ref()],
        bump
    )]
    pub vault: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(
        &mut self,
        pool_id: u64,
        outcome_count: u8,
        settlement_authority: Pubkey,
        bumps: InitializeBumps,
    ) -> Result<()> {
        // A freshly created account is zeroed; any live record carries a
        // non-zero version tag.
        require!(self.pool.version == 0, BettingError::AlreadyInitialized);

        require!(outcome_count > 1, BettingError::InvalidOutcome);
        require!(
            outcome_count as usize <= MAX_OUTCOMES,
            BettingError::InvalidOutcome
        );

        self.pool.set_inner(Pool {
            version: POOL_VERSION,
            pool_id,
            authority: self.authority.key(),
            settlement_authority,
            status: PoolStatus::Created,
            outcome_count,
            staked_per_outcome: [0u64; MAX_OUTCOMES],
            vault_balance: 0,
            settled_pool: 0,
            winning_outcome: None,
            bump: bumps.pool,
            vault_bump: bumps.vault,
        });

        emit!(PoolCreated {
            pool: self.pool.key(),
            pool_id,
            authority: self.authority.key(),
            outcome_count,
        });

        Ok(())
    }
}
