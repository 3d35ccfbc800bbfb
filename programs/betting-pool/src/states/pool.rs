use anchor_lang::prelude::*;

use crate::{errors::BettingError, PoolStatus, Position, MAX_OUTCOMES, POOL_VERSION};

#[account]
#[derive(InitSpace)]
pub struct Pool {
    /// Record layout version tag; must equal POOL_VERSION.
    pub version: u8,
    pub pool_id: u64,
    /// May open, lock, and cancel the pool.
    pub authority: Pubkey,
    /// Oracle identity whose signature authorizes settle. Pubkey::default()
    /// means no oracle is configured and the pool can only be cancelled.
    pub settlement_authority: Pubkey,
    pub status: PoolStatus,
    pub outcome_count: u8,
    /// Total stake per outcome index, 0..outcome_count live.
    pub staked_per_outcome: [u64; MAX_OUTCOMES],
    /// Custodied lamports; grows only in place_bet, shrinks only in claim.
    pub vault_balance: u64,
    /// Snapshot of vault_balance taken at settle; payout denominator base.
    pub settled_pool: u64,
    /// Set exactly once, by settle.
    pub winning_outcome: Option<u8>,
    pub bump: u8,
    pub vault_bump: u8,
}

impl Pool {
    pub fn assert_version(&self) -> Result<()> {
        require!(
            self.version == POOL_VERSION,
            BettingError::DeserializationError
        );
        Ok(())
    }

    /// True when a settlement authority was configured at initialize time.
    pub fn has_oracle(&self) -> bool {
        self.settlement_authority != Pubkey::default()
    }

    /// Checks the settle signer against the configured settlement authority.
    /// The caller's claim of authorization is never taken at face value.
    pub fn verify_settlement_authority(&self, signer: &Pubkey) -> Result<()> {
        require!(self.has_oracle(), BettingError::OracleUnavailable);
        require_keys_eq!(
            *signer,
            self.settlement_authority,
            BettingError::Unauthorized
        );
        Ok(())
    }

    /// Moves the pool along one edge of the lifecycle graph:
    ///
    ///   Created -> Open -> Locked -> Settled
    ///   Created -> Cancelled
    ///   Open    -> Cancelled
    ///
    /// Any other pair is rejected. Locking additionally requires a
    /// configured oracle: once Locked the only exit is Settled, so a pool
    /// that can never settle must keep the cancel edge reachable or its
    /// vault would be stranded.
    pub fn transition(&mut self, to: PoolStatus) -> Result<()> {
        if to == PoolStatus::Locked {
            require!(self.has_oracle(), BettingError::OracleUnavailable);
        }

        let allowed = matches!(
            (self.status, to),
            (PoolStatus::Created, PoolStatus::Open)
                | (PoolStatus::Open, PoolStatus::Locked)
                | (PoolStatus::Locked, PoolStatus::Settled)
                | (PoolStatus::Created, PoolStatus::Cancelled)
                | (PoolStatus::Open, PoolStatus::Cancelled)
        );
        require!(allowed, BettingError::InvalidState);
        self.status = to;
        Ok(())
    }

    /// Accumulates a new stake into the per-outcome table and the vault total.
    pub fn record_stake(&mut self, outcome: u8, amount: u64) -> Result<()> {
        require!(amount > 0, BettingError::InvalidAmount);
        require!(outcome < self.outcome_count, BettingError::InvalidOutcome);

        let idx = outcome as usize;
        self.staked_per_outcome[idx] = self.staked_per_outcome[idx]
            .checked_add(amount)
            .ok_or(BettingError::ArithmeticOverflow)?;

        self.vault_balance = self
            .vault_balance
            .checked_add(amount)
            .ok_or(BettingError::ArithmeticOverflow)?;

        Ok(())
    }

    /// Amount owed to a position under the current pool state.
    ///
    /// Settled: the whole settled pool is split pro rata across the winning
    /// outcome's stake; division truncates and the dust stays in the vault.
    /// A losing position is owed 0, which is a valid claim, not an error.
    /// Cancelled: full refund of the stake.
    pub fn payout_for(&self, position: &Position) -> Result<u64> {
        match self.status {
            PoolStatus::Settled => {
                let winning = self.winning_outcome.ok_or(BettingError::InvalidState)?;
                if position.chosen_outcome != winning {
                    return Ok(0);
                }

                let total_winning_stake = self.staked_per_outcome[winning as usize];
                let payout = (position.amount as u128)
                    .checked_mul(self.settled_pool as u128)
                    .ok_or(BettingError::ArithmeticOverflow)?
                    .checked_div(total_winning_stake as u128)
                    .ok_or(BettingError::ArithmeticOverflow)?;

                payout
                    .try_into()
                    .map_err(|_| BettingError::ArithmeticOverflow.into())
            }
            PoolStatus::Cancelled => Ok(position.amount),
            _ => Err(BettingError::InvalidState.into()),
        }
    }

    /// Books a payout against the tracked vault balance.
    pub fn debit_vault(&mut self, amount: u64) -> Result<()> {
        self.vault_balance = self
            .vault_balance
            .checked_sub(amount)
            .ok_or(BettingError::InsufficientFunds)?;
        Ok(())
    }
}
