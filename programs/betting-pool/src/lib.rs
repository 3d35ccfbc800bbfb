use anchor_lang::prelude::*;

declare_id!("6JRShtnTuvqR6Ntvir7Dv3FXVRZhA34EMWXW4zJRZfzx");

pub mod constants;
pub mod enums;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod states;

pub use constants::*;
pub use enums::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use states::*;


#[program]
pub mod betting_pool {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        pool_id: u64,
        outcome_count: u8,
        settlement_authority: Pubkey,
    ) -> Result<()> {
        ctx.accounts
            .initialize(pool_id, outcome_count, settlement_authority, ctx.bumps)
    }

    pub fn open(ctx: Context<Open>) -> Result<()> {
        ctx.accounts.open()
    }

    pub fn place_bet(ctx: Context<PlaceBet>, outcome: u8, amount: u64) -> Result<()> {
        ctx.accounts.place_bet(outcome, amount, ctx.bumps)
    }

    pub fn lock(ctx: Context<Lock>) -> Result<()> {
        ctx.accounts.lock()
    }

    pub fn settle(ctx: Context<Settle>, outcome: u8) -> Result<()> {
        ctx.accounts.settle(outcome)
    }

    pub fn cancel(ctx: Context<Cancel>) -> Result<()> {
        ctx.accounts.cancel()
    }

    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        ctx.accounts.claim()
    }
}
