use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum PoolStatus {
    Created,
    Open,
    Locked,
    Settled,
    Cancelled,
}

impl PoolStatus {
    /// Settled and Cancelled are permanent; the record is never closed.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PoolStatus::Settled | PoolStatus::Cancelled)
    }
}
