use anchor_lang::prelude::*;

#[event]
pub struct PoolCreated {
    pub pool: Pubkey,
    pub pool_id: u64,
    pub authority: Pubkey,
    pub outcome_count: u8,
}

#[event]
pub struct PoolOpened {
    pub pool: Pubkey,
}

#[event]
pub struct BetPlaced {
    pub pool: Pubkey,
    pub position: Pubkey,
    pub owner: Pubkey,
    pub outcome: u8,
    pub amount: u64,
}

#[event]
pub struct PoolLocked {
    pub pool: Pubkey,
}

#[event]
pub struct PoolSettled {
    pub pool: Pubkey,
    pub outcome: u8,
    pub settled_pool: u64,
}

#[event]
pub struct PoolCancelled {
    pub pool: Pubkey,
}

#[event]
pub struct PayoutClaimed {
    pub pool: Pubkey,
    pub position: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
}
