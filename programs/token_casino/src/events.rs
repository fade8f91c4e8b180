use anchor_lang::prelude::*;

use crate::access::Component;

#[event]
pub struct MintEvent {
    pub target_address: Pubkey,
    pub usdc_amount: u64,
    pub casino_token_count: u64,
}

#[event]
pub struct BurnEvent {
    pub target_address: Pubkey,
    pub usdc_amount: u64,
    pub casino_token_count: u64,
}

#[event]
pub struct PlayEvent {
    pub player: Pubkey,
    pub bet: u64,
    pub payout: u64,
    pub has_player_won: bool,
    pub casino_card: u8,
    pub player_card: u8,
    pub timestamp: i64,
}

#[event]
pub struct SeedUpdated {
    pub admin: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct AdminChanged {
    pub component: Component,
    pub previous_admin: Pubkey,
    pub new_admin: Pubkey,
}

#[event]
pub struct CasinoFunded {
    pub admin: Pubkey,
    pub amount: u64,
    pub bankroll: u64,
}

#[event]
pub struct BalanceTransferred {
    pub admin: Pubkey,
    pub amount: u64,
}
