use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::access::Administered;
use crate::state::Casino;

#[derive(Accounts)]
pub struct CasinoView<'info> {
    #[account(
        seeds = [Casino::SEED],
        bump = casino.bump,
    )]
    pub casino: Account<'info, Casino>,

    #[account(
        address = casino.bankroll_vault,
    )]
    pub bankroll_vault: Account<'info, TokenAccount>,
}

pub fn get_casino_balance_handler(ctx: Context<CasinoView>) -> Result<u64> {
    Ok(ctx
        .accounts
        .casino
        .casino_balance(ctx.accounts.bankroll_vault.amount))
}

pub fn max_bet_amount_handler(ctx: Context<CasinoView>) -> Result<u64> {
    Ok(ctx
        .accounts
        .casino
        .max_bet_amount(ctx.accounts.bankroll_vault.amount))
}

pub fn is_casino_admin_handler(ctx: Context<CasinoView>, caller: Pubkey) -> Result<bool> {
    Ok(ctx.accounts.casino.is_admin(&caller))
}
