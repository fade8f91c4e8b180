use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::access::Administered;
use crate::errors::CasinoError;
use crate::events::CasinoFunded;
use crate::state::Casino;

#[derive(Accounts)]
pub struct FundCasino<'info> {
    #[account(
        seeds = [Casino::SEED],
        bump = casino.bump,
    )]
    pub casino: Account<'info, Casino>,

    #[account(
        mut,
        address = casino.bankroll_vault,
    )]
    pub bankroll_vault: Account<'info, TokenAccount>,

    /// Admin's betting token account.
    #[account(
        mut,
        constraint = admin_token_account.owner == admin.key(),
        constraint = admin_token_account.mint == casino.casino_token_mint,
    )]
    pub admin_token_account: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<FundCasino>, amount: u64) -> Result<()> {
    ctx.accounts.casino.require_admin(&ctx.accounts.admin.key())?;
    require!(amount > 0, CasinoError::InvalidAmount);
    require!(
        ctx.accounts.admin_token_account.amount >= amount,
        CasinoError::InsufficientBalance
    );

    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.admin_token_account.to_account_info(),
            to: ctx.accounts.bankroll_vault.to_account_info(),
            authority: ctx.accounts.admin.to_account_info(),
        },
    );
    token::transfer(transfer_ctx, amount)?;

    let bankroll = ctx
        .accounts
        .bankroll_vault
        .amount
        .checked_add(amount)
        .ok_or(CasinoError::MathOverflow)?;

    emit!(CasinoFunded {
        admin: ctx.accounts.admin.key(),
        amount,
        bankroll,
    });

    Ok(())
}
