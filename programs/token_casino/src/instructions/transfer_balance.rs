use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::access::Administered;
use crate::events::BalanceTransferred;
use crate::state::Casino;

#[derive(Accounts)]
pub struct TransferBalance<'info> {
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

    /// Admin's betting token account, receives the whole bankroll.
    #[account(
        mut,
        constraint = admin_token_account.owner == admin.key(),
        constraint = admin_token_account.mint == casino.casino_token_mint,
    )]
    pub admin_token_account: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<TransferBalance>) -> Result<()> {
    let casino = &ctx.accounts.casino;
    casino.require_admin(&ctx.accounts.admin.key())?;

    let amount = ctx.accounts.bankroll_vault.amount;
    if amount > 0 {
        let bump_bytes = [casino.bump];
        let signer_seeds: &[&[&[u8]]] = &[&[Casino::SEED, &bump_bytes]];

        let sweep = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.bankroll_vault.to_account_info(),
                to: ctx.accounts.admin_token_account.to_account_info(),
                authority: ctx.accounts.casino.to_account_info(),
            },
            signer_seeds,
        );
        token::transfer(sweep, amount)?;
    }

    msg!("Bankroll of {} casino tokens transferred to admin", amount);

    emit!(BalanceTransferred {
        admin: ctx.accounts.admin.key(),
        amount,
    });

    Ok(())
}
