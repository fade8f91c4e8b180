use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount, Transfer};

use crate::constants::CASINO_TOKEN_MINT_SEED;
use crate::events::BurnEvent;
use crate::state::Exchange;

#[derive(Accounts)]
pub struct BurnTokens<'info> {
    #[account(
        seeds = [Exchange::SEED],
        bump = exchange.bump,
    )]
    pub exchange: Account<'info, Exchange>,

    #[account(
        mut,
        seeds = [CASINO_TOKEN_MINT_SEED],
        bump = exchange.mint_bump,
        address = exchange.casino_token_mint,
    )]
    pub casino_token_mint: Account<'info, Mint>,

    #[account(
        mut,
        address = exchange.reserve_vault,
    )]
    pub reserve_vault: Account<'info, TokenAccount>,

    /// Holder's betting token account, debited by the burn.
    #[account(
        mut,
        constraint = holder_token_account.owner == holder.key(),
        constraint = holder_token_account.mint == exchange.casino_token_mint,
    )]
    pub holder_token_account: Account<'info, TokenAccount>,

    /// Holder's USDC account that receives the reserve.
    #[account(
        mut,
        constraint = holder_usdc_account.owner == holder.key(),
        constraint = holder_usdc_account.mint == exchange.usdc_mint,
    )]
    pub holder_usdc_account: Account<'info, TokenAccount>,

    pub holder: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<BurnTokens>, casino_token_count: u64) -> Result<()> {
    let exchange = &ctx.accounts.exchange;
    let usdc_amount = exchange.quote_burn(
        casino_token_count,
        ctx.accounts.holder_token_account.amount,
        ctx.accounts.reserve_vault.amount,
    )?;

    // Tokens leave circulation before the reserve is released.
    let burn_tokens = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Burn {
            mint: ctx.accounts.casino_token_mint.to_account_info(),
            from: ctx.accounts.holder_token_account.to_account_info(),
            authority: ctx.accounts.holder.to_account_info(),
        },
    );
    token::burn(burn_tokens, casino_token_count)?;

    let bump_bytes = [exchange.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[Exchange::SEED, &bump_bytes]];

    let release_usdc = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.reserve_vault.to_account_info(),
            to: ctx.accounts.holder_usdc_account.to_account_info(),
            authority: ctx.accounts.exchange.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(release_usdc, usdc_amount)?;

    msg!(
        "Burned {} casino tokens for {} USDC base units",
        casino_token_count,
        usdc_amount
    );

    emit!(BurnEvent {
        target_address: ctx.accounts.holder.key(),
        usdc_amount,
        casino_token_count,
    });

    Ok(())
}
