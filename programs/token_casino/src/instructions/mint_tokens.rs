use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount, Transfer};

use crate::accounting::Funding;
use crate::constants::CASINO_TOKEN_MINT_SEED;
use crate::events::MintEvent;
use crate::state::Exchange;

#[derive(Accounts)]
pub struct MintTokens<'info> {
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

    /// Buyer's USDC account, approved to the exchange PDA beforehand.
    #[account(
        mut,
        constraint = buyer_usdc_account.owner == buyer.key(),
        constraint = buyer_usdc_account.mint == exchange.usdc_mint,
    )]
    pub buyer_usdc_account: Account<'info, TokenAccount>,

    /// Buyer's betting token account that receives the minted tokens.
    #[account(
        mut,
        constraint = buyer_token_account.owner == buyer.key(),
        constraint = buyer_token_account.mint == exchange.casino_token_mint,
    )]
    pub buyer_token_account: Account<'info, TokenAccount>,

    pub buyer: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<MintTokens>, casino_token_count: u64) -> Result<()> {
    let exchange = &ctx.accounts.exchange;
    let usdc_amount = exchange.quote_mint(casino_token_count)?;
    Exchange::check_mint_funding(
        &exchange.key(),
        &Funding::from_token_account(&ctx.accounts.buyer_usdc_account),
        usdc_amount,
    )?;

    let bump_bytes = [exchange.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[Exchange::SEED, &bump_bytes]];

    // Pull USDC into the reserve before any token exists for it.
    let pull_usdc = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.buyer_usdc_account.to_account_info(),
            to: ctx.accounts.reserve_vault.to_account_info(),
            authority: ctx.accounts.exchange.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(pull_usdc, usdc_amount)?;

    let mint_tokens = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        MintTo {
            mint: ctx.accounts.casino_token_mint.to_account_info(),
            to: ctx.accounts.buyer_token_account.to_account_info(),
            authority: ctx.accounts.exchange.to_account_info(),
        },
        signer_seeds,
    );
    token::mint_to(mint_tokens, casino_token_count)?;

    msg!(
        "Minted {} casino tokens for {} USDC base units",
        casino_token_count,
        usdc_amount
    );

    emit!(MintEvent {
        target_address: ctx.accounts.buyer.key(),
        usdc_amount,
        casino_token_count,
    });

    Ok(())
}
