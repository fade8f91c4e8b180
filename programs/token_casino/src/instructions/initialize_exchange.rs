use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{CASINO_TOKEN_DECIMALS, CASINO_TOKEN_MINT_SEED, USDC_DECIMALS};
use crate::errors::CasinoError;
use crate::state::{ConversionFactor, Exchange};

#[derive(Accounts)]
pub struct InitializeExchange<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + Exchange::INIT_SPACE,
        seeds = [Exchange::SEED],
        bump,
    )]
    pub exchange: Account<'info, Exchange>,

    /// Betting token mint, indivisible, minted only by the exchange PDA.
    #[account(
        init,
        payer = admin,
        seeds = [CASINO_TOKEN_MINT_SEED],
        bump,
        mint::decimals = CASINO_TOKEN_DECIMALS,
        mint::authority = exchange,
    )]
    pub casino_token_mint: Account<'info, Mint>,

    /// Reserve vault owned by the exchange PDA.
    #[account(
        init,
        payer = admin,
        associated_token::mint = usdc_mint,
        associated_token::authority = exchange,
    )]
    pub reserve_vault: Account<'info, TokenAccount>,

    /// USDC mint (devnet or mainnet).
    #[account(
        constraint = usdc_mint.decimals == USDC_DECIMALS @ CasinoError::InvalidReserveMint,
    )]
    pub usdc_mint: Account<'info, Mint>,

    /// Becomes the exchange admin.
    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

pub fn handler(
    ctx: Context<InitializeExchange>,
    numerator: u64,
    denominator: u64,
    max_mint_usdc: u64,
) -> Result<()> {
    let conversion_factor = ConversionFactor {
        numerator,
        denominator,
    };
    require!(
        conversion_factor.is_valid(),
        CasinoError::InvalidConversionFactor
    );

    let exchange = &mut ctx.accounts.exchange;
    exchange.admin = ctx.accounts.admin.key();
    exchange.usdc_mint = ctx.accounts.usdc_mint.key();
    exchange.casino_token_mint = ctx.accounts.casino_token_mint.key();
    exchange.reserve_vault = ctx.accounts.reserve_vault.key();
    exchange.conversion_factor = conversion_factor;
    exchange.max_mint_usdc = max_mint_usdc;
    exchange.bump = ctx.bumps.exchange;
    exchange.mint_bump = ctx.bumps.casino_token_mint;

    msg!(
        "Exchange initialized at {}/{} tokens per USDC",
        numerator,
        denominator
    );

    Ok(())
}
