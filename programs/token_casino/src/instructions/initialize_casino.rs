use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::state::{Casino, Exchange, Oracle, SafetyMargin};

#[derive(Accounts)]
pub struct InitializeCasino<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + Casino::INIT_SPACE,
        seeds = [Casino::SEED],
        bump,
    )]
    pub casino: Account<'info, Casino>,

    #[account(
        seeds = [Exchange::SEED],
        bump = exchange.bump,
    )]
    pub exchange: Account<'info, Exchange>,

    #[account(
        address = exchange.casino_token_mint,
    )]
    pub casino_token_mint: Account<'info, Mint>,

    /// Bankroll vault owned by the casino PDA.
    #[account(
        init,
        payer = admin,
        associated_token::mint = casino_token_mint,
        associated_token::authority = casino,
    )]
    pub bankroll_vault: Account<'info, TokenAccount>,

    #[account(
        seeds = [Oracle::SEED],
        bump = oracle.bump,
    )]
    pub oracle: Account<'info, Oracle>,

    /// Becomes the casino admin.
    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

pub fn handler(
    ctx: Context<InitializeCasino>,
    max_bet: Option<u64>,
    payout_multiplier: Option<u64>,
    safety_margin: SafetyMargin,
) -> Result<()> {
    let (max_bet, payout_multiplier) =
        Casino::resolve_limits(max_bet, payout_multiplier, safety_margin)?;

    let casino = &mut ctx.accounts.casino;
    casino.admin = ctx.accounts.admin.key();
    casino.casino_token_mint = ctx.accounts.casino_token_mint.key();
    casino.bankroll_vault = ctx.accounts.bankroll_vault.key();
    casino.oracle = ctx.accounts.oracle.key();
    casino.max_bet = max_bet;
    casino.payout_multiplier = payout_multiplier;
    casino.safety_margin = safety_margin;
    casino.total_bets = 0;
    casino.total_wagered = 0;
    casino.total_paid_out = 0;
    casino.bump = ctx.bumps.casino;

    msg!(
        "Casino initialized: max bet {}, payout {}x",
        max_bet,
        payout_multiplier
    );

    Ok(())
}
