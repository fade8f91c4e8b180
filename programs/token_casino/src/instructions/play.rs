use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::accounting::Funding;
use crate::errors::CasinoError;
use crate::events::PlayEvent;
use crate::math;
use crate::state::{CardPair, Casino, Oracle};

#[derive(Accounts)]
pub struct Play<'info> {
    #[account(
        mut,
        seeds = [Casino::SEED],
        bump = casino.bump,
    )]
    pub casino: Account<'info, Casino>,

    #[account(
        mut,
        address = casino.bankroll_vault,
    )]
    pub bankroll_vault: Account<'info, TokenAccount>,

    #[account(
        address = casino.oracle,
    )]
    pub oracle: Account<'info, Oracle>,

    /// Player's betting token account, approved to the casino PDA beforehand.
    /// Winnings are paid back into it.
    #[account(
        mut,
        constraint = player_token_account.owner == player.key(),
        constraint = player_token_account.mint == casino.casino_token_mint,
    )]
    pub player_token_account: Account<'info, TokenAccount>,

    pub player: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Play>, bet_amount: u64) -> Result<()> {
    let casino = &ctx.accounts.casino;
    casino.check_bet(
        &casino.key(),
        bet_amount,
        ctx.accounts.bankroll_vault.amount,
        &Funding::from_token_account(&ctx.accounts.player_token_account),
    )?;

    let bump_bytes = [casino.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[Casino::SEED, &bump_bytes]];

    // The stake is escrowed before the cards are drawn, win or lose.
    let collect_bet = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.player_token_account.to_account_info(),
            to: ctx.accounts.bankroll_vault.to_account_info(),
            authority: ctx.accounts.casino.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(collect_bet, bet_amount)?;

    let CardPair {
        casino_card,
        player_card,
    } = ctx.accounts.oracle.draw_cards();

    let outcome = math::settle(bet_amount, casino_card, player_card, casino.payout_multiplier)
        .ok_or(CasinoError::MathOverflow)?;

    if outcome.has_player_won {
        let pay_winner = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.bankroll_vault.to_account_info(),
                to: ctx.accounts.player_token_account.to_account_info(),
                authority: ctx.accounts.casino.to_account_info(),
            },
            signer_seeds,
        );
        token::transfer(pay_winner, outcome.payout)?;
    }

    let casino = &mut ctx.accounts.casino;
    casino.total_bets = casino
        .total_bets
        .checked_add(1)
        .ok_or(CasinoError::MathOverflow)?;
    casino.total_wagered = casino
        .total_wagered
        .checked_add(bet_amount)
        .ok_or(CasinoError::MathOverflow)?;
    casino.total_paid_out = casino
        .total_paid_out
        .checked_add(outcome.payout)
        .ok_or(CasinoError::MathOverflow)?;

    msg!(
        "Bet {} settled: casino {} vs player {}, payout {}",
        bet_amount,
        casino_card,
        player_card,
        outcome.payout
    );

    emit!(PlayEvent {
        player: ctx.accounts.player.key(),
        bet: bet_amount,
        payout: outcome.payout,
        has_player_won: outcome.has_player_won,
        casino_card,
        player_card,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
