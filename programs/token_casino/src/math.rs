//! Integer arithmetic for the exchange and the high card game. All of it is
//! truncating and checked; `None` means the result does not fit in a `u64`.

use crate::constants::{CARD_RANKS, USDC_UNIT};
use crate::state::SafetyMargin;

/// USDC base units backing `casino_token_count` tokens at
/// `numerator / denominator` tokens per USDC.
pub fn usdc_for_tokens(casino_token_count: u64, numerator: u64, denominator: u64) -> Option<u64> {
    if numerator == 0 {
        return None;
    }
    let usdc = (casino_token_count as u128)
        .checked_mul(USDC_UNIT as u128)?
        .checked_mul(denominator as u128)?
        / numerator as u128;
    u64::try_from(usdc).ok()
}

/// Part of the bankroll that may be put at risk by new bets.
pub fn available_balance(bankroll: u64, margin: SafetyMargin) -> u64 {
    match margin {
        SafetyMargin::Reserve { amount } => bankroll.saturating_sub(amount),
        SafetyMargin::Fraction { divisor } => match bankroll.checked_div(divisor) {
            Some(reserved) => bankroll - reserved,
            None => 0,
        },
    }
}

/// Largest bet whose winning payout the available balance still covers.
pub fn max_bet_amount(available: u64, max_bet: u64, payout_multiplier: u64) -> u64 {
    let profit_multiplier = payout_multiplier.saturating_sub(1).max(1);
    max_bet.min(available / profit_multiplier)
}

/// Maps a raw draw onto a card rank in `0..13`.
pub fn card_from_draw(value: u64) -> u8 {
    (value % CARD_RANKS) as u8
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BetOutcome {
    pub has_player_won: bool,
    pub payout: u64,
}

/// High card rule: the player wins only on a strictly higher card, a tie
/// goes to the house.
pub fn settle(bet: u64, casino_card: u8, player_card: u8, payout_multiplier: u64) -> Option<BetOutcome> {
    let has_player_won = player_card > casino_card;
    let payout = if has_player_won {
        bet.checked_mul(payout_multiplier)?
    } else {
        0
    };
    Some(BetOutcome {
        has_player_won,
        payout,
    })
}
