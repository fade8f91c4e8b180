use anchor_lang::prelude::*;

use crate::access::{Administered, Component};
use crate::accounting::{self, Funding};
use crate::constants::{DEFAULT_MAX_BET, DEFAULT_PAYOUT_MULTIPLIER};
use crate::errors::CasinoError;
use crate::math;

/// Portion of the bankroll kept out of reach of new bets.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum SafetyMargin {
    /// A fixed number of tokens is always held back.
    Reserve { amount: u64 },
    /// `bankroll / divisor` is held back.
    Fraction { divisor: u64 },
}

impl SafetyMargin {
    pub fn is_valid(&self) -> bool {
        match self {
            SafetyMargin::Reserve { .. } => true,
            SafetyMargin::Fraction { divisor } => *divisor > 0,
        }
    }
}

#[account]
#[derive(InitSpace)]
pub struct Casino {
    /// Admin who funds and sweeps the bankroll.
    pub admin: Pubkey,
    /// Betting token mint accepted for bets.
    pub casino_token_mint: Pubkey,
    /// PDA-owned betting token account holding the bankroll.
    pub bankroll_vault: Pubkey,
    /// Oracle account the cards are drawn from.
    pub oracle: Pubkey,
    /// Ceiling on a single bet.
    pub max_bet: u64,
    /// A win pays `payout_multiplier * bet`.
    pub payout_multiplier: u64,
    pub safety_margin: SafetyMargin,
    /// Settled bets.
    pub total_bets: u64,
    /// Cumulative stakes collected.
    pub total_wagered: u64,
    /// Cumulative payouts to winners.
    pub total_paid_out: u64,
    /// PDA bump seed.
    pub bump: u8,
}

impl Casino {
    pub const SEED: &'static [u8] = b"casino";

    /// Bankroll minus the safety margin.
    pub fn casino_balance(&self, bankroll: u64) -> u64 {
        math::available_balance(bankroll, self.safety_margin)
    }

    pub fn max_bet_amount(&self, bankroll: u64) -> u64 {
        math::max_bet_amount(
            self.casino_balance(bankroll),
            self.max_bet,
            self.payout_multiplier,
        )
    }

    /// Validates a bet against the limits and the player's approval to the
    /// casino PDA `casino`, in that order.
    pub fn check_bet(
        &self,
        casino: &Pubkey,
        bet_amount: u64,
        bankroll: u64,
        funding: &Funding,
    ) -> Result<()> {
        require!(bet_amount > 0, CasinoError::InvalidAmount);
        require!(
            bet_amount <= self.max_bet_amount(bankroll),
            CasinoError::BetTooLarge
        );
        accounting::check_allowance(funding, casino, bet_amount)
            .map_err(|_| CasinoError::AllowanceExceeded)?;
        Ok(())
    }

    /// Fills in defaults for omitted limits and validates the result.
    pub fn resolve_limits(
        max_bet: Option<u64>,
        payout_multiplier: Option<u64>,
        safety_margin: SafetyMargin,
    ) -> Result<(u64, u64)> {
        let max_bet = max_bet.unwrap_or(DEFAULT_MAX_BET);
        let payout_multiplier = payout_multiplier.unwrap_or(DEFAULT_PAYOUT_MULTIPLIER);
        require!(max_bet > 0, CasinoError::InvalidCasinoConfig);
        require!(payout_multiplier >= 2, CasinoError::InvalidCasinoConfig);
        require!(safety_margin.is_valid(), CasinoError::InvalidCasinoConfig);
        Ok((max_bet, payout_multiplier))
    }
}

impl Administered for Casino {
    const COMPONENT: Component = Component::Casino;

    fn admin(&self) -> Pubkey {
        self.admin
    }

    fn admin_mut(&mut self) -> &mut Pubkey {
        &mut self.admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn casino(safety_margin: SafetyMargin) -> Casino {
        Casino {
            admin: Pubkey::new_unique(),
            casino_token_mint: Pubkey::new_unique(),
            bankroll_vault: Pubkey::new_unique(),
            oracle: Pubkey::new_unique(),
            max_bet: DEFAULT_MAX_BET,
            payout_multiplier: DEFAULT_PAYOUT_MULTIPLIER,
            safety_margin,
            total_bets: 0,
            total_wagered: 0,
            total_paid_out: 0,
            bump: 255,
        }
    }

    #[test]
    fn test_casino_balance_excludes_safety_amount() {
        let casino = casino(SafetyMargin::Reserve { amount: 50 });
        assert_eq!(casino.casino_balance(200), 150);
        assert_eq!(casino.casino_balance(0), 0);
    }

    fn approved(casino: Pubkey, balance: u64, delegated_amount: u64) -> Funding {
        Funding {
            balance,
            delegate: Some(casino),
            delegated_amount,
        }
    }

    #[test]
    fn test_check_bet_accepts_funded_bet() {
        let house = casino(SafetyMargin::Reserve { amount: 50 });
        let key = Pubkey::new_unique();
        assert!(house.check_bet(&key, 10, 200, &approved(key, 200, 100)).is_ok());
        assert!(house.check_bet(&key, 100, 200, &approved(key, 200, 100)).is_ok());
    }

    #[test]
    fn test_check_bet_rejects_zero() {
        let house = casino(SafetyMargin::Reserve { amount: 50 });
        let key = Pubkey::new_unique();
        assert_eq!(
            house.check_bet(&key, 0, 200, &approved(key, 200, 100)).unwrap_err(),
            CasinoError::InvalidAmount.into()
        );
    }

    #[test]
    fn test_check_bet_over_ceiling() {
        let house = casino(SafetyMargin::Reserve { amount: 50 });
        let key = Pubkey::new_unique();
        assert_eq!(house.max_bet_amount(200), 100);
        assert_eq!(
            house.check_bet(&key, 101, 200, &approved(key, 500, 500)).unwrap_err(),
            CasinoError::BetTooLarge.into()
        );
    }

    #[test]
    fn test_check_bet_over_bankroll_cap() {
        // bankroll drained to 60: only 10 remain above the reserve
        let house = casino(SafetyMargin::Reserve { amount: 50 });
        let key = Pubkey::new_unique();
        assert_eq!(house.max_bet_amount(60), 10);
        for bankroll in [60, 40] {
            assert_eq!(
                house.check_bet(&key, 20, bankroll, &approved(key, 200, 100)).unwrap_err(),
                CasinoError::BetTooLarge.into()
            );
        }
    }

    #[test]
    fn test_check_bet_limits_before_allowance() {
        let house = casino(SafetyMargin::Reserve { amount: 50 });
        let key = Pubkey::new_unique();
        let unfunded = Funding {
            balance: 0,
            delegate: None,
            delegated_amount: 0,
        };
        assert_eq!(
            house.check_bet(&key, 0, 200, &unfunded).unwrap_err(),
            CasinoError::InvalidAmount.into()
        );
        assert_eq!(
            house.check_bet(&key, 101, 200, &unfunded).unwrap_err(),
            CasinoError::BetTooLarge.into()
        );
        assert_eq!(
            house.check_bet(&key, 10, 200, &unfunded).unwrap_err(),
            CasinoError::AllowanceExceeded.into()
        );
    }

    #[test]
    fn test_check_bet_low_delegation_or_balance() {
        let house = casino(SafetyMargin::Reserve { amount: 50 });
        let key = Pubkey::new_unique();
        assert_eq!(
            house.check_bet(&key, 10, 200, &approved(key, 200, 9)).unwrap_err(),
            CasinoError::AllowanceExceeded.into()
        );
        assert_eq!(
            house.check_bet(&key, 10, 200, &approved(key, 5, 100)).unwrap_err(),
            CasinoError::AllowanceExceeded.into()
        );
        assert_eq!(
            house
                .check_bet(&key, 10, 200, &approved(Pubkey::new_unique(), 200, 100))
                .unwrap_err(),
            CasinoError::AllowanceExceeded.into()
        );
    }

    #[test]
    fn test_resolve_limits_defaults() {
        let margin = SafetyMargin::Reserve { amount: 50 };
        assert_eq!(
            Casino::resolve_limits(None, None, margin).unwrap(),
            (DEFAULT_MAX_BET, DEFAULT_PAYOUT_MULTIPLIER)
        );
        assert_eq!(
            Casino::resolve_limits(Some(250), Some(3), margin).unwrap(),
            (250, 3)
        );
    }

    #[test]
    fn test_resolve_limits_rejects_bad_config() {
        let margin = SafetyMargin::Reserve { amount: 50 };
        for (max_bet, multiplier, margin) in [
            (Some(0), None, margin),
            (None, Some(1), margin),
            (None, None, SafetyMargin::Fraction { divisor: 0 }),
        ] {
            assert_eq!(
                Casino::resolve_limits(max_bet, multiplier, margin).unwrap_err(),
                CasinoError::InvalidCasinoConfig.into()
            );
        }
    }

    #[test]
    fn test_max_bet_with_fraction_margin() {
        let casino = casino(SafetyMargin::Fraction { divisor: 2 });
        assert_eq!(casino.casino_balance(200), 100);
        assert_eq!(casino.max_bet_amount(200), 100);
        assert_eq!(casino.max_bet_amount(40), 20);
        assert_eq!(casino.max_bet_amount(0), 0);
    }

    #[test]
    fn test_winning_payout_is_always_covered() {
        for margin in [
            SafetyMargin::Reserve { amount: 50 },
            SafetyMargin::Fraction { divisor: 2 },
            SafetyMargin::Reserve { amount: 0 },
        ] {
            let mut house = casino(margin);
            for multiplier in [2u64, 3, 5] {
                house.payout_multiplier = multiplier;
                for bankroll in [0u64, 1, 39, 60, 150, 200, 10_000] {
                    let bet = house.max_bet_amount(bankroll);
                    assert!(bet * multiplier <= bankroll + bet);
                }
            }
        }
    }

    #[test]
    fn test_safety_margin_validity() {
        assert!(SafetyMargin::Reserve { amount: 0 }.is_valid());
        assert!(SafetyMargin::Fraction { divisor: 1 }.is_valid());
        assert!(!SafetyMargin::Fraction { divisor: 0 }.is_valid());
    }

    #[test]
    fn test_casino_size() {
        let bytes = casino(SafetyMargin::Fraction { divisor: 2 })
            .try_to_vec()
            .unwrap();
        assert_eq!(bytes.len(), Casino::INIT_SPACE);
    }
}
