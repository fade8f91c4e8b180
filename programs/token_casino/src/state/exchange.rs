use anchor_lang::prelude::*;

use crate::access::{Administered, Component};
use crate::accounting::{self, Funding, Shortfall};
use crate::errors::CasinoError;
use crate::math;

/// Tokens per USDC as an exact rational: `numerator / denominator`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct ConversionFactor {
    pub numerator: u64,
    pub denominator: u64,
}

impl ConversionFactor {
    pub fn is_valid(&self) -> bool {
        self.numerator > 0 && self.denominator > 0
    }

    /// USDC base units worth `casino_token_count` tokens, truncated.
    pub fn to_usdc(&self, casino_token_count: u64) -> Option<u64> {
        math::usdc_for_tokens(casino_token_count, self.numerator, self.denominator)
    }
}

#[account]
#[derive(InitSpace)]
pub struct Exchange {
    /// Admin of the exchange configuration.
    pub admin: Pubkey,
    /// Stable reserve asset mint (6 decimals).
    pub usdc_mint: Pubkey,
    /// Betting token mint, minted and burned only by this PDA.
    pub casino_token_mint: Pubkey,
    /// PDA-owned USDC account holding the reserve.
    pub reserve_vault: Pubkey,
    /// Fixed at initialization.
    pub conversion_factor: ConversionFactor,
    /// Per-request USDC cap on minting, 0 disables it.
    pub max_mint_usdc: u64,
    /// PDA bump seed.
    pub bump: u8,
    /// Betting token mint PDA bump seed.
    pub mint_bump: u8,
}

impl Exchange {
    pub const SEED: &'static [u8] = b"exchange";

    pub fn exceeds_mint_cap(&self, usdc_amount: u64) -> bool {
        self.max_mint_usdc != 0 && usdc_amount > self.max_mint_usdc
    }

    /// USDC a buyer pays for `casino_token_count` tokens.
    pub fn quote_mint(&self, casino_token_count: u64) -> Result<u64> {
        require!(casino_token_count > 0, CasinoError::InvalidAmount);
        let usdc_amount = self
            .conversion_factor
            .to_usdc(casino_token_count)
            .ok_or(CasinoError::MathOverflow)?;
        require!(usdc_amount > 0, CasinoError::InvalidAmount);
        require!(
            !self.exceeds_mint_cap(usdc_amount),
            CasinoError::MintLimitExceeded
        );
        Ok(usdc_amount)
    }

    /// The buyer's USDC account must be approved to the exchange PDA for at
    /// least `usdc_amount` and hold it.
    pub fn check_mint_funding(exchange: &Pubkey, funding: &Funding, usdc_amount: u64) -> Result<()> {
        accounting::check_allowance(funding, exchange, usdc_amount).map_err(|shortfall| {
            match shortfall {
                Shortfall::Allowance => CasinoError::InsufficientAllowance,
                Shortfall::Balance => CasinoError::InsufficientBalance,
            }
        })?;
        Ok(())
    }

    /// USDC released for burning `casino_token_count` tokens out of a
    /// holder balance of `holder_balance`.
    pub fn quote_burn(&self, casino_token_count: u64, holder_balance: u64, reserve: u64) -> Result<u64> {
        require!(casino_token_count > 0, CasinoError::InvalidAmount);
        require!(
            holder_balance >= casino_token_count,
            CasinoError::InsufficientBalance
        );
        let usdc_amount = self
            .conversion_factor
            .to_usdc(casino_token_count)
            .ok_or(CasinoError::MathOverflow)?;
        require!(usdc_amount > 0, CasinoError::InvalidAmount);
        require!(reserve >= usdc_amount, CasinoError::InsufficientReserve);
        Ok(usdc_amount)
    }
}

impl Administered for Exchange {
    const COMPONENT: Component = Component::Exchange;

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

    fn exchange_at(numerator: u64, denominator: u64, max_mint_usdc: u64) -> Exchange {
        Exchange {
            admin: Pubkey::new_unique(),
            usdc_mint: Pubkey::new_unique(),
            casino_token_mint: Pubkey::new_unique(),
            reserve_vault: Pubkey::new_unique(),
            conversion_factor: ConversionFactor {
                numerator,
                denominator,
            },
            max_mint_usdc,
            bump: 254,
            mint_bump: 253,
        }
    }

    fn exchange(max_mint_usdc: u64) -> Exchange {
        exchange_at(2, 1, max_mint_usdc)
    }

    #[test]
    fn test_conversion_factor_validity() {
        assert!(ConversionFactor { numerator: 2, denominator: 1 }.is_valid());
        assert!(!ConversionFactor { numerator: 0, denominator: 1 }.is_valid());
        assert!(!ConversionFactor { numerator: 2, denominator: 0 }.is_valid());
    }

    #[test]
    fn test_mint_ten_tokens_at_two_per_usdc() {
        let exchange = exchange(0);
        assert_eq!(exchange.conversion_factor.to_usdc(10), Some(5_000_000));
    }

    #[test]
    fn test_mint_cap() {
        let capped = exchange(100_000_000);
        assert!(!capped.exceeds_mint_cap(100_000_000));
        assert!(capped.exceeds_mint_cap(100_000_001));

        let uncapped = exchange(0);
        assert!(!uncapped.exceeds_mint_cap(u64::MAX));
    }

    #[test]
    fn test_quote_mint() {
        let exchange = exchange(0);
        assert_eq!(exchange.quote_mint(10).unwrap(), 5_000_000);
        assert_eq!(
            exchange.quote_mint(0).unwrap_err(),
            CasinoError::InvalidAmount.into()
        );
    }

    #[test]
    fn test_quote_mint_rejects_free_tokens() {
        let exchange = exchange_at(10_000_000, 1, 0);
        assert_eq!(
            exchange.quote_mint(1).unwrap_err(),
            CasinoError::InvalidAmount.into()
        );
        assert_eq!(exchange.quote_mint(10).unwrap(), 1);
    }

    #[test]
    fn test_quote_mint_above_cap() {
        let exchange = exchange(100_000_000);
        assert_eq!(exchange.quote_mint(200).unwrap(), 100_000_000);
        assert_eq!(
            exchange.quote_mint(400).unwrap_err(),
            CasinoError::MintLimitExceeded.into()
        );
    }

    #[test]
    fn test_mint_funding_errors() {
        let exchange_key = Pubkey::new_unique();
        let approved = Funding {
            balance: 100_000_000,
            delegate: Some(exchange_key),
            delegated_amount: 100_000_000,
        };
        assert!(Exchange::check_mint_funding(&exchange_key, &approved, 5_000_000).is_ok());

        let unapproved = Funding {
            delegate: None,
            delegated_amount: 0,
            ..approved
        };
        assert_eq!(
            Exchange::check_mint_funding(&exchange_key, &unapproved, 5_000_000).unwrap_err(),
            CasinoError::InsufficientAllowance.into()
        );

        let broke = Funding {
            balance: 1_000_000,
            ..approved
        };
        assert_eq!(
            Exchange::check_mint_funding(&exchange_key, &broke, 5_000_000).unwrap_err(),
            CasinoError::InsufficientBalance.into()
        );
    }

    #[test]
    fn test_quote_burn() {
        let exchange = exchange(0);
        assert_eq!(exchange.quote_burn(100, 200, 100_000_000).unwrap(), 50_000_000);
        assert_eq!(
            exchange.quote_burn(0, 200, 100_000_000).unwrap_err(),
            CasinoError::InvalidAmount.into()
        );
        assert_eq!(
            exchange.quote_burn(10, 1, 100_000_000).unwrap_err(),
            CasinoError::InsufficientBalance.into()
        );
        assert_eq!(
            exchange.quote_burn(100, 200, 49_999_999).unwrap_err(),
            CasinoError::InsufficientReserve.into()
        );
        assert_eq!(
            exchange_at(10_000_000, 1, 0).quote_burn(1, 5, 100).unwrap_err(),
            CasinoError::InvalidAmount.into()
        );
    }

    #[test]
    fn test_exchange_size() {
        let bytes = exchange(0).try_to_vec().unwrap();
        assert_eq!(bytes.len(), Exchange::INIT_SPACE);
    }
}
