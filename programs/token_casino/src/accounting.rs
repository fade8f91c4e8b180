//! Balance and allowance checks performed before any token movement, so a
//! pull that would fail inside the token program is rejected with our own
//! error code first.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::TokenAccount;

/// Why a token account cannot fund a pull.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortfall {
    Balance,
    Allowance,
}

/// Snapshot of what a token account can fund: its balance and the owner's
/// delegate approval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Funding {
    pub balance: u64,
    pub delegate: Option<Pubkey>,
    pub delegated_amount: u64,
}

impl Funding {
    pub fn from_token_account(account: &TokenAccount) -> Self {
        let delegate = match account.delegate {
            COption::Some(key) => Some(key),
            COption::None => None,
        };
        Funding {
            balance: account.amount,
            delegate,
            delegated_amount: account.delegated_amount,
        }
    }
}

/// Checks that `spender` may pull `amount` out of the funding account.
pub fn check_allowance(
    funding: &Funding,
    spender: &Pubkey,
    amount: u64,
) -> std::result::Result<(), Shortfall> {
    if funding.delegate.as_ref() != Some(spender) || funding.delegated_amount < amount {
        return Err(Shortfall::Allowance);
    }
    if funding.balance < amount {
        return Err(Shortfall::Balance);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn funding(balance: u64, delegate: Option<Pubkey>, delegated_amount: u64) -> Funding {
        Funding {
            balance,
            delegate,
            delegated_amount,
        }
    }

    #[test]
    fn test_check_allowance_accepts_covered_pull() {
        let spender = Pubkey::new_unique();
        assert_eq!(check_allowance(&funding(100, Some(spender), 100), &spender, 100), Ok(()));
        assert_eq!(check_allowance(&funding(100, Some(spender), 50), &spender, 10), Ok(()));
    }

    #[test]
    fn test_check_allowance_without_approval() {
        let spender = Pubkey::new_unique();
        assert_eq!(
            check_allowance(&funding(100, None, 0), &spender, 10),
            Err(Shortfall::Allowance)
        );
    }

    #[test]
    fn test_check_allowance_wrong_delegate() {
        let spender = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        assert_eq!(
            check_allowance(&funding(100, Some(other), 100), &spender, 10),
            Err(Shortfall::Allowance)
        );
    }

    #[test]
    fn test_check_allowance_low_approval() {
        let spender = Pubkey::new_unique();
        assert_eq!(
            check_allowance(&funding(100, Some(spender), 9), &spender, 10),
            Err(Shortfall::Allowance)
        );
    }

    #[test]
    fn test_check_allowance_low_balance() {
        let spender = Pubkey::new_unique();
        assert_eq!(
            check_allowance(&funding(5, Some(spender), 100), &spender, 10),
            Err(Shortfall::Balance)
        );
    }
}
