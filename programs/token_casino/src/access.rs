//! Single-admin access control shared by the exchange, casino and oracle
//! accounts.

use anchor_lang::prelude::*;

use crate::errors::CasinoError;

/// Component whose admin role changed hands.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Component {
    Exchange,
    Casino,
    Oracle,
}

/// An account guarded by exactly one admin key.
pub trait Administered {
    const COMPONENT: Component;

    fn admin(&self) -> Pubkey;

    fn admin_mut(&mut self) -> &mut Pubkey;

    fn is_admin(&self, caller: &Pubkey) -> bool {
        self.admin() == *caller
    }

    fn require_admin(&self, caller: &Pubkey) -> Result<()> {
        require!(self.is_admin(caller), CasinoError::Unauthorized);
        Ok(())
    }

    /// Replaces the admin and returns the previous one. The caller loses its
    /// rights as soon as this returns.
    fn hand_over(&mut self, caller: &Pubkey, new_admin: Pubkey) -> Result<Pubkey> {
        self.require_admin(caller)?;
        require!(new_admin != Pubkey::default(), CasinoError::InvalidAddress);

        let previous = self.admin();
        *self.admin_mut() = new_admin;
        Ok(previous)
    }
}
