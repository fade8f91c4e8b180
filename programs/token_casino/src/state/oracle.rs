use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

use crate::access::{Administered, Component};
use crate::constants::{DRAW_DOMAIN, DRAW_ONE_SALT, DRAW_PAIR_SALTS};
use crate::math::card_from_draw;

/// Seeded draw source. Every draw is a pure function of `seed`, so anyone
/// who reads the account can predict the next result; it is not a secure
/// random number generator.
#[account]
#[derive(InitSpace)]
pub struct Oracle {
    /// Admin allowed to rotate the seed.
    pub admin: Pubkey,
    /// Current seed.
    pub seed: u64,
    /// PDA bump seed.
    pub bump: u8,
}

impl Oracle {
    pub const SEED: &'static [u8] = b"oracle";

    /// Raw, unbounded draw. Callers reduce it into their own range.
    pub fn draw_one(&self) -> u64 {
        derive(self.seed, DRAW_ONE_SALT)
    }

    /// Two raw values on separate salts, in draw order.
    pub fn draw_pair(&self) -> (u64, u64) {
        (
            derive(self.seed, DRAW_PAIR_SALTS[0]),
            derive(self.seed, DRAW_PAIR_SALTS[1]),
        )
    }

    /// The pair bounded into card ranks `0..=12`: casino card first.
    pub fn draw_cards(&self) -> CardPair {
        let (casino, player) = self.draw_pair();
        CardPair {
            casino_card: card_from_draw(casino),
            player_card: card_from_draw(player),
        }
    }
}

fn derive(seed: u64, salt: u8) -> u64 {
    let digest = hashv(&[DRAW_DOMAIN, &seed.to_le_bytes(), &[salt]]).to_bytes();
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(head)
}

impl Administered for Oracle {
    const COMPONENT: Component = Component::Oracle;

    fn admin(&self) -> Pubkey {
        self.admin
    }

    fn admin_mut(&mut self) -> &mut Pubkey {
        &mut self.admin
    }
}

/// Return value of the `draw_pair` view.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomPair {
    pub first: u64,
    pub second: u64,
}

/// Return value of the `draw_cards` view, the cards `play` settles on.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardPair {
    pub casino_card: u8,
    pub player_card: u8,
}
