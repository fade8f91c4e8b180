use anchor_lang::prelude::*;

use crate::access::Administered;
use crate::state::{CardPair, Oracle, RandomPair};

#[derive(Accounts)]
pub struct OracleView<'info> {
    #[account(
        seeds = [Oracle::SEED],
        bump = oracle.bump,
    )]
    pub oracle: Account<'info, Oracle>,
}

pub fn draw_one_handler(ctx: Context<OracleView>) -> Result<u64> {
    Ok(ctx.accounts.oracle.draw_one())
}

pub fn draw_pair_handler(ctx: Context<OracleView>) -> Result<RandomPair> {
    let (first, second) = ctx.accounts.oracle.draw_pair();
    Ok(RandomPair { first, second })
}

pub fn draw_cards_handler(ctx: Context<OracleView>) -> Result<CardPair> {
    Ok(ctx.accounts.oracle.draw_cards())
}

pub fn is_oracle_admin_handler(ctx: Context<OracleView>, caller: Pubkey) -> Result<bool> {
    Ok(ctx.accounts.oracle.is_admin(&caller))
}
