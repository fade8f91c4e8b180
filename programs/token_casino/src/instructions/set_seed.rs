use anchor_lang::prelude::*;

use crate::access::Administered;
use crate::events::SeedUpdated;
use crate::state::Oracle;

#[derive(Accounts)]
pub struct SetSeed<'info> {
    #[account(
        mut,
        seeds = [Oracle::SEED],
        bump = oracle.bump,
    )]
    pub oracle: Account<'info, Oracle>,

    pub admin: Signer<'info>,
}

pub fn handler(ctx: Context<SetSeed>, seed: u64) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let oracle = &mut ctx.accounts.oracle;
    oracle.require_admin(&admin)?;
    oracle.seed = seed;

    msg!("Oracle seed rotated");

    emit!(SeedUpdated {
        admin,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
