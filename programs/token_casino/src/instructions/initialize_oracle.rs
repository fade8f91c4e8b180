use anchor_lang::prelude::*;

use crate::state::Oracle;

#[derive(Accounts)]
pub struct InitializeOracle<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + Oracle::INIT_SPACE,
        seeds = [Oracle::SEED],
        bump,
    )]
    pub oracle: Account<'info, Oracle>,

    /// Becomes the oracle admin.
    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeOracle>, seed: u64) -> Result<()> {
    let oracle = &mut ctx.accounts.oracle;
    oracle.admin = ctx.accounts.admin.key();
    oracle.seed = seed;
    oracle.bump = ctx.bumps.oracle;

    msg!("Oracle initialized");

    Ok(())
}
