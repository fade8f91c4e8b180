use anchor_lang::prelude::*;

use crate::access::Administered;
use crate::events::AdminChanged;
use crate::state::{Casino, Exchange, Oracle};

#[derive(Accounts)]
pub struct SetExchangeAdmin<'info> {
    #[account(
        mut,
        seeds = [Exchange::SEED],
        bump = exchange.bump,
    )]
    pub exchange: Account<'info, Exchange>,

    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct SetCasinoAdmin<'info> {
    #[account(
        mut,
        seeds = [Casino::SEED],
        bump = casino.bump,
    )]
    pub casino: Account<'info, Casino>,

    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct SetOracleAdmin<'info> {
    #[account(
        mut,
        seeds = [Oracle::SEED],
        bump = oracle.bump,
    )]
    pub oracle: Account<'info, Oracle>,

    pub admin: Signer<'info>,
}

pub fn set_exchange_admin_handler(ctx: Context<SetExchangeAdmin>, new_admin: Pubkey) -> Result<()> {
    hand_over(&mut *ctx.accounts.exchange, &ctx.accounts.admin.key(), new_admin)
}

pub fn set_casino_admin_handler(ctx: Context<SetCasinoAdmin>, new_admin: Pubkey) -> Result<()> {
    hand_over(&mut *ctx.accounts.casino, &ctx.accounts.admin.key(), new_admin)
}

pub fn set_oracle_admin_handler(ctx: Context<SetOracleAdmin>, new_admin: Pubkey) -> Result<()> {
    hand_over(&mut *ctx.accounts.oracle, &ctx.accounts.admin.key(), new_admin)
}

fn hand_over<T: Administered>(account: &mut T, caller: &Pubkey, new_admin: Pubkey) -> Result<()> {
    let previous_admin = account.hand_over(caller, new_admin)?;

    msg!("{:?} admin handed over to {}", T::COMPONENT, new_admin);

    emit!(AdminChanged {
        component: T::COMPONENT,
        previous_admin,
        new_admin,
    });

    Ok(())
}
