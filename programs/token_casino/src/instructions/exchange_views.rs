use anchor_lang::prelude::*;

use crate::access::Administered;
use crate::errors::CasinoError;
use crate::state::{ConversionFactor, Exchange};

#[derive(Accounts)]
pub struct ExchangeView<'info> {
    #[account(
        seeds = [Exchange::SEED],
        bump = exchange.bump,
    )]
    pub exchange: Account<'info, Exchange>,
}

pub fn get_conversion_factor_handler(ctx: Context<ExchangeView>) -> Result<ConversionFactor> {
    Ok(ctx.accounts.exchange.conversion_factor)
}

pub fn convert_to_usdc_handler(ctx: Context<ExchangeView>, casino_token_count: u64) -> Result<u64> {
    let usdc_amount = ctx
        .accounts
        .exchange
        .conversion_factor
        .to_usdc(casino_token_count)
        .ok_or(CasinoError::MathOverflow)?;
    Ok(usdc_amount)
}

pub fn is_exchange_admin_handler(ctx: Context<ExchangeView>, caller: Pubkey) -> Result<bool> {
    Ok(ctx.accounts.exchange.is_admin(&caller))
}
