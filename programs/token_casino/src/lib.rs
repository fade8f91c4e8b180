use anchor_lang::prelude::*;

pub mod access;
pub mod accounting;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod math;
pub mod state;

use instructions::*;
use state::{CardPair, ConversionFactor, RandomPair, SafetyMargin};

declare_id!("CasnoTkn11111111111111111111111111111111111");

#[program]
pub mod token_casino {
    use super::*;

    // ----- Betting token exchange -----

    /// Create the betting token mint and the USDC reserve at a fixed
    /// `numerator / denominator` tokens per USDC.
    pub fn initialize_exchange(
        ctx: Context<InitializeExchange>,
        numerator: u64,
        denominator: u64,
        max_mint_usdc: u64,
    ) -> Result<()> {
        instructions::initialize_exchange::handler(ctx, numerator, denominator, max_mint_usdc)
    }

    /// Buy betting tokens with USDC previously approved to the exchange.
    pub fn mint_tokens(ctx: Context<MintTokens>, casino_token_count: u64) -> Result<()> {
        instructions::mint_tokens::handler(ctx, casino_token_count)
    }

    /// Sell betting tokens back for USDC from the reserve.
    pub fn burn_tokens(ctx: Context<BurnTokens>, casino_token_count: u64) -> Result<()> {
        instructions::burn_tokens::handler(ctx, casino_token_count)
    }

    /// Tokens per USDC as `(numerator, denominator)`.
    pub fn get_conversion_factor(ctx: Context<ExchangeView>) -> Result<ConversionFactor> {
        instructions::exchange_views::get_conversion_factor_handler(ctx)
    }

    /// USDC base units backing a token count, truncated.
    pub fn convert_to_usdc(ctx: Context<ExchangeView>, casino_token_count: u64) -> Result<u64> {
        instructions::exchange_views::convert_to_usdc_handler(ctx, casino_token_count)
    }

    /// Whether `caller` administers the exchange.
    pub fn is_exchange_admin(ctx: Context<ExchangeView>, caller: Pubkey) -> Result<bool> {
        instructions::exchange_views::is_exchange_admin_handler(ctx, caller)
    }

    /// Hand the exchange admin role to `new_admin`.
    pub fn set_exchange_admin(ctx: Context<SetExchangeAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::set_admin::set_exchange_admin_handler(ctx, new_admin)
    }

    // ----- Draw source -----

    /// Create the draw oracle with its first seed.
    pub fn initialize_oracle(ctx: Context<InitializeOracle>, seed: u64) -> Result<()> {
        instructions::initialize_oracle::handler(ctx, seed)
    }

    /// Admin rotates the draw seed.
    pub fn set_seed(ctx: Context<SetSeed>, seed: u64) -> Result<()> {
        instructions::set_seed::handler(ctx, seed)
    }

    /// Raw unbounded draw for the current seed.
    pub fn draw_one(ctx: Context<OracleView>) -> Result<u64> {
        instructions::oracle_views::draw_one_handler(ctx)
    }

    /// Two raw unbounded draws for the current seed.
    pub fn draw_pair(ctx: Context<OracleView>) -> Result<RandomPair> {
        instructions::oracle_views::draw_pair_handler(ctx)
    }

    /// The current pair as card ranks, casino card first, exactly as `play`
    /// settles it.
    pub fn draw_cards(ctx: Context<OracleView>) -> Result<CardPair> {
        instructions::oracle_views::draw_cards_handler(ctx)
    }

    /// Whether `caller` administers the oracle.
    pub fn is_oracle_admin(ctx: Context<OracleView>, caller: Pubkey) -> Result<bool> {
        instructions::oracle_views::is_oracle_admin_handler(ctx, caller)
    }

    /// Hand the oracle admin role to `new_admin`.
    pub fn set_oracle_admin(ctx: Context<SetOracleAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::set_admin::set_oracle_admin_handler(ctx, new_admin)
    }

    // ----- Casino -----

    /// Create the casino and its bankroll vault. Omitted limits fall back
    /// to a 100 token ceiling and a 2x payout.
    pub fn initialize_casino(
        ctx: Context<InitializeCasino>,
        max_bet: Option<u64>,
        payout_multiplier: Option<u64>,
        safety_margin: SafetyMargin,
    ) -> Result<()> {
        instructions::initialize_casino::handler(ctx, max_bet, payout_multiplier, safety_margin)
    }

    /// Admin moves betting tokens into the bankroll.
    pub fn fund_casino(ctx: Context<FundCasino>, amount: u64) -> Result<()> {
        instructions::fund_casino::handler(ctx, amount)
    }

    /// Place a high card bet. The stake must be approved to the casino PDA.
    pub fn play(ctx: Context<Play>, bet_amount: u64) -> Result<()> {
        instructions::play::handler(ctx, bet_amount)
    }

    /// Admin sweeps the whole bankroll.
    pub fn transfer_balance(ctx: Context<TransferBalance>) -> Result<()> {
        instructions::transfer_balance::handler(ctx)
    }

    /// Bankroll available for bets, safety margin excluded.
    pub fn get_casino_balance(ctx: Context<CasinoView>) -> Result<u64> {
        instructions::casino_views::get_casino_balance_handler(ctx)
    }

    /// Largest bet `play` currently accepts.
    pub fn max_bet_amount(ctx: Context<CasinoView>) -> Result<u64> {
        instructions::casino_views::max_bet_amount_handler(ctx)
    }

    /// Whether `caller` administers the casino.
    pub fn is_casino_admin(ctx: Context<CasinoView>, caller: Pubkey) -> Result<bool> {
        instructions::casino_views::is_casino_admin_handler(ctx, caller)
    }

    /// Hand the casino admin role to `new_admin`.
    pub fn set_casino_admin(ctx: Context<SetCasinoAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::set_admin::set_casino_admin_handler(ctx, new_admin)
    }
}
