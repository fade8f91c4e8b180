/// Decimals of the stable reserve asset (USDC).
pub const USDC_DECIMALS: u8 = 6;
/// Base units per whole USDC.
pub const USDC_UNIT: u64 = 1_000_000;
/// The betting token is indivisible.
pub const CASINO_TOKEN_DECIMALS: u8 = 0;

/// PDA seed of the betting token mint.
pub const CASINO_TOKEN_MINT_SEED: &[u8] = b"casino_token";

/// Card ranks in the high card game (2 through Ace, no suits).
pub const CARD_RANKS: u64 = 13;

/// Domain separator mixed into every draw.
pub const DRAW_DOMAIN: &[u8] = b"casino-draw";
/// Salt of a single draw.
pub const DRAW_ONE_SALT: u8 = 0;
/// Salts of the first and second value of a pair.
pub const DRAW_PAIR_SALTS: [u8; 2] = [1, 2];

/// Default per-bet ceiling in betting tokens.
pub const DEFAULT_MAX_BET: u64 = 100;
/// A winning bet returns the stake plus an equal profit.
pub const DEFAULT_PAYOUT_MULTIPLIER: u64 = 2;
