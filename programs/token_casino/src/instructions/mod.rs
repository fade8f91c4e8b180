pub mod burn_tokens;
pub mod casino_views;
pub mod exchange_views;
pub mod fund_casino;
pub mod initialize_casino;
pub mod initialize_exchange;
pub mod initialize_oracle;
pub mod mint_tokens;
pub mod oracle_views;
pub mod play;
pub mod set_admin;
pub mod set_seed;
pub mod transfer_balance;

pub use burn_tokens::*;
pub use casino_views::*;
pub use exchange_views::*;
pub use fund_casino::*;
pub use initialize_casino::*;
pub use initialize_exchange::*;
pub use initialize_oracle::*;
pub use mint_tokens::*;
pub use oracle_views::*;
pub use play::*;
pub use set_admin::*;
pub use set_seed::*;
pub use transfer_balance::*;
