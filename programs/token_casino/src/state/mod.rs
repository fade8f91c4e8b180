pub mod casino;
pub mod exchange;
pub mod oracle;

pub use casino::*;
pub use exchange::*;
pub use oracle::*;
