//! Accounting core for a mined token and its vesting vault.
//!
//! [`MinedToken`] keeps the ledger and releases a fixed amount to two
//! recipients every period. [`Vault`] holds tokens earmarked through
//! certificates that mature after a vesting duration. Both components take
//! the caller and block height from a [`CallContext`] and only reach other
//! contracts through the traits in [`host`].

pub mod config;
pub mod constants;
pub mod error;
pub mod host;
pub mod instructions;
pub mod state;
pub mod token;
pub mod utils;
pub mod vault;

pub use config::{TokenConfig, VaultConfig};
pub use error::EmissionError;
pub use host::{CallContext, CallResult, MiningGovernance, TokenLedger};
pub use primitive_types::U256;
pub use state::{Record, VaultCertificate};
pub use token::MinedToken;
pub use vault::Vault;
