//! Protocol-wide constants.

/// Max certificates a single wallet may hold in the vault.
pub const MAX_CERTIFICATES: usize = 10;

/// Fixed-point offset used by the revocation haircut.
pub const PERCENTAGE_OFFSET: u64 = 100;

/// Each distribution schedule needs at least one period plus the inflation tail.
pub const MIN_SCHEDULE_LENGTH: usize = 2;

/// Target seconds between blocks.
pub const BLOCK_TIME_SECONDS: u64 = 16;

pub const BLOCKS_PER_YEAR: u64 = 60 * 60 * 24 * 365 / BLOCK_TIME_SECONDS;

pub const TOKEN_NAME: &str = "Opdex";

pub const TOKEN_SYMBOL: &str = "OPDX";

pub const TOKEN_DECIMALS: u8 = 8;
