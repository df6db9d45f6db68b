//! Construction parameters for the token and the vault.

use anchor_lang::prelude::*;
use primitive_types::U256;

use crate::constants::{MIN_SCHEDULE_LENGTH, TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL};
use crate::error::EmissionError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenConfig {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Per-period amounts credited to the owner. The last entry is the inflation tail.
    pub owner_schedule: Vec<U256>,
    /// Per-period amounts credited to mining governance.
    pub mining_schedule: Vec<U256>,
    /// Blocks between distributions.
    pub period_duration: u64,
}

impl TokenConfig {
    pub fn new(owner_schedule: Vec<U256>, mining_schedule: Vec<U256>, period_duration: u64) -> Self {
        Self {
            name: TOKEN_NAME.to_string(),
            symbol: TOKEN_SYMBOL.to_string(),
            decimals: TOKEN_DECIMALS,
            owner_schedule,
            mining_schedule,
            period_duration,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require!(
            self.owner_schedule.len() >= MIN_SCHEDULE_LENGTH,
            EmissionError::InvalidSchedule
        );
        require!(
            self.owner_schedule.len() == self.mining_schedule.len(),
            EmissionError::InvalidSchedule
        );
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VaultConfig {
    /// Token contract allowed to notify deposits.
    pub token: Pubkey,
    pub owner: Pubkey,
    /// Lock length in blocks applied to every certificate.
    pub vesting_duration: u64,
}

impl VaultConfig {
    pub fn validate(&self) -> Result<()> {
        require!(self.token != Pubkey::default(), EmissionError::InvalidConfig);
        require!(self.owner != Pubkey::default(), EmissionError::InvalidConfig);
        require_keys_neq!(self.token, self.owner, EmissionError::InvalidConfig);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn amounts(values: &[u64]) -> Vec<U256> {
        values.iter().map(|v| U256::from(*v)).collect()
    }

    #[test]
    fn schedules_need_a_tail() {
        let cfg = TokenConfig::new(amounts(&[12345]), amounts(&[9876]), 100);
        assert_eq!(
            cfg.validate().unwrap_err(),
            Error::from(EmissionError::InvalidSchedule)
        );
    }

    #[test]
    fn schedules_must_match_in_length() {
        let cfg = TokenConfig::new(amounts(&[1, 2, 3]), amounts(&[1, 2]), 100);
        assert_eq!(
            cfg.validate().unwrap_err(),
            Error::from(EmissionError::InvalidSchedule)
        );

        let cfg = TokenConfig::new(amounts(&[125]), Vec::new(), 100);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn default_metadata() {
        let cfg = TokenConfig::new(amounts(&[1, 2]), amounts(&[3, 4]), 100);
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.name, "Opdex");
        assert_eq!(cfg.symbol, "OPDX");
        assert_eq!(cfg.decimals, 8);
    }

    #[test]
    fn vault_needs_distinct_token_and_owner() {
        let token = Pubkey::new_from_array([1; 32]);
        let cfg = VaultConfig {
            token,
            owner: token,
            vesting_duration: 10,
        };
        assert!(cfg.validate().is_err());

        let cfg = VaultConfig {
            token,
            owner: Pubkey::default(),
            vesting_duration: 10,
        };
        assert!(cfg.validate().is_err());
    }
}
