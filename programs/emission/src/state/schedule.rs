use anchor_lang::prelude::*;
use primitive_types::U256;

use crate::config::TokenConfig;
use crate::error::EmissionError;
use crate::utils::math::schedule_index;

/// Clock-driven distribution schedule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistributionSchedule {
    owner_schedule: Vec<U256>,
    mining_schedule: Vec<U256>,
    /// Block the token was deployed at; anchors every period deadline.
    genesis: u64,
    period_duration: u64,
    /// Completed distributions.
    period_index: u32,
}

impl DistributionSchedule {
    pub fn new(config: &TokenConfig, genesis: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            owner_schedule: config.owner_schedule.clone(),
            mining_schedule: config.mining_schedule.clone(),
            genesis,
            period_duration: config.period_duration,
            period_index: 0,
        })
    }

    pub fn owner_schedule(&self) -> &[U256] {
        &self.owner_schedule
    }

    pub fn mining_schedule(&self) -> &[U256] {
        &self.mining_schedule
    }

    pub fn genesis(&self) -> u64 {
        self.genesis
    }

    pub fn period_duration(&self) -> u64 {
        self.period_duration
    }

    pub fn period_index(&self) -> u32 {
        self.period_index
    }

    /// First block at which the current period may be distributed.
    pub fn next_distribution_block(&self) -> Result<u64> {
        if self.period_index == 0 {
            return Ok(self.genesis);
        }
        self.period_duration
            .checked_mul(self.period_index as u64)
            .and_then(|offset| offset.checked_add(self.genesis))
            .ok_or_else(|| EmissionError::MathOverflow.into())
    }

    /// (owner, mining) amounts for `period`, clamped to the inflation tail.
    pub fn amounts_for(&self, period: u32) -> Result<(U256, U256)> {
        let index = schedule_index(period, self.owner_schedule.len());
        let owner = self
            .owner_schedule
            .get(index)
            .copied()
            .ok_or(EmissionError::InvalidSchedule)?;
        let mining = self
            .mining_schedule
            .get(index)
            .copied()
            .ok_or(EmissionError::InvalidSchedule)?;
        Ok((owner, mining))
    }

    pub(crate) fn advance(&mut self) -> Result<()> {
        self.period_index = self
            .period_index
            .checked_add(1)
            .ok_or(EmissionError::MathOverflow)?;
        Ok(())
    }
}
