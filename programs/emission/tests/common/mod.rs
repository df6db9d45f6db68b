#![allow(dead_code)]

use anchor_lang::prelude::Pubkey;
use emission::{CallContext, CallResult, MiningGovernance, TokenConfig, U256};

pub fn addr(n: u8) -> Pubkey {
    Pubkey::new_from_array([n; 32])
}

pub fn deployer() -> Pubkey {
    addr(1)
}

pub fn token_address() -> Pubkey {
    addr(2)
}

pub fn governance_address() -> Pubkey {
    addr(3)
}

pub fn vault_address() -> Pubkey {
    addr(4)
}

pub fn amounts(values: &[u64]) -> Vec<U256> {
    values.iter().map(|v| U256::from(*v)).collect()
}

/// Five-year schedule the token ships with, in base units.
pub fn default_config(period_duration: u64) -> TokenConfig {
    TokenConfig::new(
        amounts(&[
            10_000_000_000_000_000,
            7_500_000_000_000_000,
            5_000_000_000_000_000,
            2_500_000_000_000_000,
            500_000_000_000_000,
        ]),
        amounts(&[
            30_000_000_000_000_000,
            22_500_000_000_000_000,
            15_000_000_000_000_000,
            7_500_000_000_000_000,
            2_000_000_000_000_000,
        ]),
        period_duration,
    )
}

/// Governance that records notifications and can be told to refuse them.
#[derive(Default)]
pub struct RecordingGovernance {
    pub refuse: bool,
    pub notifications: Vec<(CallContext, Vec<u8>)>,
    pub nominations: Vec<(Pubkey, U256)>,
}

impl MiningGovernance for RecordingGovernance {
    fn notify_distribution(&mut self, ctx: &CallContext, data: &[u8]) -> CallResult<()> {
        if self.refuse {
            return CallResult::failed();
        }
        self.notifications.push((*ctx, data.to_vec()));
        CallResult::succeeded(())
    }

    fn nominate_liquidity_pool(
        &mut self,
        ctx: &CallContext,
        _pool: Pubkey,
        weight: U256,
    ) -> CallResult<()> {
        self.nominations.push((ctx.sender, weight));
        CallResult::succeeded(())
    }
}
