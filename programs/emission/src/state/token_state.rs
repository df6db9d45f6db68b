use anchor_lang::prelude::*;
use primitive_types::U256;

use crate::state::{DistributionSchedule, Journal, Ledger};
use crate::utils::digest::StateHasher;

/// Mined token state: ledger plus distribution schedule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenState {
    /// This contract's own address, used as sender on outbound calls.
    pub address: Pubkey,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Administrator and primary distribution recipient.
    pub owner: Pubkey,
    /// Secondary distribution recipient and notification target.
    pub mining_governance: Pubkey,
    pub ledger: Ledger,
    pub schedule: DistributionSchedule,
    /// Records staged by the operation in flight. Empty at rest.
    pub(crate) pending: Journal,
}

impl TokenState {
    pub fn total_supply(&self) -> U256 {
        self.ledger.total_supply()
    }

    pub fn balance_of(&self, address: &Pubkey) -> U256 {
        self.ledger.balance_of(address)
    }

    pub fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> U256 {
        self.ledger.allowance(owner, spender)
    }

    pub fn period_index(&self) -> u32 {
        self.schedule.period_index()
    }

    pub fn genesis(&self) -> u64 {
        self.schedule.genesis()
    }

    /// Digest of every field a caller can observe, plus the committed journal length.
    pub fn fingerprint(&self, journal: &Journal) -> blake3::Hash {
        let mut h = StateHasher::new(b"token");
        h.address(&self.address)
            .bytes(self.name.as_bytes())
            .bytes(self.symbol.as_bytes())
            .bytes(&[self.decimals])
            .address(&self.owner)
            .address(&self.mining_governance)
            .amount(&self.ledger.total_supply());

        for (address, balance) in self.ledger.balances() {
            h.address(address).amount(balance);
        }
        for ((owner, spender), allowance) in self.ledger.allowances() {
            h.address(owner).address(spender).amount(allowance);
        }

        h.block(self.schedule.genesis())
            .block(self.schedule.period_duration())
            .block(self.schedule.period_index() as u64);
        for amount in self
            .schedule
            .owner_schedule()
            .iter()
            .chain(self.schedule.mining_schedule())
        {
            h.amount(amount);
        }

        h.block(journal.len() as u64);
        h.finalize()
    }
}
