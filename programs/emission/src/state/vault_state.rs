use anchor_lang::prelude::*;
use primitive_types::U256;

use crate::state::{CertificateStore, Journal};
use crate::utils::digest::StateHasher;

/// Vesting vault state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VaultState {
    pub address: Pubkey,
    /// Token contract allowed to notify deposits and used for payouts.
    pub token: Pubkey,
    pub owner: Pubkey,
    /// Block of the first deposit, 0 while unset.
    pub genesis: u64,
    pub vesting_duration: u64,
    /// Allocatable pool: deposited tokens not earmarked by any certificate.
    pub total_supply: U256,
    pub certificates: CertificateStore,
    /// Records staged by the operation in flight. Empty at rest.
    pub(crate) pending: Journal,
}

impl VaultState {
    /// Certificates can only be created before this block.
    pub fn allocation_deadline(&self) -> u64 {
        self.genesis.saturating_add(self.vesting_duration)
    }

    pub fn fingerprint(&self, journal: &Journal) -> blake3::Hash {
        let mut h = StateHasher::new(b"vault");
        h.address(&self.address)
            .address(&self.token)
            .address(&self.owner)
            .block(self.genesis)
            .block(self.vesting_duration)
            .amount(&self.total_supply);

        for (holder, list) in self.certificates.holders() {
            h.address(holder).block(list.len() as u64);
            for certificate in list.as_slice() {
                h.certificate(certificate);
            }
        }

        h.block(journal.len() as u64);
        h.finalize()
    }
}
