use std::collections::BTreeMap;

use anchor_lang::prelude::*;
use primitive_types::U256;

use crate::constants::MAX_CERTIFICATES;
use crate::error::EmissionError;

/// Tokens locked for one holder until `maturation_block`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VaultCertificate {
    pub amount: U256,
    pub maturation_block: u64,
    pub revoked: bool,
}

impl VaultCertificate {
    pub fn is_matured(&self, block: u64) -> bool {
        self.maturation_block <= block
    }
}

/// Fixed-capacity, insertion-ordered certificate slots for one holder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CertificateList {
    entries: [VaultCertificate; MAX_CERTIFICATES],
    len: u8,
}

impl CertificateList {
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() >= MAX_CERTIFICATES
    }

    pub fn as_slice(&self) -> &[VaultCertificate] {
        &self.entries[..self.len()]
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [VaultCertificate] {
        let len = self.len();
        &mut self.entries[..len]
    }

    pub(crate) fn push(&mut self, certificate: VaultCertificate) -> Result<()> {
        require!(!self.is_full(), EmissionError::CertificateLimitReached);
        let idx = self.len();
        self.entries[idx] = certificate;
        self.len += 1;
        Ok(())
    }

    /// Removes every certificate matured at `block` and compacts the rest,
    /// keeping their relative order. Returns the removed entries in order.
    pub(crate) fn drain_matured(&mut self, block: u64) -> Vec<VaultCertificate> {
        let len = self.len();
        let mut matured = Vec::new();
        let mut kept = 0usize;

        for i in 0..len {
            let certificate = self.entries[i];
            if certificate.is_matured(block) {
                matured.push(certificate);
            } else {
                self.entries[kept] = certificate;
                kept += 1;
            }
        }
        for slot in self.entries[kept..len].iter_mut() {
            *slot = VaultCertificate::default();
        }
        self.len = kept as u8;

        matured
    }
}

/// Certificate lists indexed by holder.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CertificateStore {
    holders: BTreeMap<Pubkey, CertificateList>,
}

impl CertificateStore {
    pub fn certificates(&self, holder: &Pubkey) -> &[VaultCertificate] {
        self.holders
            .get(holder)
            .map(CertificateList::as_slice)
            .unwrap_or(&[])
    }

    pub fn count(&self, holder: &Pubkey) -> usize {
        self.holders.get(holder).map_or(0, CertificateList::len)
    }

    pub fn holders(&self) -> impl Iterator<Item = (&Pubkey, &CertificateList)> {
        self.holders.iter()
    }

    /// Sum of every certificate amount still held, revoked remainders included.
    pub fn outstanding(&self) -> Result<U256> {
        self.sum_where(|_| true)
    }

    /// Sum of the certificates that have not been revoked.
    pub fn unrevoked(&self) -> Result<U256> {
        self.sum_where(|c| !c.revoked)
    }

    pub(crate) fn append(&mut self, holder: Pubkey, certificate: VaultCertificate) -> Result<()> {
        self.holders.entry(holder).or_default().push(certificate)
    }

    pub(crate) fn drain_matured(&mut self, holder: &Pubkey, block: u64) -> Vec<VaultCertificate> {
        let Some(list) = self.holders.get_mut(holder) else {
            return Vec::new();
        };
        let matured = list.drain_matured(block);
        if list.is_empty() {
            self.holders.remove(holder);
        }
        matured
    }

    pub(crate) fn list_mut(&mut self, holder: &Pubkey) -> Option<&mut CertificateList> {
        self.holders.get_mut(holder)
    }

    fn sum_where(&self, keep: impl Fn(&VaultCertificate) -> bool) -> Result<U256> {
        let mut sum = U256::zero();
        for list in self.holders.values() {
            for certificate in list.as_slice().iter().filter(|c| keep(c)) {
                sum = sum
                    .checked_add(certificate.amount)
                    .ok_or(EmissionError::MathOverflow)?;
            }
        }
        Ok(sum)
    }
}
