//! BLAKE3 fingerprints of component state. Two states with equal
//! fingerprints are observably identical, which is how rollbacks are checked.

use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};
use primitive_types::U256;

use crate::state::VaultCertificate;

/// Fixed byte image of a certificate.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct PackedCertificate {
    amount: [u64; 4],
    maturation_block: u64,
    revoked: u8,
    _padding: [u8; 7],
}

impl From<&VaultCertificate> for PackedCertificate {
    fn from(c: &VaultCertificate) -> Self {
        Self {
            amount: c.amount.0,
            maturation_block: c.maturation_block,
            revoked: c.revoked as u8,
            _padding: [0u8; 7],
        }
    }
}

pub struct StateHasher {
    inner: blake3::Hasher,
}

impl StateHasher {
    pub fn new(domain: &[u8]) -> Self {
        let mut inner = blake3::Hasher::new();
        inner.update(domain);
        Self { inner }
    }

    pub fn address(&mut self, address: &Pubkey) -> &mut Self {
        self.inner.update(address.as_ref());
        self
    }

    pub fn amount(&mut self, amount: &U256) -> &mut Self {
        self.inner.update(bytemuck::bytes_of(&amount.0));
        self
    }

    pub fn block(&mut self, block: u64) -> &mut Self {
        self.inner.update(&block.to_le_bytes());
        self
    }

    /// Length-prefixed so adjacent fields cannot run into each other.
    pub fn bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.block(bytes.len() as u64);
        self.inner.update(bytes);
        self
    }

    pub fn certificate(&mut self, certificate: &VaultCertificate) -> &mut Self {
        let packed = PackedCertificate::from(certificate);
        self.inner.update(bytemuck::bytes_of(&packed));
        self
    }

    pub fn finalize(&self) -> blake3::Hash {
        self.inner.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_certificate_has_no_implicit_padding() {
        assert_eq!(core::mem::size_of::<PackedCertificate>(), 48);
    }

    #[test]
    fn revoked_flag_changes_the_digest() {
        let mut c = VaultCertificate {
            amount: U256::from(100u64),
            maturation_block: 42,
            revoked: false,
        };
        let before = StateHasher::new(b"t").certificate(&c).finalize();
        c.revoked = true;
        let after = StateHasher::new(b"t").certificate(&c).finalize();

        assert_ne!(before, after);
    }
}
