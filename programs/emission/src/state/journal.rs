//! Append-only record of everything the components have emitted.

use anchor_lang::prelude::*;

use crate::instructions::{
    AllowanceApproved, CertificateCreated, CertificateRedeemed, CertificateRevoked, OwnerChanged,
    TokensDistributed, TokensTransferred, VaultOwnerChanged,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Record {
    Distribution(TokensDistributed),
    Transfer(TokensTransferred),
    Approval(AllowanceApproved),
    OwnerChange(OwnerChanged),
    VaultOwnerChange(VaultOwnerChanged),
    CertificateCreated(CertificateCreated),
    CertificateRedeemed(CertificateRedeemed),
    CertificateRevoked(CertificateRevoked),
}

macro_rules! record_from {
    ($($variant:ident($event:ty)),* $(,)?) => {
        $(
            impl From<$event> for Record {
                fn from(event: $event) -> Self {
                    Record::$variant(event)
                }
            }
        )*
    };
}

record_from!(
    Distribution(TokensDistributed),
    Transfer(TokensTransferred),
    Approval(AllowanceApproved),
    OwnerChange(OwnerChanged),
    VaultOwnerChange(VaultOwnerChanged),
    CertificateCreated(CertificateCreated),
    CertificateRedeemed(CertificateRedeemed),
    CertificateRevoked(CertificateRevoked),
);

impl Record {
    /// Writes the record to the program log.
    fn publish(&self) {
        match self {
            Record::Distribution(e) => emit!(e.clone()),
            Record::Transfer(e) => emit!(e.clone()),
            Record::Approval(e) => emit!(e.clone()),
            Record::OwnerChange(e) => emit!(e.clone()),
            Record::VaultOwnerChange(e) => emit!(e.clone()),
            Record::CertificateCreated(e) => emit!(e.clone()),
            Record::CertificateRedeemed(e) => emit!(e.clone()),
            Record::CertificateRevoked(e) => emit!(e.clone()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Journal {
    records: Vec<Record>,
}

impl Journal {
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    pub(crate) fn record(&mut self, record: impl Into<Record>) {
        self.records.push(record.into());
    }

    /// Moves every record out of `pending`, publishing each one as it lands.
    pub(crate) fn commit(&mut self, pending: &mut Journal) {
        for record in pending.records.drain(..) {
            record.publish();
            self.records.push(record);
        }
    }
}
