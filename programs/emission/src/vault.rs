//! Vesting vault: certificate store plus the engine that creates, redeems
//! and revokes certificates.

use anchor_lang::prelude::*;
use primitive_types::U256;

use crate::config::VaultConfig;
use crate::host::{CallContext, TokenLedger};
use crate::instructions;
use crate::state::{Journal, VaultCertificate, VaultState};
use crate::utils::tx::atomically;

pub struct Vault {
    state: VaultState,
    journal: Journal,
}

impl Vault {
    pub fn new(ctx: &CallContext, address: Pubkey, config: VaultConfig) -> Result<Self> {
        let state = instructions::initialize_vault(ctx, address, config)?;
        Ok(Self {
            state,
            journal: Journal::default(),
        })
    }

    pub fn state(&self) -> &VaultState {
        &self.state
    }

    pub fn address(&self) -> Pubkey {
        self.state.address
    }

    /// Allocatable pool.
    pub fn total_supply(&self) -> U256 {
        self.state.total_supply
    }

    pub fn certificates(&self, holder: &Pubkey) -> &[VaultCertificate] {
        self.state.certificates.certificates(holder)
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn fingerprint(&self) -> blake3::Hash {
        self.state.fingerprint(&self.journal)
    }

    pub fn notify_deposit(&mut self, ctx: &CallContext, amount: U256) -> Result<()> {
        atomically(&mut self.state, &mut self.journal, "notify_deposit", |st| {
            instructions::notify_deposit(st, ctx, amount)
        })
    }

    pub fn create_certificate(
        &mut self,
        ctx: &CallContext,
        holder: Pubkey,
        amount: U256,
    ) -> Result<()> {
        atomically(&mut self.state, &mut self.journal, "create_certificate", |st| {
            instructions::create_certificate(st, ctx, holder, amount)
        })
    }

    /// Redeems the caller's matured certificates, paying out through `ledger`.
    pub fn redeem_certificates<L: TokenLedger + ?Sized>(
        &mut self,
        ctx: &CallContext,
        ledger: &mut L,
    ) -> Result<()> {
        atomically(&mut self.state, &mut self.journal, "redeem_certificates", |st| {
            instructions::redeem_certificates(st, ledger, ctx)
        })
    }

    pub fn revoke_certificates(&mut self, ctx: &CallContext, holder: Pubkey) -> Result<()> {
        atomically(&mut self.state, &mut self.journal, "revoke_certificates", |st| {
            instructions::revoke_certificates(st, ctx, holder)
        })
    }

    pub fn set_owner(&mut self, ctx: &CallContext, owner: Pubkey) -> Result<()> {
        atomically(&mut self.state, &mut self.journal, "set_vault_owner", |st| {
            instructions::set_vault_owner(st, ctx, owner)
        })
    }
}
