//! Mined token: ledger plus clock-driven distribution schedule.

use anchor_lang::prelude::*;
use primitive_types::U256;

use crate::config::TokenConfig;
use crate::host::{CallContext, CallResult, MiningGovernance, TokenLedger};
use crate::instructions;
use crate::state::{Journal, TokenState};
use crate::utils::tx::atomically;

pub struct MinedToken<G> {
    state: TokenState,
    journal: Journal,
    governance: G,
}

impl<G: MiningGovernance> MinedToken<G> {
    /// Deploys the token at `address`. `governance` answers calls made to
    /// `governance_address`.
    pub fn new(
        ctx: &CallContext,
        address: Pubkey,
        governance_address: Pubkey,
        governance: G,
        config: TokenConfig,
    ) -> Result<Self> {
        let state = instructions::initialize_token(ctx, address, governance_address, config)?;
        Ok(Self {
            state,
            journal: Journal::default(),
            governance,
        })
    }

    pub fn state(&self) -> &TokenState {
        &self.state
    }

    pub fn address(&self) -> Pubkey {
        self.state.address
    }

    pub fn governance(&self) -> &G {
        &self.governance
    }

    pub fn governance_mut(&mut self) -> &mut G {
        &mut self.governance
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn fingerprint(&self) -> blake3::Hash {
        self.state.fingerprint(&self.journal)
    }

    pub fn distribute(&mut self, ctx: &CallContext, data: &[u8]) -> Result<()> {
        let governance = &mut self.governance;
        atomically(&mut self.state, &mut self.journal, "distribute", |st| {
            instructions::distribute(st, governance, ctx, data)
        })
    }

    pub fn nominate_liquidity_pool(&mut self, ctx: &CallContext) -> Result<()> {
        let governance = &mut self.governance;
        atomically(&mut self.state, &mut self.journal, "nominate_liquidity_pool", |st| {
            instructions::nominate_liquidity_pool(st, governance, ctx)
        })
    }

    pub fn transfer_to(&mut self, ctx: &CallContext, to: Pubkey, amount: U256) -> Result<bool> {
        atomically(&mut self.state, &mut self.journal, "transfer_to", |st| {
            instructions::transfer_to(st, ctx, to, amount)
        })
    }

    pub fn transfer_from(
        &mut self,
        ctx: &CallContext,
        from: Pubkey,
        to: Pubkey,
        amount: U256,
    ) -> Result<bool> {
        atomically(&mut self.state, &mut self.journal, "transfer_from", |st| {
            instructions::transfer_from(st, ctx, from, to, amount)
        })
    }

    pub fn approve(
        &mut self,
        ctx: &CallContext,
        spender: Pubkey,
        current_amount: U256,
        amount: U256,
    ) -> Result<bool> {
        atomically(&mut self.state, &mut self.journal, "approve", |st| {
            instructions::approve(st, ctx, spender, current_amount, amount)
        })
    }

    pub fn set_owner(&mut self, ctx: &CallContext, owner: Pubkey) -> Result<()> {
        atomically(&mut self.state, &mut self.journal, "set_owner", |st| {
            instructions::set_owner(st, ctx, owner)
        })
    }
}

impl<G: MiningGovernance> TokenLedger for MinedToken<G> {
    fn transfer_out(&mut self, ctx: &CallContext, to: Pubkey, amount: U256) -> CallResult<bool> {
        match self.transfer_to(ctx, to, amount) {
            Ok(transferred) => CallResult::succeeded(transferred),
            Err(err) => {
                msg!("transfer_out to {} failed: {}", to, err);
                CallResult::failed()
            }
        }
    }
}
