//! Everything the host environment hands to an invocation: who is calling,
//! at which block, and the outbound call capabilities.

use anchor_lang::prelude::*;
use primitive_types::U256;

/// Per-invocation context. Block height and caller are never read from
/// ambient state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallContext {
    pub sender: Pubkey,
    pub block: u64,
    /// Host-resolved: whether `sender` is a deployed contract.
    pub sender_is_contract: bool,
}

impl CallContext {
    pub fn new(sender: Pubkey, block: u64) -> Self {
        Self {
            sender,
            block,
            sender_is_contract: false,
        }
    }

    pub fn from_contract(sender: Pubkey, block: u64) -> Self {
        Self {
            sender,
            block,
            sender_is_contract: true,
        }
    }

    /// Context seen by the callee of an outbound call made by `contract`.
    pub fn forwarded_by(&self, contract: Pubkey) -> Self {
        Self::from_contract(contract, self.block)
    }
}

/// Outcome of a synchronous outbound call. `success` is the call-level flag;
/// `return_value` is only present when the callee returned normally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallResult<T> {
    pub success: bool,
    pub return_value: Option<T>,
}

impl<T> CallResult<T> {
    pub fn succeeded(value: T) -> Self {
        Self {
            success: true,
            return_value: Some(value),
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            return_value: None,
        }
    }
}

/// Mining governance collaborator. Pool weighting lives on the other side of
/// this boundary.
pub trait MiningGovernance {
    /// Called once per distribution period. `data` is only non-empty on period 0.
    fn notify_distribution(&mut self, ctx: &CallContext, data: &[u8]) -> CallResult<()>;

    fn nominate_liquidity_pool(
        &mut self,
        ctx: &CallContext,
        pool: Pubkey,
        weight: U256,
    ) -> CallResult<()>;
}

/// Transfer-out capability of the token ledger, as used by the vault.
pub trait TokenLedger {
    /// Moves `amount` from `ctx.sender` to `to`. A payout only counts when
    /// `success` is set and the returned value is `Some(true)`.
    fn transfer_out(&mut self, ctx: &CallContext, to: Pubkey, amount: U256) -> CallResult<bool>;
}
