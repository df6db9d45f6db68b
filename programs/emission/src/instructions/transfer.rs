use anchor_lang::prelude::*;
use primitive_types::U256;

use crate::host::CallContext;
use crate::state::{TokenAmount, TokenState};

/// Moves `amount` from the caller to `to`. Insufficient balance is a soft
/// failure: `Ok(false)` and nothing changes.
pub fn transfer_to(
    st: &mut TokenState,
    ctx: &CallContext,
    to: Pubkey,
    amount: U256,
) -> Result<bool> {
    move_tokens(st, ctx.sender, to, amount)
}

/// Moves `amount` from `from` to `to` against the caller's allowance.
pub fn transfer_from(
    st: &mut TokenState,
    ctx: &CallContext,
    from: Pubkey,
    to: Pubkey,
    amount: U256,
) -> Result<bool> {
    if amount.is_zero() {
        return move_tokens(st, from, to, amount);
    }

    let allowance = st.ledger.allowance(&from, &ctx.sender);
    if allowance < amount || st.ledger.balance_of(&from) < amount {
        return Ok(false);
    }

    st.ledger.set_allowance(from, ctx.sender, allowance - amount);
    move_tokens(st, from, to, amount)
}

fn move_tokens(st: &mut TokenState, from: Pubkey, to: Pubkey, amount: U256) -> Result<bool> {
    if !amount.is_zero() {
        if st.ledger.balance_of(&from) < amount {
            return Ok(false);
        }
        st.ledger.debit(from, amount)?;
        st.ledger.credit(to, amount)?;
    }

    st.pending.record(TokensTransferred {
        from,
        to,
        amount: amount.into(),
    });

    Ok(true)
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokensTransferred {
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: TokenAmount,
}
