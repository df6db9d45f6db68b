use anchor_lang::prelude::*;
use primitive_types::U256;

use crate::host::CallContext;
use crate::state::{TokenAmount, TokenState};

/// Compare-and-swap allowance update. Returns `Ok(false)` without touching
/// state unless the stored allowance equals `current_amount`.
pub fn approve(
    st: &mut TokenState,
    ctx: &CallContext,
    spender: Pubkey,
    current_amount: U256,
    amount: U256,
) -> Result<bool> {
    if st.ledger.allowance(&ctx.sender, &spender) != current_amount {
        return Ok(false);
    }

    st.ledger.set_allowance(ctx.sender, spender, amount);

    st.pending.record(AllowanceApproved {
        owner: ctx.sender,
        spender,
        amount: amount.into(),
        old_amount: current_amount.into(),
    });

    Ok(true)
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllowanceApproved {
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub amount: TokenAmount,
    pub old_amount: TokenAmount,
}
