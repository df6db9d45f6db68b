use anchor_lang::prelude::*;

use crate::error::EmissionError;
use crate::host::CallContext;
use crate::state::TokenState;

pub fn set_owner(st: &mut TokenState, ctx: &CallContext, owner: Pubkey) -> Result<()> {
    require_keys_eq!(ctx.sender, st.owner, EmissionError::Unauthorized);

    st.owner = owner;

    st.pending.record(OwnerChanged {
        from: ctx.sender,
        to: owner,
    });
    Ok(())
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnerChanged {
    pub from: Pubkey,
    pub to: Pubkey,
}
