use anchor_lang::prelude::*;

use crate::error::EmissionError;
use crate::host::CallContext;
use crate::state::VaultState;

pub fn set_vault_owner(st: &mut VaultState, ctx: &CallContext, owner: Pubkey) -> Result<()> {
    require_keys_eq!(ctx.sender, st.owner, EmissionError::Unauthorized);

    st.owner = owner;

    st.pending.record(VaultOwnerChanged {
        from: ctx.sender,
        to: owner,
    });
    Ok(())
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VaultOwnerChanged {
    pub from: Pubkey,
    pub to: Pubkey,
}
