use anchor_lang::prelude::*;
use primitive_types::U256;

use crate::error::EmissionError;
use crate::host::CallContext;
use crate::state::VaultState;

/// Tops up the allocatable pool. Only the token may call this; the first
/// deposit fixes the vault genesis and with it the allocation deadline.
pub fn notify_deposit(st: &mut VaultState, ctx: &CallContext, amount: U256) -> Result<()> {
    require_keys_eq!(ctx.sender, st.token, EmissionError::Unauthorized);

    st.total_supply = st
        .total_supply
        .checked_add(amount)
        .ok_or(EmissionError::MathOverflow)?;

    if st.genesis == 0 {
        st.genesis = ctx.block;
        msg!(
            "vault genesis set at block {}, allocation closes at {}",
            ctx.block,
            ctx.block.saturating_add(st.vesting_duration)
        );
    }

    Ok(())
}
