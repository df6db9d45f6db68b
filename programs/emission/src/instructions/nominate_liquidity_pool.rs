use anchor_lang::prelude::*;

use crate::error::EmissionError;
use crate::host::{CallContext, MiningGovernance};
use crate::state::TokenState;

/// Forwards the calling pool's balance to governance as its nomination
/// weight. Pools without a balance are skipped silently.
pub fn nominate_liquidity_pool<G: MiningGovernance + ?Sized>(
    st: &TokenState,
    governance: &mut G,
    ctx: &CallContext,
) -> Result<()> {
    require!(ctx.sender_is_contract, EmissionError::InvalidSender);

    let balance = st.ledger.balance_of(&ctx.sender);
    if balance.is_zero() {
        return Ok(());
    }

    let response =
        governance.nominate_liquidity_pool(&ctx.forwarded_by(st.address), ctx.sender, balance);
    if !response.success {
        msg!("nomination of {} was not accepted", ctx.sender);
    }

    Ok(())
}
