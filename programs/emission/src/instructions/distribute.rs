use anchor_lang::prelude::*;

use crate::error::EmissionError;
use crate::host::{CallContext, MiningGovernance};
use crate::state::{TokenAmount, TokenState};

/// Mints the current period's amounts to the owner and mining governance,
/// then notifies governance. Period 0 is owner-only; later periods are open
/// to anyone once their block gate opens.
pub fn distribute<G: MiningGovernance + ?Sized>(
    st: &mut TokenState,
    governance: &mut G,
    ctx: &CallContext,
    data: &[u8],
) -> Result<()> {
    let period_index = st.schedule.period_index();
    if period_index == 0 {
        require_keys_eq!(ctx.sender, st.owner, EmissionError::Unauthorized);
    }

    let min_block = st.schedule.next_distribution_block()?;
    require!(ctx.block >= min_block, EmissionError::DistributionNotReady);

    let owner = st.owner;
    let mining_governance = st.mining_governance;
    let (owner_tokens, mining_tokens) = st.schedule.amounts_for(period_index)?;

    // Everything that can fail after the notification is computed up front.
    let supply_increase = owner_tokens
        .checked_add(mining_tokens)
        .ok_or(EmissionError::MathOverflow)?;
    let total_supply = st
        .ledger
        .total_supply()
        .checked_add(supply_increase)
        .ok_or(EmissionError::MathOverflow)?;

    st.ledger.credit(owner, owner_tokens)?;
    st.ledger.credit(mining_governance, mining_tokens)?;

    let payload: &[u8] = if period_index == 0 { data } else { &[] };
    let response = governance.notify_distribution(&ctx.forwarded_by(st.address), payload);
    require!(
        response.success,
        EmissionError::FailedDistributionNotification
    );

    st.ledger.set_total_supply(total_supply);
    st.schedule.advance()?;

    st.pending.record(TokensDistributed {
        owner_address: owner,
        mining_address: mining_governance,
        owner_amount: owner_tokens.into(),
        mining_amount: mining_tokens.into(),
        period_index,
    });

    msg!(
        "period {} distributed: {} total supply",
        period_index,
        total_supply
    );

    Ok(())
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokensDistributed {
    pub owner_address: Pubkey,
    pub mining_address: Pubkey,
    pub owner_amount: TokenAmount,
    pub mining_amount: TokenAmount,
    pub period_index: u32,
}
