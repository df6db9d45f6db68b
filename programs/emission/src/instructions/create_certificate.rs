use anchor_lang::prelude::*;
use primitive_types::U256;

use crate::constants::MAX_CERTIFICATES;
use crate::error::EmissionError;
use crate::host::CallContext;
use crate::state::{TokenAmount, VaultCertificate, VaultState};

/// Earmarks `amount` from the pool for `holder`, redeemable after one full
/// vesting duration.
pub fn create_certificate(
    st: &mut VaultState,
    ctx: &CallContext,
    holder: Pubkey,
    amount: U256,
) -> Result<()> {
    require_keys_eq!(ctx.sender, st.owner, EmissionError::Unauthorized);
    require_keys_neq!(holder, st.owner, EmissionError::InvalidCertificateHolder);
    require!(
        !amount.is_zero() && amount <= st.total_supply,
        EmissionError::InvalidAmount
    );
    require!(
        ctx.block < st.allocation_deadline(),
        EmissionError::TokensBurned
    );
    require!(
        st.certificates.count(&holder) < MAX_CERTIFICATES,
        EmissionError::CertificateLimitReached
    );

    let maturation_block = ctx
        .block
        .checked_add(st.vesting_duration)
        .ok_or(EmissionError::MathOverflow)?;

    st.certificates.append(
        holder,
        VaultCertificate {
            amount,
            maturation_block,
            revoked: false,
        },
    )?;

    st.total_supply = st
        .total_supply
        .checked_sub(amount)
        .ok_or(EmissionError::MathOverflow)?;

    st.pending.record(CertificateCreated {
        holder,
        amount: amount.into(),
        maturation_block,
    });

    Ok(())
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateCreated {
    pub holder: Pubkey,
    pub amount: TokenAmount,
    pub maturation_block: u64,
}
