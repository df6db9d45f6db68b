use anchor_lang::prelude::*;
use primitive_types::U256;

use crate::error::EmissionError;
use crate::host::CallContext;
use crate::state::{TokenAmount, VaultState};
use crate::utils::math::vested_portion;

/// Cuts every unrevoked, unmatured certificate of `holder` down to its
/// vested share and returns the rest to the pool. Maturation blocks are
/// left as they were.
pub fn revoke_certificates(st: &mut VaultState, ctx: &CallContext, holder: Pubkey) -> Result<()> {
    require_keys_eq!(ctx.sender, st.owner, EmissionError::Unauthorized);

    let vesting_duration = st.vesting_duration;
    let Some(list) = st.certificates.list_mut(&holder) else {
        return Ok(());
    };

    let mut returned = U256::zero();
    for certificate in list.as_mut_slice().iter_mut() {
        if certificate.revoked || certificate.is_matured(ctx.block) {
            continue;
        }

        let old_amount = certificate.amount;
        let new_amount = vested_portion(
            old_amount,
            certificate.maturation_block,
            vesting_duration,
            ctx.block,
        )?;
        let forfeited = old_amount
            .checked_sub(new_amount)
            .ok_or(EmissionError::MathOverflow)?;

        certificate.amount = new_amount;
        certificate.revoked = true;
        returned = returned
            .checked_add(forfeited)
            .ok_or(EmissionError::MathOverflow)?;

        st.pending.record(CertificateRevoked {
            holder,
            old_amount: old_amount.into(),
            new_amount: new_amount.into(),
            maturation_block: certificate.maturation_block,
        });
    }

    st.total_supply = st
        .total_supply
        .checked_add(returned)
        .ok_or(EmissionError::MathOverflow)?;

    Ok(())
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateRevoked {
    pub holder: Pubkey,
    pub old_amount: TokenAmount,
    pub new_amount: TokenAmount,
    pub maturation_block: u64,
}
