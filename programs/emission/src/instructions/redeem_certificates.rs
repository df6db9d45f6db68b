use anchor_lang::prelude::*;
use primitive_types::U256;

use crate::error::EmissionError;
use crate::host::{CallContext, TokenLedger};
use crate::state::{TokenAmount, VaultState};

/// Pays the caller every matured certificate in one transfer and keeps the
/// unmatured ones in their original order.
pub fn redeem_certificates<L: TokenLedger + ?Sized>(
    st: &mut VaultState,
    ledger: &mut L,
    ctx: &CallContext,
) -> Result<()> {
    let holder = ctx.sender;
    let matured = st.certificates.drain_matured(&holder, ctx.block);
    if matured.is_empty() {
        return Ok(());
    }

    let mut amount_to_transfer = U256::zero();
    for certificate in matured.iter() {
        amount_to_transfer = amount_to_transfer
            .checked_add(certificate.amount)
            .ok_or(EmissionError::MathOverflow)?;

        st.pending.record(CertificateRedeemed {
            holder,
            amount: certificate.amount.into(),
            maturation_block: certificate.maturation_block,
        });
    }

    // Certificates revoked down to zero leave nothing to pay.
    if amount_to_transfer.is_zero() {
        return Ok(());
    }

    let response = ledger.transfer_out(&ctx.forwarded_by(st.address), holder, amount_to_transfer);
    require!(
        response.success && response.return_value == Some(true),
        EmissionError::InvalidTransferTo
    );

    Ok(())
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateRedeemed {
    pub holder: Pubkey,
    pub amount: TokenAmount,
    pub maturation_block: u64,
}
