use anchor_lang::prelude::*;
use primitive_types::U256;

use crate::config::VaultConfig;
use crate::error::EmissionError;
use crate::host::CallContext;
use crate::state::{CertificateStore, Journal, VaultState};

/// Creates an empty vault. Genesis stays unset until the first deposit.
pub fn initialize_vault(
    ctx: &CallContext,
    address: Pubkey,
    config: VaultConfig,
) -> Result<VaultState> {
    config.validate()?;
    require!(address != Pubkey::default(), EmissionError::InvalidConfig);
    require_keys_neq!(address, config.token, EmissionError::InvalidConfig);

    msg!(
        "vault {} deployed at block {} by {}",
        address,
        ctx.block,
        ctx.sender
    );

    Ok(VaultState {
        address,
        token: config.token,
        owner: config.owner,
        genesis: 0,
        vesting_duration: config.vesting_duration,
        total_supply: U256::zero(),
        certificates: CertificateStore::default(),
        pending: Journal::default(),
    })
}
