use anchor_lang::prelude::*;

use crate::config::TokenConfig;
use crate::error::EmissionError;
use crate::host::CallContext;
use crate::state::{DistributionSchedule, Journal, Ledger, TokenState};

/// Deploys the token. The deployer becomes owner and the deployment block
/// becomes genesis.
pub fn initialize_token(
    ctx: &CallContext,
    address: Pubkey,
    mining_governance: Pubkey,
    config: TokenConfig,
) -> Result<TokenState> {
    require!(address != Pubkey::default(), EmissionError::InvalidConfig);
    require!(
        mining_governance != Pubkey::default(),
        EmissionError::InvalidConfig
    );
    require_keys_neq!(address, mining_governance, EmissionError::InvalidConfig);

    let schedule = DistributionSchedule::new(&config, ctx.block)?;

    msg!(
        "token {} deployed at block {} with {} scheduled periods",
        address,
        ctx.block,
        schedule.owner_schedule().len()
    );

    Ok(TokenState {
        address,
        name: config.name,
        symbol: config.symbol,
        decimals: config.decimals,
        owner: ctx.sender,
        mining_governance,
        ledger: Ledger::default(),
        schedule,
        pending: Journal::default(),
    })
}
