pub mod initialize_token;
pub mod distribute;
pub mod nominate_liquidity_pool;
pub mod transfer;
pub mod approve;
pub mod set_owner;
pub mod initialize_vault;
pub mod notify_deposit;
pub mod create_certificate;
pub mod redeem_certificates;
pub mod revoke_certificates;
pub mod set_vault_owner;

pub use initialize_token::*;
pub use distribute::*;
pub use nominate_liquidity_pool::*;
pub use transfer::*;
pub use approve::*;
pub use set_owner::*;
pub use initialize_vault::*;
pub use notify_deposit::*;
pub use create_certificate::*;
pub use redeem_certificates::*;
pub use revoke_certificates::*;
pub use set_vault_owner::*;
