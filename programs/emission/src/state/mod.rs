pub mod amount;
pub mod certificates;
pub mod journal;
pub mod ledger;
pub mod schedule;
pub mod token_state;
pub mod vault_state;

pub use amount::*;
pub use certificates::*;
pub use journal::*;
pub use ledger::*;
pub use schedule::*;
pub use token_state::*;
pub use vault_state::*;
