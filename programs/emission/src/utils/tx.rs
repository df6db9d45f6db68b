//! Transactional boundary for public entry points.
//!
//! Each operation runs against a staged copy of the component state. The
//! copy replaces the live state only when the operation returns `Ok`, and
//! only then are its records published and appended to the component
//! journal. A failed outbound call or check therefore leaves balances,
//! pools, lists and the journal untouched.
//!
//! The journal itself is never part of the staged copy, so staging costs
//! the same on the first call and the millionth.

use anchor_lang::prelude::*;

use crate::state::{Journal, TokenState, VaultState};

pub trait Staged: Clone {
    /// Records staged by the operation in flight.
    fn pending(&mut self) -> &mut Journal;
}

impl Staged for TokenState {
    fn pending(&mut self) -> &mut Journal {
        &mut self.pending
    }
}

impl Staged for VaultState {
    fn pending(&mut self) -> &mut Journal {
        &mut self.pending
    }
}

pub fn atomically<S, T, F>(live: &mut S, journal: &mut Journal, operation: &str, op: F) -> Result<T>
where
    S: Staged,
    F: FnOnce(&mut S) -> Result<T>,
{
    let mut staged = live.clone();

    match op(&mut staged) {
        Ok(out) => {
            journal.commit(staged.pending());
            *live = staged;
            Ok(out)
        }
        Err(err) => {
            msg!("{} rolled back: {}", operation, err);
            Err(err)
        }
    }
}
