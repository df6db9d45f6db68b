use std::collections::BTreeMap;

use anchor_lang::prelude::*;
use primitive_types::U256;

use crate::error::EmissionError;

/// Address-keyed balances and allowances. Absent keys read as zero and
/// zero values are never stored, so two ledgers with the same observable
/// balances compare equal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ledger {
    balances: BTreeMap<Pubkey, U256>,
    allowances: BTreeMap<(Pubkey, Pubkey), U256>,
    total_supply: U256,
}

impl Ledger {
    pub fn balance_of(&self, address: &Pubkey) -> U256 {
        self.balances.get(address).copied().unwrap_or_default()
    }

    pub fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> U256 {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    pub fn total_supply(&self) -> U256 {
        self.total_supply
    }

    pub fn balances(&self) -> impl Iterator<Item = (&Pubkey, &U256)> {
        self.balances.iter()
    }

    pub fn allowances(&self) -> impl Iterator<Item = (&(Pubkey, Pubkey), &U256)> {
        self.allowances.iter()
    }

    /// Sum of every balance. Equals `total_supply` whenever the ledger is at rest.
    pub fn circulating(&self) -> Result<U256> {
        let mut sum = U256::zero();
        for balance in self.balances.values() {
            sum = sum
                .checked_add(*balance)
                .ok_or(EmissionError::MathOverflow)?;
        }
        Ok(sum)
    }

    pub(crate) fn credit(&mut self, address: Pubkey, amount: U256) -> Result<()> {
        let next = self
            .balance_of(&address)
            .checked_add(amount)
            .ok_or(EmissionError::MathOverflow)?;
        self.set_balance(address, next);
        Ok(())
    }

    pub(crate) fn debit(&mut self, address: Pubkey, amount: U256) -> Result<()> {
        let next = self
            .balance_of(&address)
            .checked_sub(amount)
            .ok_or(EmissionError::MathOverflow)?;
        self.set_balance(address, next);
        Ok(())
    }

    pub(crate) fn set_allowance(&mut self, owner: Pubkey, spender: Pubkey, amount: U256) {
        if amount.is_zero() {
            self.allowances.remove(&(owner, spender));
        } else {
            self.allowances.insert((owner, spender), amount);
        }
    }

    pub(crate) fn set_total_supply(&mut self, total_supply: U256) {
        self.total_supply = total_supply;
    }

    fn set_balance(&mut self, address: Pubkey, amount: U256) {
        if amount.is_zero() {
            self.balances.remove(&address);
        } else {
            self.balances.insert(address, amount);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_balances_are_not_stored() {
        let alice = Pubkey::new_from_array([1; 32]);
        let mut ledger = Ledger::default();

        ledger.credit(alice, U256::from(5u64)).unwrap();
        ledger.debit(alice, U256::from(5u64)).unwrap();

        assert_eq!(ledger.balance_of(&alice), U256::zero());
        assert_eq!(ledger, Ledger::default());
    }

    #[test]
    fn debit_past_zero_is_an_error() {
        let alice = Pubkey::new_from_array([1; 32]);
        let mut ledger = Ledger::default();
        ledger.credit(alice, U256::from(1u64)).unwrap();

        assert!(ledger.debit(alice, U256::from(2u64)).is_err());
        assert_eq!(ledger.balance_of(&alice), U256::from(1u64));
    }

    #[test]
    fn credit_overflow_is_an_error() {
        let alice = Pubkey::new_from_array([1; 32]);
        let mut ledger = Ledger::default();
        ledger.credit(alice, U256::MAX).unwrap();

        assert!(ledger.credit(alice, U256::one()).is_err());
        assert_eq!(ledger.balance_of(&alice), U256::MAX);
    }
}
