use anchor_lang::prelude::*;
use primitive_types::U256;

/// 256-bit token amount as carried inside emitted records.
/// Encoded as four little-endian u64 limbs, least significant first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct TokenAmount(pub U256);

impl TokenAmount {
    pub const SIZE: usize = 32;
}

impl From<U256> for TokenAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl AnchorSerialize for TokenAmount {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for limb in self.0 .0.iter() {
            limb.serialize(writer)?;
        }
        Ok(())
    }
}

impl AnchorDeserialize for TokenAmount {
    fn deserialize_reader<R: std::io::Read>(reader: &mut R) -> std::io::Result<Self> {
        let mut limbs = [0u64; 4];
        for limb in limbs.iter_mut() {
            *limb = u64::deserialize_reader(reader)?;
        }
        Ok(Self(U256(limbs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_as_fixed_little_endian_limbs() {
        let amount = TokenAmount(U256([2, 1, 0, 0]));
        let mut bytes = Vec::new();
        amount.serialize(&mut bytes).unwrap();

        assert_eq!(bytes.len(), TokenAmount::SIZE);
        assert_eq!(bytes[0], 2);
        assert_eq!(bytes[8], 1);

        let decoded = TokenAmount::deserialize_reader(&mut bytes.as_slice()).unwrap();
        assert_eq!(decoded, amount);
    }
}
