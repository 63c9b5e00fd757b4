use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolValue;

/// A decoded update payload: one value per asset address.
///
/// The wire form is the ABI encoding of `(address[], uint256[])`. The two
/// arrays are index-aligned and always equal in length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceUpdate {
    /// The asset addresses to update.
    pub assets: Vec<Address>,
    /// The values to set, index-aligned with `assets`.
    pub values: Vec<U256>,
}

impl PriceUpdate {
    /// Returns a new update, failing with [`PayloadDecodeError::LengthMismatch`] if the
    /// arrays differ in length.
    pub fn new(assets: Vec<Address>, values: Vec<U256>) -> Result<Self, PayloadDecodeError> {
        if assets.len() != values.len() {
            return Err(PayloadDecodeError::LengthMismatch {
                assets: assets.len(),
                values: values.len(),
            });
        }
        Ok(Self { assets, values })
    }

    /// Decodes an update from the ABI encoding of `(address[], uint256[])`.
    pub fn decode(payload: &[u8]) -> Result<Self, PayloadDecodeError> {
        let (assets, values) = <(Vec<Address>, Vec<U256>)>::abi_decode_params(payload)?;
        Self::new(assets, values)
    }

    /// Encodes the update as the ABI encoding of `(address[], uint256[])`.
    pub fn encode(&self) -> Bytes {
        (self.assets.clone(), self.values.clone()).abi_encode_params().into()
    }

    /// Returns the number of records in the update.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Returns whether the update contains no records.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// An error decoding an update payload.
#[derive(Debug, thiserror::Error)]
pub enum PayloadDecodeError {
    /// The payload is not a valid `(address[], uint256[])` ABI encoding.
    #[error("invalid update payload encoding: {0}")]
    Abi(#[from] alloy_sol_types::Error),
    /// The decoded arrays differ in length.
    #[error("mismatched record lengths: {assets} addresses, {values} values")]
    LengthMismatch {
        /// The number of decoded addresses.
        assets: usize,
        /// The number of decoded values.
        values: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_should_roundtrip_payload() {
        let update = PriceUpdate::new(
            vec![
                address!("6325439389E0797Ab35752B4F43a14C004f22A9c"),
                address!("fe8c1ac365ba6780aec5a985d989b327c27670a1"),
            ],
            vec![U256::from(415_000_000_000_000_000u128), U256::from(800_000_000_000_000_000u128)],
        )
        .unwrap();

        let decoded = PriceUpdate::decode(&update.encode()).unwrap();
        assert_eq!(decoded, update);
    }

    #[test]
    fn test_should_reject_mismatched_lengths() {
        let err = PriceUpdate::new(
            vec![address!("6325439389E0797Ab35752B4F43a14C004f22A9c")],
            vec![U256::from(1), U256::from(2)],
        )
        .unwrap_err();
        assert!(matches!(err, PayloadDecodeError::LengthMismatch { assets: 1, values: 2 }));
    }

    #[test]
    fn test_should_reject_malformed_payload() {
        let err = PriceUpdate::decode(&[0xde, 0xad, 0xbe, 0xef]).unwrap_err();
        assert!(matches!(err, PayloadDecodeError::Abi(_)));
    }
}
