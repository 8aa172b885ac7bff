//! Bech32 address transcoding between chain prefixes.
//!
//! A bech32 address is `<hrp>1<payload><checksum>`. The payload identifies the
//! key and is prefix-independent, so moving an account to another chain only
//! swaps the human-readable part and recomputes the checksum.

use bech32::{FromBase32, ToBase32, Variant};

use crate::error::ConsolidateError;
use crate::params::MigrationParams;

/// Decode an address into its human-readable prefix and payload bytes.
pub fn decode_payload(address: &str) -> Result<(String, Vec<u8>, Variant), ConsolidateError> {
    let (hrp, data, variant) = bech32::decode(address).map_err(|e| invalid(address, e))?;
    let bytes = Vec::<u8>::from_base32(&data).map_err(|e| invalid(address, e))?;
    Ok((hrp, bytes, variant))
}

/// Encode payload bytes under `prefix`.
pub fn encode_payload(
    prefix: &str,
    payload: &[u8],
    variant: Variant,
) -> Result<String, ConsolidateError> {
    bech32::encode(prefix, payload.to_base32(), variant).map_err(|e| ConsolidateError::InvalidAddress {
        address: prefix.to_string(),
        reason: e.to_string(),
    })
}

/// Re-encode `address` from `source_prefix` to `target_prefix`.
///
/// The payload bytes are carried over unchanged. Only classic bech32
/// checksums are accepted. An address that does not carry `source_prefix`
/// is refused, which is how an already-converted address is caught.
pub fn convert_address(
    address: &str,
    source_prefix: &str,
    target_prefix: &str,
) -> Result<String, ConsolidateError> {
    let (hrp, payload, variant) = decode_payload(address)?;
    if variant != Variant::Bech32 {
        return Err(ConsolidateError::InvalidAddress {
            address: address.to_string(),
            reason: "bech32m checksum, account addresses use bech32".to_string(),
        });
    }
    if hrp != source_prefix {
        return Err(ConsolidateError::WrongSourcePrefix {
            address: address.to_string(),
            expected: source_prefix.to_string(),
            found: hrp,
        });
    }
    encode_payload(target_prefix, &payload, variant)
}

fn invalid(address: &str, e: bech32::Error) -> ConsolidateError {
    ConsolidateError::InvalidAddress {
        address: address.to_string(),
        reason: e.to_string(),
    }
}

/// Converts addresses between a fixed pair of prefixes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressConverter {
    source_prefix: String,
    target_prefix: String,
}

impl AddressConverter {
    pub fn new(source_prefix: impl Into<String>, target_prefix: impl Into<String>) -> Self {
        Self {
            source_prefix: source_prefix.into(),
            target_prefix: target_prefix.into(),
        }
    }

    pub fn from_params(params: &MigrationParams) -> Self {
        Self::new(params.source_prefix.clone(), params.target_prefix.clone())
    }

    pub fn convert(&self, address: &str) -> Result<String, ConsolidateError> {
        convert_address(address, &self.source_prefix, &self.target_prefix)
    }

    pub fn source_prefix(&self) -> &str {
        &self.source_prefix
    }

    pub fn target_prefix(&self) -> &str {
        &self.target_prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST2_COSMOS: &str = "cosmos1fupfatmln5844rjafzp6d2vc825vav2xe277uu";
    const TEST2_GNO: &str = "g1fupfatmln5844rjafzp6d2vc825vav2x2kzaac";
    const LEDGER_COSMOS: &str = "cosmos1fz9nhh7upfn9sv02f3ck4zsu8uqaesmupv6pv2";
    const LEDGER_GNO: &str = "g1fz9nhh7upfn9sv02f3ck4zsu8uqaesmujsxzdw";

    #[test]
    fn converts_known_accounts() {
        assert_eq!(convert_address(TEST2_COSMOS, "cosmos", "g").unwrap(), TEST2_GNO);
        assert_eq!(convert_address(LEDGER_COSMOS, "cosmos", "g").unwrap(), LEDGER_GNO);
    }

    #[test]
    fn payload_is_preserved() {
        let (_, source, _) = decode_payload(TEST2_COSMOS).unwrap();
        let (hrp, target, _) = decode_payload(TEST2_GNO).unwrap();
        assert_eq!(hrp, "g");
        assert_eq!(source, target);
        assert_eq!(source.len(), 20);
    }

    #[test]
    fn already_converted_address_is_refused() {
        let err = convert_address(LEDGER_GNO, "cosmos", "g").unwrap_err();
        assert_eq!(
            err,
            ConsolidateError::WrongSourcePrefix {
                address: LEDGER_GNO.to_string(),
                expected: "cosmos".to_string(),
                found: "g".to_string(),
            }
        );
    }

    #[test]
    fn corrupted_checksum_is_invalid() {
        let mut bad = TEST2_COSMOS.to_string();
        bad.pop();
        bad.push('q');
        assert!(matches!(
            convert_address(&bad, "cosmos", "g"),
            Err(ConsolidateError::InvalidAddress { .. })
        ));
        assert!(matches!(
            convert_address("not-an-address", "cosmos", "g"),
            Err(ConsolidateError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn bech32m_address_is_invalid() {
        let (_, payload, _) = decode_payload(TEST2_COSMOS).unwrap();
        let bech32m = encode_payload("cosmos", &payload, Variant::Bech32m).unwrap();
        assert!(matches!(
            convert_address(&bech32m, "cosmos", "g"),
            Err(ConsolidateError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn converter_uses_params_prefixes() {
        let converter = AddressConverter::from_params(&MigrationParams::default());
        assert_eq!(converter.source_prefix(), "cosmos");
        assert_eq!(converter.target_prefix(), "g");
        assert_eq!(converter.convert(TEST2_COSMOS).unwrap(), TEST2_GNO);
    }
}
