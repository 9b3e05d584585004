// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use serde::{Deserialize, Serialize};

/// A `[networks.<name>]` table.
///
/// Integers are read as `i64` so range checks report the offending value instead of a serde
/// type error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TomlNetwork {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_id: Option<TomlNetworkId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

/// `network_id` may be written either as an integer or as a string (`"5777"` or `"*"`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TomlNetworkId {
    Number(i64),
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_id_either_form() {
        let net: TomlNetwork = toml::from_str("network_id = 5777").unwrap();
        assert_eq!(net.network_id, Some(TomlNetworkId::Number(5777)));

        let net: TomlNetwork = toml::from_str("network_id = \"5777\"").unwrap();
        assert_eq!(net.network_id, Some(TomlNetworkId::Text("5777".into())));

        let net: TomlNetwork = serde_json::from_str(r#"{"network_id": "*"}"#).unwrap();
        assert_eq!(net.network_id, Some(TomlNetworkId::Text("*".into())));
    }

    #[test]
    fn network_id_rejects_other_types() {
        assert!(toml::from_str::<TomlNetwork>("network_id = true").is_err());
        assert!(serde_json::from_str::<TomlNetwork>(r#"{"network_id": [1]}"#).is_err());
    }
}
