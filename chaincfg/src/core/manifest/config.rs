// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{
    collections::{btree_map::Entry, BTreeMap},
    fmt,
};

use serde::{
    de::{self, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};

use super::TomlNetwork;

/// Root of a configuration manifest.
///
/// Scalar keys come before tables so the TOML rendering stays valid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contracts_directory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contracts_build_directory: Option<String>,
    #[serde(
        default,
        deserialize_with = "unique_networks",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub networks: BTreeMap<String, TomlNetwork>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compilers: Option<TomlCompilers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db: Option<TomlDb>,
}

/// Network names are map keys, and a repeated key is an error rather than an overwrite.
fn unique_networks<'de, D>(deserializer: D) -> Result<BTreeMap<String, TomlNetwork>, D::Error>
where
    D: Deserializer<'de>,
{
    struct NetworksVisitor;

    impl<'de> Visitor<'de> for NetworksVisitor {
        type Value = BTreeMap<String, TomlNetwork>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of network names to networks")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut networks = BTreeMap::new();
            while let Some((name, network)) = map.next_entry::<String, TomlNetwork>()? {
                match networks.entry(name) {
                    Entry::Vacant(entry) => {
                        entry.insert(network);
                    }
                    Entry::Occupied(entry) => {
                        return Err(de::Error::custom(format!(
                            "duplicate network `{}`",
                            entry.key()
                        )));
                    }
                }
            }
            Ok(networks)
        }
    }

    deserializer.deserialize_map(NetworksVisitor)
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TomlCompilers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solc: Option<TomlSolc>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TomlSolc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimizer: Option<TomlOptimizer>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TomlOptimizer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runs: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TomlDb {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::manifest::{parse_str, Format, TomlNetworkId};

    const TOML: &str = r#"
contracts_directory = "./contracts"

[networks.development]
host = "192.168.0.2"
port = 8545
network_id = "*"

[compilers.solc.optimizer]
enabled = true
runs = 200

[db]
enabled = false
"#;

    #[test]
    fn parse_toml() {
        let manifest: TomlConfig = parse_str(TOML, Format::Toml).unwrap();
        assert_eq!(manifest.contracts_directory.as_deref(), Some("./contracts"));
        let dev = &manifest.networks["development"];
        assert_eq!(dev.host.as_deref(), Some("192.168.0.2"));
        assert_eq!(dev.port, Some(8545));
        assert_eq!(dev.network_id, Some(TomlNetworkId::Text("*".into())));
        let optimizer = manifest
            .compilers
            .and_then(|c| c.solc)
            .and_then(|s| s.optimizer)
            .unwrap();
        assert_eq!(optimizer.enabled, Some(true));
        assert_eq!(optimizer.runs, Some(200));
        assert_eq!(manifest.db.unwrap().enabled, Some(false));
    }

    #[test]
    fn parse_json_matches_toml() {
        let json = r#"{
            "networks": {
                "development": { "host": "192.168.0.2", "port": 8545, "network_id": "*" }
            },
            "contracts_directory": "./contracts",
            "compilers": { "solc": { "optimizer": { "enabled": true, "runs": 200 } } },
            "db": { "enabled": false }
        }"#;
        let from_json: TomlConfig = parse_str(json, Format::Json).unwrap();
        let from_toml: TomlConfig = parse_str(TOML, Format::Toml).unwrap();
        assert_eq!(from_json, from_toml);
    }

    #[test]
    fn unknown_keys_rejected() {
        let err = parse_str::<TomlConfig>("contract_directory = \"./contracts\"", Format::Toml)
            .unwrap_err();
        assert!(err.to_string().contains("contract_directory"), "{err}");

        let err = parse_str::<TomlConfig>(
            r#"{"db": {"enabled": false, "path": "db"}}"#,
            Format::Json,
        )
        .unwrap_err();
        assert!(err.to_string().contains("path"), "{err}");
    }

    #[test]
    fn duplicate_network_rejected() {
        let json = r#"{"networks": {
            "development": { "host": "192.168.0.2", "port": 8545, "network_id": "*" },
            "development": { "host": "10.0.0.1", "port": 9999, "network_id": "*" }
        }}"#;
        let err = parse_str::<TomlConfig>(json, Format::Json).unwrap_err();
        assert!(err.to_string().contains("duplicate network `development`"), "{err}");

        let toml = "[networks.development]\nport = 8545\n\n[networks.development]\nport = 9999\n";
        assert!(parse_str::<TomlConfig>(toml, Format::Toml).is_err());
    }

    #[test]
    fn json_type_error_names_field() {
        let json = r#"{"networks": {"development": {"host": "192.168.0.2", "port": "8545"}}}"#;
        let err = parse_str::<TomlConfig>(json, Format::Json).unwrap_err();
        assert!(err.to_string().contains("networks.development.port"), "{err}");
    }

    #[test]
    fn toml_rendering_parses_back() {
        let manifest: TomlConfig = parse_str(TOML, Format::Toml).unwrap();
        let rendered = toml::to_string_pretty(&manifest).unwrap();
        let reparsed: TomlConfig = parse_str(&rendered, Format::Toml).unwrap();
        assert_eq!(reparsed, manifest);
    }
}
