//! Registry of deployed contract addresses.
//!
//! The deploy scripts emit a JSON object mapping logical contract names to
//! on-chain Hash160 strings. The initializer loads it once and treats it as
//! read-only.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Mapping from logical contract name to deployed Hash160 address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeployedContracts {
    contracts: BTreeMap<String, String>,
}

impl DeployedContracts {
    /// Loads the registry from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::RegistryNotFound`] when the file is absent and
    /// [`CoreError::Json`] when it does not parse as a name → address object.
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CoreError::RegistryNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let registry: Self = serde_json::from_str(&content)?;
        debug!(
            path = %path.display(),
            contracts = registry.len(),
            "loaded deployed contract registry"
        );
        Ok(registry)
    }

    /// Looks up the deployed address for a logical contract name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.contracts.get(name).map(String::as_str)
    }

    /// Whether the named contract is present in the registry.
    pub fn contains(&self, name: &str) -> bool {
        self.contracts.contains_key(name)
    }

    /// Number of deployed contracts.
    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    /// Iterates name → address pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.contracts
            .iter()
            .map(|(name, hash)| (name.as_str(), hash.as_str()))
    }
}

impl FromIterator<(String, String)> for DeployedContracts {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            contracts: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn sample() -> DeployedContracts {
        [
            (
                "ServiceLayerGateway".to_string(),
                "0x0102030405060708090a0b0c0d0e0f1011121314".to_string(),
            ),
            (
                "OracleService".to_string(),
                "0x14131211100f0e0d0c0b0a090807060504030201".to_string(),
            ),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"ServiceLayerGateway": "0x0102030405060708090a0b0c0d0e0f1011121314"}}"#
        )
        .unwrap();

        let registry = DeployedContracts::load(file.path()).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("ServiceLayerGateway"),
            Some("0x0102030405060708090a0b0c0d0e0f1011121314")
        );
        assert_eq!(registry.get("OracleService"), None);
    }

    #[test]
    fn missing_file_is_a_dedicated_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployed_contracts.json");
        assert!(matches!(
            DeployedContracts::load(&path),
            Err(CoreError::RegistryNotFound(p)) if p == path
        ));
    }

    #[test]
    fn malformed_json_surfaces_serde_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            DeployedContracts::load(file.path()),
            Err(CoreError::Json(_))
        ));
    }

    #[test]
    fn iteration_is_name_ordered() {
        let registry = sample();
        let names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["OracleService", "ServiceLayerGateway"]);
    }
}
