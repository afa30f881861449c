//! Allocation policy configuration.
//!
//! Targets, memberships, and instrument overlays are versionable
//! configuration data, loaded from a JSON document and validated up front.
//! A malformed policy is an operator error and fails fast; it is never
//! papered over with defaults.

use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

use super::{BucketPolicy, InstrumentOverlay};

/// The policy document shipped with the application, used until an operator
/// supplies an external one.
const DEFAULT_POLICY_JSON: &str = include_str!("default_policy.json");

/// The complete allocation policy: bucket targets with their member
/// portfolios, plus the blended-instrument overlay table.
///
/// Bucket order in the document is preserved; conformance rows come out in
/// the same order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationConfig {
    pub buckets: Vec<BucketPolicy>,
    #[serde(default)]
    pub overlays: Vec<InstrumentOverlay>,
}

impl AllocationConfig {
    /// Parses and validates a policy document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AllocationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a policy document from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The built-in policy document.
    pub fn default_policy() -> Result<Self> {
        Self::from_json(DEFAULT_POLICY_JSON)
    }

    /// Finds the overlay for an asset, by exact id match.
    pub fn overlay_for(&self, asset_id: &str) -> Option<&InstrumentOverlay> {
        self.overlays.iter().find(|o| o.asset_id == asset_id)
    }

    /// The union of every bucket's member portfolios, in first-seen order.
    /// This is the portfolio list a position source should fetch.
    pub fn all_member_portfolios(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut portfolios = Vec::new();
        for bucket in &self.buckets {
            let mut members: Vec<&String> = bucket.members.iter().collect();
            members.sort();
            for member in members {
                if seen.insert(member.clone()) {
                    portfolios.push(member.clone());
                }
            }
        }
        portfolios
    }

    fn validate(&self) -> Result<()> {
        let mut bucket_ids = HashSet::new();
        for bucket in &self.buckets {
            if bucket.bucket_id.trim().is_empty() {
                return Err(Error::InvalidConfigValue(
                    "Bucket id cannot be empty".to_string(),
                ));
            }
            if !bucket_ids.insert(bucket.bucket_id.as_str()) {
                return Err(Error::InvalidConfigValue(format!(
                    "Duplicate bucket id '{}'",
                    bucket.bucket_id
                )));
            }
            for (category, weight) in &bucket.target_weights {
                if *weight < Decimal::ZERO || *weight > Decimal::ONE {
                    return Err(Error::InvalidConfigValue(format!(
                        "Target weight for '{}' in bucket '{}' must be within [0, 1], got {}",
                        category.label(),
                        bucket.bucket_id,
                        weight
                    )));
                }
            }
        }

        let mut overlay_ids = HashSet::new();
        for overlay in &self.overlays {
            if overlay.asset_id.trim().is_empty() {
                return Err(Error::InvalidConfigValue(
                    "Overlay asset id cannot be empty".to_string(),
                ));
            }
            if !overlay_ids.insert(overlay.asset_id.as_str()) {
                return Err(Error::InvalidConfigValue(format!(
                    "Duplicate overlay for asset '{}'",
                    overlay.asset_id
                )));
            }
            for (category, fraction) in &overlay.components {
                if fraction.abs() > Decimal::ONE {
                    return Err(Error::InvalidConfigValue(format!(
                        "Overlay fraction for '{}' on asset '{}' must be within [-1, 1], got {}",
                        category.label(),
                        overlay.asset_id,
                        fraction
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::AllocationCategory;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_default_policy_is_valid() {
        let config = AllocationConfig::default_policy().unwrap();
        assert!(!config.buckets.is_empty());
        assert!(!config.overlays.is_empty());
    }

    #[test]
    fn test_default_policy_preserves_duplicated_memberships() {
        // Buckets S and U intentionally share their whole membership list.
        let config = AllocationConfig::default_policy().unwrap();
        let s = config.buckets.iter().find(|b| b.bucket_id == "S").unwrap();
        let u = config.buckets.iter().find(|b| b.bucket_id == "U").unwrap();
        assert_eq!(s.members, u.members);
        assert!(!s.members.is_empty());
    }

    #[test]
    fn test_default_policy_bucket_m_weights() {
        let config = AllocationConfig::default_policy().unwrap();
        let m = config.buckets.iter().find(|b| b.bucket_id == "M").unwrap();
        assert_eq!(
            m.target_weights.get(&AllocationCategory::Selic),
            Some(&dec!(0.20))
        );
        assert_eq!(
            m.target_weights.get(&AllocationCategory::RendaVariavel),
            Some(&dec!(0.30))
        );
    }

    #[test]
    fn test_all_member_portfolios_deduplicates_across_buckets() {
        let json = r#"{
            "buckets": [
                {"bucketId": "S", "targetWeights": {}, "members": ["P2", "P1"]},
                {"bucketId": "U", "targetWeights": {}, "members": ["P2", "P3"]}
            ]
        }"#;
        let config = AllocationConfig::from_json(json).unwrap();
        assert_eq!(config.all_member_portfolios(), vec!["P1", "P2", "P3"]);
    }

    #[test]
    fn test_weight_out_of_range_is_rejected() {
        let json = r#"{
            "buckets": [
                {"bucketId": "M", "targetWeights": {"Selic": 1.2}, "members": ["P1"]}
            ]
        }"#;
        let err = AllocationConfig::from_json(json).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(_)));
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let json = r#"{
            "buckets": [
                {"bucketId": "M", "targetWeights": {"Cripto": 0.5}, "members": []}
            ]
        }"#;
        let err = AllocationConfig::from_json(json).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_duplicate_bucket_id_is_rejected() {
        let json = r#"{
            "buckets": [
                {"bucketId": "M", "targetWeights": {}, "members": []},
                {"bucketId": "M", "targetWeights": {}, "members": []}
            ]
        }"#;
        let err = AllocationConfig::from_json(json).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(_)));
    }

    #[test]
    fn test_overlay_fraction_out_of_range_is_rejected() {
        let json = r#"{
            "buckets": [],
            "overlays": [
                {"assetId": "X", "components": {"Renda Variável": -1.5}}
            ]
        }"#;
        let err = AllocationConfig::from_json(json).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(_)));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"buckets": [{{"bucketId": "C", "targetWeights": {{"Selic": 0.4}}, "members": ["FINACAP002"]}}]}}"#
        )
        .unwrap();

        let config = AllocationConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.buckets.len(), 1);
        assert_eq!(config.buckets[0].bucket_id, "C");
    }
}
