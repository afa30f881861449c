//! Client registry domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::PENDING_REVIEW_RISK_THRESHOLD;
use crate::utils::money_utils::parse_monetary;

/// One client of the manager's book, as stored in the client registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub client_code: String,
    pub is_active: bool,
    pub name: String,
    pub manager: String,
    /// Suitability bucket label (A/C/M/S/U).
    pub suitability: String,
    /// IPS risk-profile score. The registry column is inconsistently
    /// populated, so this is the numeric coercion of whatever was stored.
    pub ips_risk_profile: Option<Decimal>,
    pub ips_type: String,
    /// Patrimony under management, base currency.
    pub patrimony: Decimal,
}

impl ClientRecord {
    /// Whether this client's IPS review is overdue.
    pub fn is_pending_review(&self) -> bool {
        let threshold = Decimal::from_str_radix(PENDING_REVIEW_RISK_THRESHOLD, 10)
            .unwrap_or_else(|_| Decimal::from(4));
        self.ips_risk_profile
            .map_or(false, |profile| profile > threshold)
    }

    /// Normalizes the registry's active flag ("Sim ", "sim", "Não"...).
    pub fn parse_active_flag(raw: &str) -> bool {
        raw.trim().eq_ignore_ascii_case("sim")
    }

    /// Coerces the registry's risk-profile text to a number, tolerating the
    /// same formatting noise as monetary columns. Unparseable values become
    /// `None` rather than failing the record.
    pub fn parse_risk_profile(raw: &str) -> Option<Decimal> {
        parse_monetary(raw)
    }
}

/// Headline aggregates over the whole client book.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientBookSummary {
    pub active_clients: usize,
    pub total_patrimony: Decimal,
    /// Clients whose risk profile is above the review threshold.
    pub pending_reviews: usize,
    /// Mean risk profile over clients that have one; `None` when no client
    /// has a usable score.
    pub avg_risk_profile: Option<Decimal>,
}

/// Patrimony aggregated over one suitability bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuitabilitySlice {
    pub suitability: String,
    pub patrimony: Decimal,
}

/// Patrimony of one client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPatrimony {
    pub name: String,
    pub patrimony: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_active_flag() {
        assert!(ClientRecord::parse_active_flag("Sim"));
        assert!(ClientRecord::parse_active_flag("  sim "));
        assert!(!ClientRecord::parse_active_flag("Não"));
        assert!(!ClientRecord::parse_active_flag(""));
    }

    #[test]
    fn test_parse_risk_profile_tolerates_noise() {
        assert_eq!(ClientRecord::parse_risk_profile("5"), Some(dec!(5)));
        assert_eq!(ClientRecord::parse_risk_profile("4,5"), Some(dec!(4.5)));
        assert_eq!(ClientRecord::parse_risk_profile("Não disponível"), None);
    }

    #[test]
    fn test_pending_review_threshold() {
        let mut client = ClientRecord {
            client_code: "FINACAP009".to_string(),
            is_active: true,
            name: "Cliente".to_string(),
            manager: "Gestor".to_string(),
            suitability: "M".to_string(),
            ips_risk_profile: Some(dec!(5)),
            ips_type: "Padrão".to_string(),
            patrimony: dec!(100000),
        };
        assert!(client.is_pending_review());

        client.ips_risk_profile = Some(dec!(4));
        assert!(!client.is_pending_review());

        client.ips_risk_profile = None;
        assert!(!client.is_pending_review());
    }
}
