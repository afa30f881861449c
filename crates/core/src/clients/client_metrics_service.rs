//! Client-book metrics service.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;

use crate::errors::Result;

use super::{
    ClientBookSummary, ClientMetricsServiceTrait, ClientPatrimony, ClientRecord,
    ClientRepositoryTrait, SuitabilitySlice,
};

/// Computes book-level aggregates over the client registry.
pub struct ClientMetricsService {
    repository: Arc<dyn ClientRepositoryTrait>,
}

impl ClientMetricsService {
    pub fn new(repository: Arc<dyn ClientRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl ClientMetricsServiceTrait for ClientMetricsService {
    fn get_book_summary(&self) -> Result<ClientBookSummary> {
        debug!("Computing client book summary");
        let clients = self.repository.get_clients()?;

        let active_clients = clients.iter().filter(|c| c.is_active).count();
        let total_patrimony: Decimal = clients.iter().map(|c| c.patrimony).sum();
        let pending_reviews = clients.iter().filter(|c| c.is_pending_review()).count();

        let profiles: Vec<Decimal> = clients.iter().filter_map(|c| c.ips_risk_profile).collect();
        let avg_risk_profile = if profiles.is_empty() {
            None
        } else {
            Some(profiles.iter().sum::<Decimal>() / Decimal::from(profiles.len()))
        };

        Ok(ClientBookSummary {
            active_clients,
            total_patrimony,
            pending_reviews,
            avg_risk_profile,
        })
    }

    fn get_patrimony_by_suitability(&self) -> Result<Vec<SuitabilitySlice>> {
        let clients = self.repository.get_clients()?;

        let mut by_suitability: HashMap<String, Decimal> = HashMap::new();
        for client in &clients {
            *by_suitability
                .entry(client.suitability.clone())
                .or_insert(Decimal::zero()) += client.patrimony;
        }

        let mut slices: Vec<SuitabilitySlice> = by_suitability
            .into_iter()
            .map(|(suitability, patrimony)| SuitabilitySlice {
                suitability,
                patrimony,
            })
            .collect();
        slices.sort_by(|a, b| b.patrimony.cmp(&a.patrimony));

        Ok(slices)
    }

    fn get_patrimony_by_client(&self) -> Result<Vec<ClientPatrimony>> {
        let clients = self.repository.get_clients()?;

        let mut totals: Vec<ClientPatrimony> = clients
            .into_iter()
            .map(|c| ClientPatrimony {
                name: c.name,
                patrimony: c.patrimony,
            })
            .collect();
        totals.sort_by(|a, b| b.patrimony.cmp(&a.patrimony));

        Ok(totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    struct InMemoryClientRepository {
        clients: Vec<ClientRecord>,
    }

    impl ClientRepositoryTrait for InMemoryClientRepository {
        fn get_clients(&self) -> Result<Vec<ClientRecord>> {
            Ok(self.clients.clone())
        }
    }

    fn client(
        code: &str,
        active: bool,
        suitability: &str,
        risk: Option<Decimal>,
        patrimony: Decimal,
    ) -> ClientRecord {
        ClientRecord {
            client_code: code.to_string(),
            is_active: active,
            name: format!("Cliente {}", code),
            manager: "Gestor A".to_string(),
            suitability: suitability.to_string(),
            ips_risk_profile: risk,
            ips_type: "Padrão".to_string(),
            patrimony,
        }
    }

    fn service(clients: Vec<ClientRecord>) -> ClientMetricsService {
        ClientMetricsService::new(Arc::new(InMemoryClientRepository { clients }))
    }

    #[test]
    fn test_book_summary() {
        let service = service(vec![
            client("FINACAP002", true, "C", Some(dec!(2)), dec!(500000)),
            client("FINACAP009", true, "M", Some(dec!(5)), dec!(300000)),
            client("FINACAP011", false, "A", None, dec!(200000)),
        ]);

        let summary = service.get_book_summary().unwrap();
        assert_eq!(summary.active_clients, 2);
        assert_eq!(summary.total_patrimony, dec!(1000000));
        assert_eq!(summary.pending_reviews, 1);
        assert_eq!(summary.avg_risk_profile, Some(dec!(3.5)));
    }

    #[test]
    fn test_book_summary_on_empty_registry() {
        let service = service(Vec::new());

        let summary = service.get_book_summary().unwrap();
        assert_eq!(summary.active_clients, 0);
        assert_eq!(summary.total_patrimony, Decimal::ZERO);
        assert_eq!(summary.pending_reviews, 0);
        assert_eq!(summary.avg_risk_profile, None);
    }

    #[test]
    fn test_patrimony_by_suitability_sorted_desc() {
        let service = service(vec![
            client("FINACAP002", true, "C", None, dec!(100)),
            client("FINACAP003", true, "M", None, dec!(700)),
            client("FINACAP004", true, "C", None, dec!(300)),
        ]);

        let slices = service.get_patrimony_by_suitability().unwrap();
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].suitability, "M");
        assert_eq!(slices[0].patrimony, dec!(700));
        assert_eq!(slices[1].suitability, "C");
        assert_eq!(slices[1].patrimony, dec!(400));
    }

    #[test]
    fn test_patrimony_by_client_sorted_desc() {
        let service = service(vec![
            client("FINACAP002", true, "C", None, dec!(100)),
            client("FINACAP003", true, "M", None, dec!(700)),
        ]);

        let totals = service.get_patrimony_by_client().unwrap();
        assert_eq!(totals[0].name, "Cliente FINACAP003");
        assert_eq!(totals[1].patrimony, dec!(100));
    }
}
