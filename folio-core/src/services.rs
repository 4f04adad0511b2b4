//! Service catalog - the project types offered on the contact form.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// One selectable service with its suggested budget range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub label: String,
    /// `[low, high]` suggested budget. Selecting the service pre-fills `low`.
    pub suggested_budget: (i64, i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServiceCatalog {
    services: Vec<Service>,
}

impl ServiceCatalog {
    pub fn new(services: Vec<Service>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for service in &services {
            if service.id.trim().is_empty() {
                return Err(DomainError::InvalidService {
                    id: service.id.clone(),
                    reason: "id is empty".into(),
                });
            }
            if !seen.insert(service.id.as_str()) {
                return Err(DomainError::InvalidService {
                    id: service.id.clone(),
                    reason: "duplicate id".into(),
                });
            }
            let (low, high) = service.suggested_budget;
            if low > high {
                return Err(DomainError::InvalidService {
                    id: service.id.clone(),
                    reason: format!("suggested budget {low} exceeds {high}"),
                });
            }
        }
        Ok(Self { services })
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn get(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Budget to pre-fill when `id` is selected.
    pub fn suggested_budget(&self, id: &str) -> Option<i64> {
        self.get(id).map(|s| s.suggested_budget.0)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
