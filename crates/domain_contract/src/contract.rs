//! Contract aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClientId, ContractId, Money};

use crate::beneficiary::{validate_allocation, Beneficiary};
use crate::error::ContractError;
use crate::plan::PlanType;

/// Contract lifecycle status
///
/// New contracts are Pending until the first premium payment is approved.
/// Active contracts expire when a payment is missed; the overdue policy
/// itself lives outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    Pending,
    Active,
    Expired,
}

/// A purchased insurance plan belonging to one client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    /// Unique identifier
    pub id: ContractId,
    /// Owning client
    pub client_id: ClientId,
    /// Contracted plan
    pub plan: PlanType,
    /// Monthly premium owed, fixed at contracting time
    pub monthly_premium: Money,
    /// Beneficiary set; non-empty only for Life contracts
    pub beneficiaries: Vec<Beneficiary>,
    /// Lifecycle status
    pub status: ContractStatus,
    /// When the contract was taken out
    pub contracted_at: DateTime<Utc>,
    /// When the first payment was approved
    pub activated_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Contract {
    /// Creates a Pending contract after validating the beneficiary set
    ///
    /// Life plans delegate to the beneficiary allocator; Health plans must
    /// carry an empty set. Client identity is validated upstream by
    /// `domain_client`.
    pub fn new(
        client_id: ClientId,
        plan: PlanType,
        beneficiaries: Vec<Beneficiary>,
    ) -> Result<Self, ContractError> {
        if plan.requires_beneficiaries() {
            validate_allocation(&beneficiaries)?;
        } else if !beneficiaries.is_empty() {
            return Err(ContractError::BeneficiariesNotAllowed { plan });
        }

        let now = Utc::now();
        Ok(Self {
            id: ContractId::new_v7(),
            client_id,
            plan,
            monthly_premium: plan.monthly_premium(),
            beneficiaries,
            status: ContractStatus::Pending,
            contracted_at: now,
            activated_at: None,
            updated_at: now,
        })
    }

    /// True while the contract accepts claims
    pub fn is_active(&self) -> bool {
        self.status == ContractStatus::Active
    }

    /// Moves the contract to the given status
    ///
    /// Only Pending -> Active and Active -> Expired are legal.
    pub fn transition_to(&mut self, status: ContractStatus) -> Result<(), ContractError> {
        if !self.can_transition_to(status) {
            return Err(ContractError::InvalidStatusTransition {
                from: self.status,
                to: status,
            });
        }
        let now = Utc::now();
        if status == ContractStatus::Active {
            self.activated_at = Some(now);
        }
        self.status = status;
        self.updated_at = now;
        Ok(())
    }

    /// Activates a pending contract on its first approved payment
    pub fn activate(&mut self) -> Result<(), ContractError> {
        self.transition_to(ContractStatus::Active)
    }

    /// Expires an active contract after a missed payment
    pub fn expire(&mut self) -> Result<(), ContractError> {
        self.transition_to(ContractStatus::Expired)
    }

    fn can_transition_to(&self, target: ContractStatus) -> bool {
        use ContractStatus::*;
        matches!((self.status, target), (Pending, Active) | (Active, Expired))
    }
}

/// Filter for contract listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContractFilter {
    /// Restrict to one client's contracts
    pub client_id: Option<ClientId>,
    /// Restrict to one lifecycle status
    pub status: Option<ContractStatus>,
}

impl ContractFilter {
    /// All contracts of one client
    pub fn for_client(client_id: ClientId) -> Self {
        Self {
            client_id: Some(client_id),
            ..Default::default()
        }
    }

    /// All contracts in one status
    pub fn with_status(status: ContractStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// True if the contract passes the filter
    pub fn matches(&self, contract: &Contract) -> bool {
        self.client_id.map_or(true, |id| contract.client_id == id)
            && self.status.map_or(true, |s| contract.status == s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beneficiary::Relationship;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn beneficiary(national_id: &str, percentage: u8) -> Beneficiary {
        Beneficiary {
            name: "Ana Perez".to_string(),
            national_id: national_id.to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2001, 2, 3).unwrap(),
            relationship: Relationship::Child,
            percentage,
            phone: "3123456789".to_string(),
        }
    }

    #[test]
    fn test_health_contract_starts_pending() {
        let contract = Contract::new(ClientId::new(), PlanType::Health, vec![]).unwrap();
        assert_eq!(contract.status, ContractStatus::Pending);
        assert_eq!(contract.monthly_premium.amount(), dec!(69));
        assert!(!contract.is_active());
    }

    #[test]
    fn test_health_contract_rejects_beneficiaries() {
        let result = Contract::new(ClientId::new(), PlanType::Health, vec![beneficiary("123", 100)]);
        assert!(matches!(result, Err(ContractError::BeneficiariesNotAllowed { .. })));
    }

    #[test]
    fn test_life_contract_requires_full_allocation() {
        let result = Contract::new(ClientId::new(), PlanType::Life, vec![beneficiary("123", 60)]);
        assert!(matches!(result, Err(ContractError::InvalidBeneficiaries(_))));

        let contract = Contract::new(
            ClientId::new(),
            PlanType::Life,
            vec![beneficiary("123", 60), beneficiary("456", 40)],
        )
        .unwrap();
        assert_eq!(contract.monthly_premium.amount(), dec!(420));
    }

    #[test]
    fn test_lifecycle_transitions() {
        let mut contract = Contract::new(ClientId::new(), PlanType::Health, vec![]).unwrap();

        contract.activate().unwrap();
        assert!(contract.is_active());
        assert!(contract.activated_at.is_some());

        contract.expire().unwrap();
        assert_eq!(contract.status, ContractStatus::Expired);
    }

    #[test]
    fn test_illegal_transitions_rejected() {
        let mut contract = Contract::new(ClientId::new(), PlanType::Health, vec![]).unwrap();

        // Pending contracts cannot expire
        assert!(matches!(
            contract.expire(),
            Err(ContractError::InvalidStatusTransition { .. })
        ));

        contract.activate().unwrap();
        // Active contracts cannot activate again
        assert!(matches!(
            contract.activate(),
            Err(ContractError::InvalidStatusTransition { .. })
        ));

        contract.expire().unwrap();
        // Expired is terminal
        assert!(contract.activate().is_err());
        assert!(contract.expire().is_err());
    }

    #[test]
    fn test_filter_matching() {
        let contract = Contract::new(ClientId::new(), PlanType::Health, vec![]).unwrap();

        assert!(ContractFilter::default().matches(&contract));
        assert!(ContractFilter::for_client(contract.client_id).matches(&contract));
        assert!(!ContractFilter::for_client(ClientId::new()).matches(&contract));
        assert!(ContractFilter::with_status(ContractStatus::Pending).matches(&contract));
        assert!(!ContractFilter::with_status(ContractStatus::Active).matches(&contract));
    }
}
