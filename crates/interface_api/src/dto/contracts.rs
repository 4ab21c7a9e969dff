//! Contract DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_contract::beneficiary::{Beneficiary, Relationship};
use domain_contract::contract::{Contract, ContractStatus};
use domain_contract::plan::PlanType;

#[derive(Debug, Clone, Deserialize)]
pub struct BeneficiaryDto {
    pub name: String,
    pub national_id: String,
    pub date_of_birth: NaiveDate,
    pub relationship: Relationship,
    pub percentage: u8,
    pub phone: String,
}

impl From<BeneficiaryDto> for Beneficiary {
    fn from(dto: BeneficiaryDto) -> Self {
        Beneficiary {
            name: dto.name,
            national_id: dto.national_id,
            date_of_birth: dto.date_of_birth,
            relationship: dto.relationship,
            percentage: dto.percentage,
            phone: dto.phone,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateContractRequest {
    pub client_id: String,
    pub plan: PlanType,
    #[serde(default)]
    pub beneficiaries: Vec<BeneficiaryDto>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateContractStatusRequest {
    pub status: ContractStatus,
}

#[derive(Debug, Deserialize, Default)]
pub struct ContractListQuery {
    pub client_id: Option<String>,
    pub status: Option<ContractStatus>,
}

#[derive(Debug, Serialize)]
pub struct BeneficiaryResponse {
    pub name: String,
    pub national_id: String,
    pub relationship: Relationship,
    pub percentage: u8,
}

#[derive(Debug, Serialize)]
pub struct ContractResponse {
    pub id: String,
    pub client_id: String,
    pub plan: PlanType,
    pub status: ContractStatus,
    pub monthly_premium: Decimal,
    pub currency: String,
    pub beneficiaries: Vec<BeneficiaryResponse>,
    pub contracted_at: DateTime<Utc>,
    pub activated_at: Option<DateTime<Utc>>,
}

impl From<Contract> for ContractResponse {
    fn from(contract: Contract) -> Self {
        Self {
            id: contract.id.to_string(),
            client_id: contract.client_id.to_string(),
            plan: contract.plan,
            status: contract.status,
            monthly_premium: contract.monthly_premium.amount(),
            currency: contract.monthly_premium.currency().code().to_string(),
            beneficiaries: contract
                .beneficiaries
                .into_iter()
                .map(|b| BeneficiaryResponse {
                    name: b.name,
                    national_id: b.national_id,
                    relationship: b.relationship,
                    percentage: b.percentage,
                })
                .collect(),
            contracted_at: contract.contracted_at,
            activated_at: contract.activated_at,
        }
    }
}
