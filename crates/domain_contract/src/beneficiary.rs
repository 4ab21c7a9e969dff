//! Beneficiary allocation
//!
//! Life contracts carry a set of beneficiaries, each entitled to an
//! integer percentage of the payout. The set is replaced wholesale while a
//! contract is being drafted; the authoritative check runs once at
//! submission time. [`allocated_percentage`] exists so forms can show a
//! running sum while the set is edited, but its result is advisory only.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Family relationship between the client and a beneficiary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    Spouse,
    Child,
    Parent,
    Sibling,
    Other,
}

/// A person entitled to a share of a Life contract's payout
///
/// Owned exclusively by one contract; beneficiaries are never shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beneficiary {
    /// Full name
    pub name: String,
    /// National id, used to detect duplicate entries
    pub national_id: String,
    /// Date of birth
    pub date_of_birth: NaiveDate,
    /// Relationship to the contract holder
    pub relationship: Relationship,
    /// Integer payout share, 1-100
    pub percentage: u8,
    /// Contact phone
    pub phone: String,
}

/// Errors raised when a beneficiary set fails validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AllocationError {
    #[error("A Life contract requires at least one beneficiary")]
    EmptySet,

    #[error("Beneficiary {national_id} has percentage {percentage}, outside 1-100")]
    InvalidPercentage { national_id: String, percentage: u8 },

    #[error("Beneficiary percentages sum to {total}, expected exactly 100")]
    SumMismatch { total: u32 },

    #[error("Beneficiary national id {national_id} appears more than once")]
    DuplicateBeneficiary { national_id: String },
}

/// Running sum of declared percentages
///
/// Used for live form feedback while a set is edited. Not authoritative:
/// [`validate_allocation`] decides at submission.
pub fn allocated_percentage(beneficiaries: &[Beneficiary]) -> u32 {
    beneficiaries.iter().map(|b| u32::from(b.percentage)).sum()
}

/// Validates a beneficiary set for a Life contract
///
/// Pure check with no side effects; persistence is the caller's
/// responsibility. The set is accepted iff it is non-empty, every
/// percentage lies in [1,100], national ids are unique, and the
/// percentages sum to exactly 100 (integer equality, no rounding
/// tolerance).
pub fn validate_allocation(beneficiaries: &[Beneficiary]) -> Result<(), AllocationError> {
    if beneficiaries.is_empty() {
        return Err(AllocationError::EmptySet);
    }

    for beneficiary in beneficiaries {
        if beneficiary.percentage < 1 || beneficiary.percentage > 100 {
            return Err(AllocationError::InvalidPercentage {
                national_id: beneficiary.national_id.clone(),
                percentage: beneficiary.percentage,
            });
        }
    }

    for (i, beneficiary) in beneficiaries.iter().enumerate() {
        if beneficiaries[..i]
            .iter()
            .any(|other| other.national_id == beneficiary.national_id)
        {
            return Err(AllocationError::DuplicateBeneficiary {
                national_id: beneficiary.national_id.clone(),
            });
        }
    }

    let total = allocated_percentage(beneficiaries);
    if total != 100 {
        return Err(AllocationError::SumMismatch { total });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beneficiary(national_id: &str, percentage: u8) -> Beneficiary {
        Beneficiary {
            name: format!("Beneficiary {national_id}"),
            national_id: national_id.to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            relationship: Relationship::Child,
            percentage,
            phone: "3123456789".to_string(),
        }
    }

    #[test]
    fn test_empty_set_rejected() {
        assert_eq!(validate_allocation(&[]), Err(AllocationError::EmptySet));
    }

    #[test]
    fn test_sum_95_rejected_then_fourth_entry_fixes_it() {
        let mut set = vec![
            beneficiary("10000001", 70),
            beneficiary("10000002", 20),
            beneficiary("10000003", 5),
        ];
        assert_eq!(
            validate_allocation(&set),
            Err(AllocationError::SumMismatch { total: 95 })
        );

        set.push(beneficiary("10000004", 10));
        assert!(validate_allocation(&set).is_ok());
    }

    #[test]
    fn test_zero_percentage_rejected() {
        let set = vec![beneficiary("10000001", 0), beneficiary("10000002", 100)];
        assert!(matches!(
            validate_allocation(&set),
            Err(AllocationError::InvalidPercentage { percentage: 0, .. })
        ));
    }

    #[test]
    fn test_over_100_percentage_rejected() {
        let set = vec![beneficiary("10000001", 101)];
        assert!(matches!(
            validate_allocation(&set),
            Err(AllocationError::InvalidPercentage { percentage: 101, .. })
        ));
    }

    #[test]
    fn test_duplicate_national_id_rejected() {
        let set = vec![beneficiary("10000001", 50), beneficiary("10000001", 50)];
        assert_eq!(
            validate_allocation(&set),
            Err(AllocationError::DuplicateBeneficiary {
                national_id: "10000001".to_string()
            })
        );
    }

    #[test]
    fn test_single_beneficiary_at_100() {
        let set = vec![beneficiary("10000001", 100)];
        assert!(validate_allocation(&set).is_ok());
    }

    #[test]
    fn test_running_sum_helper() {
        let set = vec![beneficiary("10000001", 70), beneficiary("10000002", 20)];
        assert_eq!(allocated_percentage(&set), 90);
    }
}
