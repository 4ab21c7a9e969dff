//! Plan catalogue
//!
//! The brokerage sells two plans. Premiums and the closed set of
//! reimbursable claim tiers (fixed co-pay amounts) are part of the plan
//! definition; free-form claim amounts are rejected at submission.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{Currency, Money};

/// The insurance plans on offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    /// Medical expense cover, $69/month
    Health,
    /// Life cover with beneficiaries, $420/month
    Life,
}

impl PlanType {
    /// Monthly premium owed under this plan
    pub fn monthly_premium(&self) -> Money {
        let amount = match self {
            PlanType::Health => 69,
            PlanType::Life => 420,
        };
        Money::new(Decimal::from(amount), Currency::USD)
    }

    /// The fixed reimbursable tiers a claim amount must match
    pub fn reimbursable_tiers(&self) -> Vec<Money> {
        let amounts: &[i64] = match self {
            PlanType::Health => &[69, 120, 250, 400],
            PlanType::Life => &[120, 420, 800, 1500],
        };
        amounts
            .iter()
            .map(|a| Money::new(Decimal::from(*a), Currency::USD))
            .collect()
    }

    /// True if the amount matches one of the plan's tiers
    pub fn allows_claim_amount(&self, amount: Money) -> bool {
        self.reimbursable_tiers().contains(&amount)
    }

    /// True for plans that carry a beneficiary allocation
    pub fn requires_beneficiaries(&self) -> bool {
        matches!(self, PlanType::Life)
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlanType::Health => "Health",
            PlanType::Life => "Life",
        };
        write!(f, "{name}")
    }
}
