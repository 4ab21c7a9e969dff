//! Client entity

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::ClientId;

/// Identity fields captured by the registration form
///
/// Kept separate from [`Client`] so validation can run before an id is
/// allocated or anything is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientProfile {
    /// Given names
    pub first_names: String,
    /// Family names
    pub last_names: String,
    /// National id ("cedula"), numeric, 8-10 digits
    pub national_id: String,
    /// Mobile phone, 10 digits starting with 3
    pub phone: String,
    /// Contact email
    pub email: String,
    /// Date of birth
    pub date_of_birth: NaiveDate,
    /// Street address
    pub address: Option<String>,
    /// City of residence
    pub city: Option<String>,
}

/// A registered client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Unique identifier
    pub id: ClientId,
    /// Identity details
    pub profile: ClientProfile,
    /// Registration timestamp
    pub registered_at: DateTime<Utc>,
}

impl Client {
    /// Creates a client from an already-validated profile
    pub fn new(profile: ClientProfile) -> Self {
        Self {
            id: ClientId::new_v7(),
            profile,
            registered_at: Utc::now(),
        }
    }

    /// Returns the client's display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.profile.first_names, self.profile.last_names)
    }
}
