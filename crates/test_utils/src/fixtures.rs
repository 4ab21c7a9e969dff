//! Test Fixtures
//!
//! Pre-built, valid test data. Fixtures return fresh values on every call
//! so tests can mutate them freely.

use chrono::{NaiveDate, Utc};
use core_kernel::{Currency, FileReference, Money};
use domain_client::client::ClientProfile;
use rust_decimal_macros::dec;

/// Money values used across the suite
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// The Health plan monthly premium
    pub fn health_premium() -> Money {
        Money::new(dec!(69), Currency::USD)
    }

    /// The Life plan monthly premium
    pub fn life_premium() -> Money {
        Money::new(dec!(420), Currency::USD)
    }

    /// An amount outside every plan's tier set
    pub fn unlisted_amount() -> Money {
        Money::new(dec!(99), Currency::USD)
    }
}

/// Client profile fixtures
pub struct ProfileFixtures;

impl ProfileFixtures {
    /// A fully valid profile carrying the given national id
    pub fn valid(national_id: &str) -> ClientProfile {
        ClientProfile {
            first_names: "Maria Fernanda".to_string(),
            last_names: "Restrepo Diaz".to_string(),
            national_id: national_id.to_string(),
            phone: "3145557788".to_string(),
            email: "maria.restrepo@example.com".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1988, 3, 21).unwrap(),
            address: Some("Calle 10 # 43-12".to_string()),
            city: Some("Medellin".to_string()),
        }
    }
}

/// Attachment and proof-of-payment fixtures
pub struct FileFixtures;

impl FileFixtures {
    /// A small PDF receipt, valid as claim attachment or payment proof
    pub fn pdf_receipt() -> FileReference {
        FileReference::new("receipt.pdf", "application/pdf", 52_000).unwrap()
    }

    /// A JPEG photo of an invoice
    pub fn jpeg_invoice() -> FileReference {
        FileReference::new("invoice.jpg", "image/jpeg", 310_000).unwrap()
    }
}

/// Date fixtures anchored to the test run's clock
pub struct DateFixtures;

impl DateFixtures {
    /// Today in the engine's calendar
    pub fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    /// Tomorrow, for future-date rejection tests
    pub fn tomorrow() -> NaiveDate {
        Self::today().succ_opt().unwrap()
    }
}
